//! Collapsible document items.

use ama_client::Document;

/// A document title that reveals its text when opened.
///
/// Items start closed and are rebuilt from scratch on every reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Expander {
    title: String,
    content: String,
    open: bool,
}

impl Expander {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            open: false,
        }
    }

    /// Item for the document at 0-based `index` in a reply.
    pub fn for_document(index: usize, document: &Document) -> Self {
        Self::new(
            format!(
                "Document {} (Score: {:.3})",
                index + 1,
                round_half_up(document.score)
            ),
            document.text(),
        )
    }

    /// Flip open/closed; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Content, only while open.
    pub fn visible_content(&self) -> Option<&str> {
        self.open.then_some(self.content.as_str())
    }
}

/// Round to three places with ties going away from zero.
///
/// `{:.3}` alone rounds exact ties to even (0.0625 -> "0.062").
fn round_half_up(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_formats_score_to_three_places() {
        let item = Expander::for_document(0, &Document::new(0.987, "T"));
        assert_eq!(item.title(), "Document 1 (Score: 0.987)");

        let item = Expander::for_document(4, &Document::new(0.5, "T"));
        assert_eq!(item.title(), "Document 5 (Score: 0.500)");
    }

    #[test]
    fn test_score_ties_round_up() {
        let title = |score: f64| {
            Expander::for_document(0, &Document::new(score, "T"))
                .title()
                .to_string()
        };
        assert_eq!(title(0.0625), "Document 1 (Score: 0.063)");
        assert_eq!(title(0.5625), "Document 1 (Score: 0.563)");
        assert_eq!(title(0.8125), "Document 1 (Score: 0.813)");
        assert_eq!(title(0.9375), "Document 1 (Score: 0.938)");
    }

    #[test]
    fn test_toggle() {
        let mut item = Expander::new("Document 1", "body");
        assert_eq!(item.visible_content(), None);

        assert!(item.toggle());
        assert_eq!(item.visible_content(), Some("body"));

        assert!(!item.toggle());
        assert_eq!(item.visible_content(), None);
    }
}
