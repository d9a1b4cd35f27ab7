//! Page rendering.
//!
//! The page is the shell (title and subtitle) with the form mounted under
//! it. Rendering only reads the form.

use crate::form::QuestionForm;
use crate::markdown::render_markdown;
use crate::state::Action;

pub const TITLE: &str = "Ask Me Anything 📚✨";
pub const SUBTITLE: &str = "Your AI-powered research assistant";
pub const QUESTION_PLACEHOLDER: &str = "Ask a question or enter URL to index";
pub const LOADING: &str = "Loading...";

/// Page header.
pub fn render_shell() -> String {
    format!("{}\n{}\n", TITLE, SUBTITLE)
}

/// Full page: shell, then the form.
pub fn render_page(form: &QuestionForm) -> String {
    let mut page = render_shell();
    page.push('\n');
    page.push_str(&render_form(form));
    page
}

/// Input line, buttons, loader and results.
pub fn render_form(form: &QuestionForm) -> String {
    let mut out = String::new();

    let question = if form.question().is_empty() {
        QUESTION_PLACEHOLDER
    } else {
        form.question()
    };
    out.push_str(&format!("> {}\n", question));
    out.push_str(&format!(
        "[{}] [{}]\n",
        Action::Ask.label(),
        Action::Index.label()
    ));

    if form.is_loading() {
        out.push('\n');
        out.push_str(LOADING);
        out.push('\n');
    }

    out.push_str(&render_results(form));
    out
}

/// Answer and document list; empty until there is an answer.
pub fn render_results(form: &QuestionForm) -> String {
    let mut out = String::new();
    if !form.state().has_answer() {
        return out;
    }

    out.push_str("\nAnswer:\n");
    out.push_str(&render_markdown(form.answer()));
    out.push('\n');

    if !form.expanders().is_empty() {
        out.push_str("\nDocuments:\n");
        for item in form.expanders() {
            let marker = if item.is_open() { '▾' } else { '▸' };
            out.push_str(&format!("{} {}\n", marker, item.title()));
            if let Some(content) = item.visible_content() {
                for line in content.lines() {
                    out.push_str("    ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormEvent;
    use ama_client::{ChatResponse, Document, MockBackend};
    use std::sync::Arc;

    fn form_with_reply(documents: Vec<Document>) -> (QuestionForm, Arc<MockBackend>) {
        let mock = Arc::new(MockBackend::new().with_chat(ChatResponse {
            answer: "X".to_string(),
            documents,
        }));
        (QuestionForm::new(mock.clone()), mock)
    }

    #[test]
    fn test_empty_page() {
        let (form, _) = form_with_reply(vec![]);
        let page = render_page(&form);

        assert!(page.starts_with(TITLE));
        assert!(page.contains(SUBTITLE));
        assert!(page.contains(QUESTION_PLACEHOLDER));
        assert!(page.contains("[Q&A] [Index]"));
        assert!(!page.contains("Answer:"));
        assert!(!page.contains(LOADING));
    }

    #[tokio::test]
    async fn test_answer_without_documents() {
        let (mut form, _) = form_with_reply(vec![]);
        form.submit_question().await;

        let results = render_results(&form);
        assert_eq!(results, "\nAnswer:\nX\n");
        assert!(!results.contains("Documents:"));
    }

    #[tokio::test]
    async fn test_collapsed_then_open_document() {
        let (mut form, _) = form_with_reply(vec![Document::new(0.987, "Tokio drives the futures")]);
        form.submit_question().await;

        let page = render_page(&form);
        assert!(page.contains("Documents:\n▸ Document 1 (Score: 0.987)\n"));
        assert!(!page.contains("Tokio drives the futures"));

        form.toggle_document(0).unwrap();
        let page = render_page(&form);
        assert!(page.contains("▾ Document 1 (Score: 0.987)\n    Tokio drives the futures\n"));

        form.toggle_document(0).unwrap();
        assert!(!render_page(&form).contains("Tokio drives the futures"));
    }

    #[tokio::test]
    async fn test_documents_render_in_received_order() {
        let (mut form, _) = form_with_reply(vec![
            Document::new(0.5, "first body"),
            Document::new(0.9, "second body"),
        ]);
        form.submit_question().await;

        let page = render_page(&form);
        let first = page.find("Document 1 (Score: 0.500)").unwrap();
        let second = page.find("Document 2 (Score: 0.900)").unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_loading_line_only_while_request_is_held() {
        let mock = Arc::new(MockBackend::new().gated().with_index("done"));
        let pages = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = pages.clone();

        // Re-render through the observer, the way the terminal does.
        let mut form = QuestionForm::new(mock.clone()).with_observer(Arc::new(
            move |_event: FormEvent, form: &QuestionForm| {
                sink.lock().unwrap().push(render_page(form));
            },
        ));
        form.set_question("https://example.com");

        let (_, ()) = futures::join!(form.submit_indexing(), async {
            let pages = pages.lock().unwrap();
            assert_eq!(pages.len(), 1);
            assert!(pages[0].contains(LOADING));
            assert!(!pages[0].contains("Answer:"));
            drop(pages);
            mock.release();
        });

        let pages = pages.lock().unwrap();
        assert_eq!(pages.len(), 2);
        assert!(!pages[1].contains(LOADING));
        assert!(pages[1].contains("\nAnswer:\ndone\n"));
        assert!(!pages[1].contains("Documents:"));
    }
}
