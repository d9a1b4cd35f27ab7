//! Render markdown answers as plain terminal text.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Flatten markdown into readable text.
///
/// Emphasis markers are dropped, list items keep their bullets or numbers,
/// code blocks are indented by four spaces and links show their target in
/// parentheses.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut out = String::new();
    let mut lists: Vec<Option<u64>> = Vec::new();
    let mut links: Vec<String> = Vec::new();
    let mut in_code_block = false;

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::Heading { .. }) => ensure_blank_line(&mut out),
            Event::End(TagEnd::Heading(_)) => out.push_str("\n\n"),

            Event::End(TagEnd::Paragraph) => {
                out.push('\n');
                if lists.is_empty() {
                    out.push('\n');
                }
            }

            Event::Start(Tag::List(start)) => {
                ensure_line_start(&mut out);
                lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                lists.pop();
                if lists.is_empty() {
                    ensure_line_start(&mut out);
                    out.push('\n');
                }
            }
            Event::Start(Tag::Item) => {
                ensure_line_start(&mut out);
                out.push_str(&"  ".repeat(lists.len().saturating_sub(1)));
                match lists.last_mut() {
                    Some(Some(n)) => {
                        out.push_str(&format!("{}. ", n));
                        *n += 1;
                    }
                    _ => out.push_str("- "),
                }
            }
            Event::End(TagEnd::Item) => ensure_line_start(&mut out),

            Event::Start(Tag::CodeBlock(_)) => {
                ensure_line_start(&mut out);
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                out.push('\n');
            }

            Event::Start(Tag::Link { dest_url, .. }) => links.push(dest_url.to_string()),
            Event::End(TagEnd::Link) => {
                if let Some(url) = links.pop() {
                    out.push_str(&format!(" ({})", url));
                }
            }

            Event::Text(text) if in_code_block => {
                for line in text.lines() {
                    out.push_str("    ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            Event::Text(text) => out.push_str(&text),
            Event::Code(code) => {
                out.push('`');
                out.push_str(&code);
                out.push('`');
            }
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => {
                ensure_line_start(&mut out);
                out.push_str("---\n\n");
            }

            // Table cells are separated by a tab; rows end the line.
            Event::End(TagEnd::TableCell) => out.push('\t'),
            Event::End(TagEnd::TableHead) | Event::End(TagEnd::TableRow) => {
                let trimmed = out.trim_end_matches('\t').len();
                out.truncate(trimmed);
                out.push('\n');
            }
            Event::End(TagEnd::Table) => out.push('\n'),

            _ => {}
        }
    }

    out.trim_end().to_string()
}

fn ensure_line_start(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn ensure_blank_line(out: &mut String) {
    ensure_line_start(out);
    if !out.is_empty() && !out.ends_with("\n\n") {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(render_markdown("X"), "X");
        assert_eq!(render_markdown("done"), "done");
    }

    #[test]
    fn test_headings_emphasis_and_lists() {
        let rendered = render_markdown("# Title\n\nSome **bold** text.\n\n- a\n- b\n");
        assert_eq!(rendered, "Title\n\nSome bold text.\n\n- a\n- b");
    }

    #[test]
    fn test_ordered_list_numbers() {
        let rendered = render_markdown("1. first\n2. second\n");
        assert_eq!(rendered, "1. first\n2. second");
    }

    #[test]
    fn test_code_and_links() {
        let rendered =
            render_markdown("See [docs](https://example.com) and `cargo`.\n\n```\nfn main() {}\n```\n");
        assert_eq!(
            rendered,
            "See docs (https://example.com) and `cargo`.\n\n    fn main() {}"
        );
    }
}
