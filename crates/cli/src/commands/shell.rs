//! Interactive shell: the form as a line-oriented terminal page.
//!
//! A plain line sets the question and submits it. Lines starting with `/`
//! are commands.

use std::sync::Arc;

use ama_client::BackendClient;
use ama_core::{AppConfig, AppError, AppResult};
use ama_form::{view, Action, Outcome, QuestionForm};
use clap::Args;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::spinner::LoadingSpinner;

const HELP: &str = "\
Type a question and press Enter to ask it.
  /ask            ask the current question again
  /ask <text>     ask <text>, even when it starts with /
  /index [url]    index a URL (defaults to the current text)
  /set <text>     change the current text without submitting
  /open <n>       show or hide document n
  /question       print the current text
  /show           redraw the page
  /help           show this help
  /quit           leave";

/// Start an interactive session
#[derive(Args, Debug)]
pub struct ShellCommand {
    /// Initial question text
    #[arg(long)]
    pub question: Option<String>,
}

/// One parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    /// Replace the text, then submit it with the given action
    Submit(Action, Option<String>),
    /// Replace the text only
    Set(String),
    /// Toggle document `n` (1-based, as displayed)
    Toggle(usize),
    ShowQuestion,
    Show,
    Help,
    Quit,
    Empty,
}

impl ShellInput {
    /// Parse one input line.
    pub fn parse(line: &str) -> AppResult<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Empty);
        }

        let Some(command) = line.strip_prefix('/') else {
            return Ok(Self::Submit(Action::Ask, Some(line.to_string())));
        };

        let (name, rest) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_string());

        match name {
            "ask" | "q" => Ok(Self::Submit(Action::Ask, arg)),
            "index" | "i" => Ok(Self::Submit(Action::Index, arg)),
            "set" => Ok(Self::Set(rest.to_string())),
            "open" | "o" => {
                let n = rest.parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
                    AppError::Ui(format!("/open expects a document number, got {:?}", rest))
                })?;
                Ok(Self::Toggle(n))
            }
            "question" => Ok(Self::ShowQuestion),
            "show" => Ok(Self::Show),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(AppError::Ui(format!(
                "Unknown command /{}. Type /help for the list.",
                other
            ))),
        }
    }
}

impl ShellCommand {
    pub async fn execute(
        &self,
        config: &AppConfig,
        client: Arc<dyn BackendClient>,
    ) -> AppResult<Outcome> {
        tracing::info!("Starting interactive shell against {}", client.base_url());

        let mut form = QuestionForm::new(client)
            .with_observer(LoadingSpinner::new(config.no_color).observer());
        if let Some(question) = &self.question {
            form.set_question(question.as_str());
        }

        println!("{}", view::render_page(&form));
        println!("Type /help for commands.");

        run(&mut form, BufReader::new(tokio::io::stdin())).await?;

        tracing::info!("Shell closed");
        Ok(Outcome::Success)
    }
}

/// Feed input lines to the form until `/quit` or end of input.
///
/// Lines that are not valid UTF-8 or fail to parse are reported and skipped.
async fn run<R>(form: &mut QuestionForm, mut reader: R) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }

        let input = match decode_line(&buf).and_then(|line| ShellInput::parse(&line)) {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!("Skipping input line: {}", e);
                eprintln!("{}", e);
                continue;
            }
        };

        if !apply(form, input).await {
            return Ok(());
        }
    }
}

/// Raw line bytes to text, without the line terminator.
fn decode_line(bytes: &[u8]) -> AppResult<String> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8(bytes.to_vec())
        .map_err(|e| AppError::Ui(format!("Input is not valid UTF-8: {}", e)))
}

/// Apply one input to the form and print what changed.
///
/// Returns `false` when the session should end.
async fn apply(form: &mut QuestionForm, input: ShellInput) -> bool {
    match input {
        ShellInput::Submit(action, text) => {
            if let Some(text) = text {
                form.set_question(text);
            }
            form.submit(action).await;
            print!("{}", view::render_results(form));
        }
        ShellInput::Set(text) => form.set_question(text),
        ShellInput::Toggle(n) => match form.toggle_document(n.saturating_sub(1)) {
            Ok(_) => print!("{}", view::render_results(form)),
            Err(e) => eprintln!("{}", e),
        },
        ShellInput::ShowQuestion => println!("{}", form.question()),
        ShellInput::Show => println!("{}", view::render_page(form)),
        ShellInput::Help => println!("{}", HELP),
        ShellInput::Quit => return false,
        ShellInput::Empty => {}
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use ama_client::mock::{MockBackend, MockCall};
    use ama_client::{ChatResponse, Document};

    #[test]
    fn test_parse_plain_line_is_question() {
        assert_eq!(
            ShellInput::parse("  what is rag?  ").unwrap(),
            ShellInput::Submit(Action::Ask, Some("what is rag?".into()))
        );
        assert_eq!(ShellInput::parse("   ").unwrap(), ShellInput::Empty);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            ShellInput::parse("/index https://example.com").unwrap(),
            ShellInput::Submit(Action::Index, Some("https://example.com".into()))
        );
        assert_eq!(
            ShellInput::parse("/index").unwrap(),
            ShellInput::Submit(Action::Index, None)
        );
        assert_eq!(
            ShellInput::parse("/ask").unwrap(),
            ShellInput::Submit(Action::Ask, None)
        );
        assert_eq!(
            ShellInput::parse("/set new text").unwrap(),
            ShellInput::Set("new text".into())
        );
        assert_eq!(ShellInput::parse("/open 2").unwrap(), ShellInput::Toggle(2));
        assert_eq!(ShellInput::parse("/quit").unwrap(), ShellInput::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(ShellInput::parse("/open"), Err(AppError::Ui(_))));
        assert!(matches!(ShellInput::parse("/open 0"), Err(AppError::Ui(_))));
        assert!(matches!(ShellInput::parse("/frobnicate"), Err(AppError::Ui(_))));
    }

    #[test]
    fn test_slash_question_through_ask() {
        assert!(HELP.contains("/ask <text>"));
        assert_eq!(
            ShellInput::parse("/ask /etc/hosts format?").unwrap(),
            ShellInput::Submit(Action::Ask, Some("/etc/hosts format?".into()))
        );
    }

    #[test]
    fn test_decode_line() {
        assert_eq!(decode_line(b"hello\r\n").unwrap(), "hello");
        assert_eq!(decode_line(b"last").unwrap(), "last");
        assert!(matches!(decode_line(b"bad \xff\n"), Err(AppError::Ui(_))));
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_does_not_end_session() {
        let mock = Arc::new(MockBackend::new().with_chat(ChatResponse {
            answer: "X".into(),
            documents: vec![],
        }));
        let mut form = QuestionForm::new(mock.clone());

        let input: &[u8] = b"bad \xff line\nhello\n/quit\nnever sent\n";
        run(&mut form, input).await.unwrap();

        assert_eq!(form.answer(), "X");
        assert_eq!(mock.calls(), vec![MockCall::Chat("hello".into())]);
    }

    #[tokio::test]
    async fn test_session_keeps_question_between_actions() {
        let mock = Arc::new(
            MockBackend::new()
                .with_chat(ChatResponse {
                    answer: "X".into(),
                    documents: vec![Document::new(0.987, "T")],
                })
                .with_index("done"),
        );
        let mut form = QuestionForm::new(mock.clone());

        let script = ["https://example.com", "/open 1", "/index", "/quit"];
        let mut keep_going = Vec::new();
        for line in script {
            keep_going.push(apply(&mut form, ShellInput::parse(line).unwrap()).await);
        }

        assert_eq!(keep_going, vec![true, true, true, false]);
        assert_eq!(form.answer(), "done");
        assert!(form.expanders().is_empty());
        assert_eq!(
            mock.calls(),
            vec![
                MockCall::Chat("https://example.com".into()),
                MockCall::Index("https://example.com".into()),
            ]
        );
    }
}
