//! Ask command handler.
//!
//! Submits one question through the form and prints the results.

use std::sync::Arc;

use ama_client::BackendClient;
use ama_core::{AppConfig, AppResult};
use ama_form::{view, Outcome, QuestionForm};
use clap::Args;

use crate::spinner::LoadingSpinner;

/// Ask the backend a question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,

    /// Show the text of every supporting document
    #[arg(short, long)]
    pub expand: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(
        &self,
        config: &AppConfig,
        client: Arc<dyn BackendClient>,
    ) -> AppResult<Outcome> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        let mut form = QuestionForm::new(client)
            .with_observer(LoadingSpinner::new(config.no_color).observer());
        form.set_question(self.question_text());

        let outcome = form.submit_question().await;

        if self.expand {
            for index in 0..form.expanders().len() {
                form.toggle_document(index)?;
            }
        }

        if self.json {
            println!("{}", to_json(&form, outcome)?);
        } else {
            print!("{}", view::render_results(&form));
        }

        Ok(outcome)
    }

    /// Words joined back into one question.
    fn question_text(&self) -> String {
        self.question.join(" ")
    }
}

/// Form state as pretty-printed JSON, shared with `index --json`.
pub(crate) fn to_json(form: &QuestionForm, outcome: Outcome) -> AppResult<String> {
    let output = serde_json::json!({
        "ok": outcome.is_success(),
        "question": form.question(),
        "answer": form.answer(),
        "documents": form.documents(),
    });

    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ama_client::{ChatResponse, Document, MockBackend};

    #[test]
    fn test_question_words_are_joined() {
        let cmd = AskCommand {
            question: vec!["what".into(), "is".into(), "rag?".into()],
            expand: false,
            json: false,
        };
        assert_eq!(cmd.question_text(), "what is rag?");
    }

    #[tokio::test]
    async fn test_json_output() {
        let mock = Arc::new(MockBackend::new().with_chat(ChatResponse {
            answer: "X".into(),
            documents: vec![Document::new(0.987, "T")],
        }));
        let mut form = QuestionForm::new(mock);
        form.set_question("q");
        let outcome = form.submit_question().await;

        let json = to_json(&form, outcome).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["answer"], "X");
        assert_eq!(value["documents"][0]["metadata"]["text"], "T");
    }
}
