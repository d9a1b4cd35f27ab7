//! Index command handler.

use std::sync::Arc;

use ama_client::BackendClient;
use ama_core::{AppConfig, AppResult};
use ama_form::{view, Outcome, QuestionForm};
use clap::Args;

use super::ask::to_json;
use crate::spinner::LoadingSpinner;

/// Ask the backend to index a web page
#[derive(Args, Debug)]
pub struct IndexCommand {
    /// URL of the page to ingest
    pub url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl IndexCommand {
    pub async fn execute(
        &self,
        config: &AppConfig,
        client: Arc<dyn BackendClient>,
    ) -> AppResult<Outcome> {
        tracing::info!("Executing index command");
        tracing::debug!("Index options: {:?}", self);

        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            tracing::warn!("{} does not look like a URL; sending it anyway", self.url);
        }

        let mut form = QuestionForm::new(client)
            .with_observer(LoadingSpinner::new(config.no_color).observer());
        form.set_question(self.url.as_str());

        let outcome = form.submit_indexing().await;

        if self.json {
            println!("{}", to_json(&form, outcome)?);
        } else {
            print!("{}", view::render_results(&form));
        }

        Ok(outcome)
    }
}
