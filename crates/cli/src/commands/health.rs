//! Health command handler.

use std::sync::Arc;

use ama_client::BackendClient;
use ama_core::AppResult;
use ama_form::Outcome;
use clap::Args;

/// Check that the backend is reachable
#[derive(Args, Debug)]
pub struct HealthCommand {
    /// Also print the service banner
    #[arg(long)]
    pub banner: bool,
}

impl HealthCommand {
    pub async fn execute(&self, client: Arc<dyn BackendClient>) -> AppResult<Outcome> {
        tracing::info!("Executing health command");

        let status = client.health().await?;
        println!("{}: {}", client.base_url(), status.status);

        if self.banner {
            let banner = client.banner().await?;
            println!("{}", banner.message);
        }

        Ok(if status.is_ok() {
            Outcome::Success
        } else {
            Outcome::Failure
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ama_client::mock::{MockBackend, MockCall};

    #[tokio::test]
    async fn test_health_with_banner() {
        let mock = Arc::new(MockBackend::new());
        let cmd = HealthCommand { banner: true };

        let outcome = cmd.execute(mock.clone()).await.unwrap();

        assert!(outcome.is_success());
        assert_eq!(mock.calls(), vec![MockCall::Health, MockCall::Banner]);
    }
}
