//! Backend client factory.
//!
//! Builds the client the rest of the workspace talks to from the merged
//! application configuration.

use std::sync::Arc;

use ama_core::{AppConfig, AppResult};

use crate::client::BackendClient;
use crate::http::HttpBackendClient;

/// Create a backend client for `config`.
///
/// # Errors
/// Returns a configuration error if the base URL or timeout is invalid,
/// or if the HTTP client cannot be initialized.
pub fn create_client(config: &AppConfig) -> AppResult<Arc<dyn BackendClient>> {
    config.validate()?;

    tracing::debug!(
        base_url = %config.base_url,
        timeout_secs = ?config.timeout_secs,
        "Creating backend client"
    );

    let client = HttpBackendClient::new(&config.base_url, config.timeout())?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_default_client() {
        let client = create_client(&AppConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_create_client_with_timeout() {
        let config = AppConfig::default().with_overrides(
            Some("http://localhost:8080".to_string()),
            Some(120),
            None,
            false,
            false,
        );
        assert_eq!(config.timeout(), Some(std::time::Duration::from_secs(120)));
        let client = create_client(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut config = AppConfig::default();
        config.base_url = "localhost:8000".to_string();
        match create_client(&config) {
            Err(err) => assert!(err.to_string().contains("Invalid backend URL")),
            Ok(_) => panic!("Expected error for URL without scheme"),
        }
    }
}
