//! reqwest-backed implementation of [`BackendClient`].

use std::time::Duration;

use ama_core::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::BackendClient;
use crate::types::{
    ChatResponse, ErrorBody, HealthStatus, IndexingResponse, MessageRequest, ServiceBanner,
};

/// HTTP client for the Q&A backend.
pub struct HttpBackendClient {
    /// Base URL, without a trailing slash
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpBackendClient {
    /// Create a client for `base_url`.
    ///
    /// With `timeout` set to `None` a hung backend keeps the request open
    /// indefinitely.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::info!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(send_error)?;

        read_json(response).await
    }

    async fn get_json<T>(&self, path: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::info!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(send_error)?;

        read_json(response).await
    }
}

/// Map a transport failure to a request error.
fn send_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Request(format!("Request timed out: {}", err))
    } else {
        AppError::Request(format!("Network error: {}", err))
    }
}

/// Check the status and decode the body.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| AppError::Request(format!("Failed to read response body: {}", e)))?;

    if !status.is_success() {
        let reason = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.reason());

        tracing::debug!("Error body: {}", text);

        return Err(AppError::Request(match reason {
            Some(reason) => format!(
                "Request failed with status code {}: {}",
                status.as_u16(),
                reason
            ),
            None => format!("Request failed with status code {}", status.as_u16()),
        }));
    }

    tracing::debug!("Response body: {}", text);

    serde_json::from_str(&text)
        .map_err(|e| AppError::Request(format!("Failed to parse response: {}", e)))
}

#[async_trait::async_trait]
impl BackendClient for HttpBackendClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn chat(&self, message: &str) -> AppResult<ChatResponse> {
        tracing::debug!("Question: {}", message);
        let response: ChatResponse = self
            .post_json("/chat", &MessageRequest::new(message))
            .await?;
        tracing::info!(
            documents = response.documents.len(),
            "Received answer from backend"
        );
        Ok(response)
    }

    async fn index(&self, url: &str) -> AppResult<IndexingResponse> {
        tracing::debug!("Indexing: {}", url);
        self.post_json("/indexing", &MessageRequest::new(url)).await
    }

    async fn health(&self) -> AppResult<HealthStatus> {
        self.get_json("/health").await
    }

    async fn banner(&self) -> AppResult<ServiceBanner> {
        self.get_json("/").await
    }
}
