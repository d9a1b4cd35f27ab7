//! Backend client abstraction.

use ama_core::AppResult;

use crate::types::{ChatResponse, HealthStatus, IndexingResponse, ServiceBanner};

/// Trait for talking to the Q&A backend.
///
/// Every method resolves to `AppError::Request` on any failure: network,
/// non-2xx status or an unparseable body.
#[async_trait::async_trait]
pub trait BackendClient: Send + Sync {
    /// Base URL requests are sent to (for logs and diagnostics).
    fn base_url(&self) -> &str;

    /// Ask a question; returns the answer and its supporting documents.
    async fn chat(&self, message: &str) -> AppResult<ChatResponse>;

    /// Ask the backend to ingest `url`.
    async fn index(&self, url: &str) -> AppResult<IndexingResponse>;

    /// Liveness check.
    async fn health(&self) -> AppResult<HealthStatus>;

    /// Service banner served at the root path.
    async fn banner(&self) -> AppResult<ServiceBanner>;
}
