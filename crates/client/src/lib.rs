//! Backend client crate for the Ask Me Anything workspace.
//!
//! The backend is a retrieval-augmented Q&A service reached over HTTP. This
//! crate owns its wire format and a trait-based client so the form can be
//! driven by the real HTTP implementation or by [`MockBackend`] in tests.
//!
//! # Endpoints
//! - `POST /chat` — answer a question, with supporting documents
//! - `POST /indexing` — ingest a URL
//! - `GET /health`, `GET /` — liveness and banner
//!
//! # Example
//! ```no_run
//! use ama_client::{BackendClient, HttpBackendClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpBackendClient::new("http://127.0.0.1:8000", None)?;
//! let reply = client.chat("What is RAG?").await?;
//! println!("{}", reply.answer);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod http;
pub mod mock;
pub mod types;

// Re-export main types
pub use client::BackendClient;
pub use factory::create_client;
pub use http::HttpBackendClient;
pub use mock::MockBackend;
pub use types::{
    ChatResponse, Document, DocumentMetadata, HealthStatus, IndexingResponse, MessageRequest,
    ServiceBanner,
};
