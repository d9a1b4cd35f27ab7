//! Wire types for the backend API.
//!
//! Response structs ignore fields they do not name, so the backend may add
//! data (it already echoes `question` on `/chat`) without breaking parsing.

use serde::{Deserialize, Serialize};

/// Request body shared by `/chat` and `/indexing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    /// Question text, or the URL to index
    pub message: String,
}

impl MessageRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `/chat` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Markdown answer
    pub answer: String,

    /// Supporting documents, most relevant first as ranked by the backend
    pub documents: Vec<Document>,
}

/// A scored search result returned alongside an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Similarity score
    pub score: f64,

    pub metadata: DocumentMetadata,
}

impl Document {
    pub fn new(score: f64, text: impl Into<String>) -> Self {
        Self {
            score,
            metadata: DocumentMetadata { text: text.into() },
        }
    }

    /// Document text.
    pub fn text(&self) -> &str {
        &self.metadata.text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub text: String,
}

/// `/indexing` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexingResponse {
    pub response: String,
}

/// `GET /health` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// `GET /` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceBanner {
    pub message: String,
}

/// Error body shapes the backend uses on failure.
///
/// Validation and timeout failures carry `detail`; indexing failures carry
/// `error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Human-readable reason, if the body carried one.
    pub(crate) fn reason(&self) -> Option<String> {
        if let Some(error) = &self.error {
            return Some(error.clone());
        }
        match &self.detail {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        }
    }
}
