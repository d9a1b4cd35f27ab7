//! Ask Me Anything Core Library
//!
//! This crate provides the foundational utilities shared by the client,
//! the form and the `ama` binary:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};
