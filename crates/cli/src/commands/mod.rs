//! Command handlers for the `ama` binary.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod ask;
pub mod health;
pub mod index;
pub mod shell;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use health::HealthCommand;
pub use index::IndexCommand;
pub use shell::ShellCommand;
