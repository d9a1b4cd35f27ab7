//! Logging infrastructure for the Ask Me Anything client.
//!
//! All logs go to stderr; stdout carries the rendered page.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AppError, AppResult};

/// Initialize the tracing subscriber with stderr output.
///
/// # Arguments
/// * `log_level` - Optional filter override (e.g., "debug", "ama_client=trace")
/// * `no_color` - Disable ANSI colors
///
/// # Example
/// ```no_run
/// use ama_core::logging::init_logging;
///
/// init_logging(None, false).expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level: Option<&str>, no_color: bool) -> AppResult<()> {
    let env_filter = build_filter(log_level)?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(!no_color && supports_color());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to init logging: {}", e)))?;

    Ok(())
}

/// Resolve the filter: explicit level, then `RUST_LOG`, then `info`.
fn build_filter(log_level: Option<&str>) -> AppResult<EnvFilter> {
    let default_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let filter_str = log_level.unwrap_or(&default_level);

    EnvFilter::try_new(filter_str)
        .map_err(|e| AppError::Config(format!("Invalid log filter: {}", e)))
}

fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}
