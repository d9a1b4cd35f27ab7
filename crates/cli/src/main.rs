//! Ask Me Anything CLI
//!
//! Main entry point for the `ama` command-line tool: a terminal front end
//! for a retrieval-augmented Q&A backend.

mod commands;
mod spinner;

use std::process::ExitCode;

use ama_client::create_client;
use ama_core::{config::AppConfig, logging, AppResult};
use clap::{Parser, Subcommand};
use commands::{AskCommand, HealthCommand, IndexCommand, ShellCommand};

/// Ask Me Anything - your AI-powered research assistant
#[derive(Parser, Debug)]
#[command(name = "ama")]
#[command(about = "Ask questions and index pages through a RAG backend", long_about = None)]
#[command(version)]
struct Cli {
    /// Backend base URL (default: http://127.0.0.1:8000)
    #[arg(short, long, global = true)]
    base_url: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Request timeout in seconds (default: wait forever)
    #[arg(short, long, global = true)]
    timeout: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a question
    Ask(AskCommand),

    /// Index a web page
    Index(IndexCommand),

    /// Interactive session
    Shell(ShellCommand),

    /// Check that the backend is up
    Health(HealthCommand),
}

#[tokio::main]
async fn main() -> AppResult<ExitCode> {
    let cli = Cli::parse();

    // An explicit --config wins over AMA_CONFIG.
    let config = match &cli.config {
        Some(path) => {
            let path = path.to_string_lossy().to_string();
            AppConfig::load_with(|key| {
                if key == "AMA_CONFIG" {
                    Some(path.clone())
                } else {
                    std::env::var(key).ok()
                }
            })?
        }
        None => AppConfig::load()?,
    };

    let config = config.with_overrides(
        cli.base_url,
        cli.timeout,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Ask Me Anything CLI starting");
    tracing::debug!("Backend: {}", config.base_url);
    tracing::debug!("Timeout: {:?}", config.timeout_secs);

    let client = create_client(&config)?;

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Index(_) => "index",
        Commands::Shell(_) => "shell",
        Commands::Health(_) => "health",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config, client).await,
        Commands::Index(cmd) => cmd.execute(&config, client).await,
        Commands::Shell(cmd) => cmd.execute(&config, client).await,
        Commands::Health(cmd) => cmd.execute(client).await,
    };

    match &result {
        Ok(outcome) if outcome.is_success() => tracing::info!("Command completed successfully"),
        Ok(_) => tracing::warn!("Command completed with a failed request"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result.map(|outcome| {
        if outcome.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    })
}
