//! Configuration management for the Ask Me Anything client.
//!
//! Configuration is merged from several sources, lowest precedence first:
//! - Built-in defaults (loopback backend, no timeout)
//! - Config file (`.ama/config.yaml`, or the path in `AMA_CONFIG`)
//! - Environment variables
//! - Command-line flags

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Config file location, relative to the current directory.
pub const DEFAULT_CONFIG_PATH: &str = ".ama/config.yaml";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend base URL, without a trailing slash
    pub base_url: String,

    /// Per-request timeout in seconds. `None` waits forever.
    pub timeout_secs: Option<u64>,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    backend: Option<BackendSection>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BackendSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            config_file: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and process environment.
    ///
    /// Environment variables:
    /// - `AMA_CONFIG`: Path to config file
    /// - `AMA_BASE_URL`: Backend base URL
    /// - `AMA_TIMEOUT_SECS`: Request timeout in seconds
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use ama_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Backend: {}", config.base_url);
    /// ```
    pub fn load() -> AppResult<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration using `env` to look up variables.
    pub fn load_with<F>(env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(config_file) = env("AMA_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        let config_path = config
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        } else if config.config_file.is_some() {
            return Err(AppError::Config(format!(
                "Config file does not exist: {:?}",
                config_path
            )));
        }

        // Environment variables override YAML config
        if let Some(base_url) = env("AMA_BASE_URL") {
            config.base_url = base_url;
        }

        if let Some(timeout) = env("AMA_TIMEOUT_SECS") {
            let secs = timeout.trim().parse::<u64>().map_err(|e| {
                AppError::Config(format!("Invalid AMA_TIMEOUT_SECS {:?}: {}", timeout, e))
            })?;
            config.timeout_secs = Some(secs);
        }

        if let Some(level) = env("RUST_LOG") {
            config.log_level = Some(level);
        }

        if env("NO_COLOR").is_some() {
            config.no_color = true;
        }

        config.base_url = normalize_base_url(&config.base_url);
        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = if contents.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|e| {
                AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?
        };

        let mut result = self.clone();

        if let Some(backend) = config_file.backend {
            if let Some(base_url) = backend.base_url {
                result.base_url = base_url;
            }
            if let Some(timeout) = backend.timeout_secs {
                result.timeout_secs = Some(timeout);
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over the environment and the config file.
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        timeout_secs: Option<u64>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = normalize_base_url(&base_url);
        }

        if let Some(timeout_secs) = timeout_secs {
            self.timeout_secs = Some(timeout_secs);
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Validate the backend settings.
    pub fn validate(&self) -> AppResult<()> {
        let rest = self
            .base_url
            .strip_prefix("http://")
            .or_else(|| self.base_url.strip_prefix("https://"));

        match rest {
            Some(host) if !host.is_empty() => {}
            _ => {
                return Err(AppError::Config(format!(
                    "Invalid backend URL: {:?}. Expected http://host[:port] or https://host[:port]",
                    self.base_url
                )));
            }
        }

        if self.timeout_secs == Some(0) {
            return Err(AppError::Config(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }

    /// Request timeout as a `Duration`, if one is configured.
    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_secs.map(std::time::Duration::from_secs)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
