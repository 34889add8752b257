//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::amazon::client::DEFAULT_USER_AGENT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the web UI listens on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// User-Agent header sent with the page request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Request timeout in seconds (HTTP client default when unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Emulate a real browser's TLS/HTTP2 fingerprint
    #[serde(default)]
    pub impersonate: bool,

    /// Number of histogram bins
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,

    /// Output format for the `analyze` command
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_bind() -> String {
    "127.0.0.1:8501".to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_histogram_bins() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            user_agent: default_user_agent(),
            proxy: None,
            timeout_secs: None,
            impersonate: false,
            histogram_bins: default_histogram_bins(),
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("amz-sentiment").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(bind) = std::env::var("AMZ_BIND") {
            self.bind = bind;
        }

        if let Ok(user_agent) = std::env::var("AMZ_USER_AGENT") {
            self.user_agent = user_agent;
        }

        if let Ok(proxy) = std::env::var("AMZ_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(timeout) = std::env::var("AMZ_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = Some(t);
            }
        }

        self
    }
}

/// Output format for the `analyze` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
