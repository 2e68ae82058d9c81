//! Run configuration: a TOML file layered under `HH_*` environment overrides.
//!
//! Only transport and presentation settings live here. What is searched for and which
//! currency counts are fixed in [`SearchParams`].

use crate::format::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";

/// Search text sent with every request.
pub const SEARCH_TEXT: &str = "java";

/// Vacancies requested per page.
pub const PAGE_SIZE: u32 = 100;

/// Only salaries quoted in this currency are counted.
pub const TARGET_CURRENCY: &str = "RUR";

const CONFIG_FILE: &str = "config.toml";
const APP_DIR: &str = "hh-salaries";

/// Transport and output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API root the `/vacancies` endpoint hangs off
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// User-Agent sent with every request; hh.ru refuses anonymous clients
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Report rendering
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("{}/{}", APP_DIR, env!("CARGO_PKG_VERSION"))
}

/// Reads an environment variable, treating unset and blank values alike.
fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            proxy: None,
            user_agent: default_user_agent(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading config {}", path.display());

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Places a config file is looked for when none is given, in priority order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(APP_DIR).join(CONFIG_FILE));
        }
        paths
    }

    /// Loads `explicit_path` if given, else the first existing search path, else
    /// defaults. An explicit path that cannot be read is an error.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        match Self::search_paths().into_iter().find(|p| p.is_file()) {
            Some(found) => Self::from_file(found),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies `HH_API_URL`, `HH_PROXY` and `HH_USER_AGENT`. Blank values are ignored.
    pub fn with_env(mut self) -> Self {
        if let Some(url) = env_value("HH_API_URL") {
            self.base_url = url;
        }
        if let Some(proxy) = env_value("HH_PROXY") {
            self.proxy = Some(proxy);
        }
        if let Some(agent) = env_value("HH_USER_AGENT") {
            self.user_agent = agent;
        }
        self
    }
}

/// Fixed search parameters handed to the client and the report driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Free-text search term
    pub text: String,
    /// Vacancies per page
    pub per_page: u32,
    /// Currency a salary must be quoted in to be counted
    pub currency: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            text: SEARCH_TEXT.to_string(),
            per_page: PAGE_SIZE,
            currency: TARGET_CURRENCY.to_string(),
        }
    }
}
