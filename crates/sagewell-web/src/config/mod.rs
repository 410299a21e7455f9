//! Configuration loading for Sagewell.
//! Reads sagewell.toml from the current directory or the path in SAGEWELL_CONFIG,
//! then applies SAGEWELL_HOST / SAGEWELL_PORT / SAGEWELL_TOKENS overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sagewell_common::{Result, SagewellError};
use sagewell_ranker::query::{MAX_QUESTION_CHARS, MAX_SEARCH_QUERY_CHARS};
use sagewell_ranker::search::DEFAULT_RESULT_LIMIT;

pub const CONFIG_ENV: &str = "SAGEWELL_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "sagewell.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ask: AskConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

/// Bearer tokens accepted on protected routes. Empty disables the check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_max_query_chars")]
    pub max_query_chars: usize,
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
}

fn default_max_query_chars() -> usize { MAX_SEARCH_QUERY_CHARS }
fn default_result_limit()    -> usize { DEFAULT_RESULT_LIMIT }

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_query_chars: default_max_query_chars(), result_limit: default_result_limit() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskConfig {
    #[serde(default = "default_max_question_chars")]
    pub max_question_chars: usize,
}

fn default_max_question_chars() -> usize { MAX_QUESTION_CHARS }

impl Default for AskConfig {
    fn default() -> Self {
        Self { max_question_chars: default_max_question_chars() }
    }
}

impl Config {
    /// Load from SAGEWELL_CONFIG or ./sagewell.toml, falling back to defaults
    /// when neither exists, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            Err(_) => {
                tracing::info!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                Self::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply SAGEWELL_* overrides. `lookup` abstracts the environment for tests.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup("SAGEWELL_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SAGEWELL_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| SagewellError::Config(format!("SAGEWELL_PORT is not a port: {port}")))?;
        }
        if let Some(tokens) = lookup("SAGEWELL_TOKENS") {
            self.auth.tokens = tokens
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect();
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.search.max_query_chars == 0 {
            return Err(SagewellError::Config("search.max_query_chars must be positive".into()));
        }
        if self.search.result_limit == 0 {
            return Err(SagewellError::Config("search.result_limit must be positive".into()));
        }
        if self.ask.max_question_chars == 0 {
            return Err(SagewellError::Config("ask.max_question_chars must be positive".into()));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

mod tests;
