// src/config.rs
// Environment-based configuration - single source of truth for all env vars

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{PersonaError, Result};
use crate::generator::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// Default base URL for the OpenAI API, overridable via OPENAI_BASE_URL
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
/// Default directory persona files are written to
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Reddit script-app credentials (REDDIT_CLIENT_ID, REDDIT_CLIENT_SECRET,
/// REDDIT_USER_AGENT)
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

/// Process configuration, loaded once at startup and passed by reference
/// into the components that need it. No ambient globals.
#[derive(Debug, Clone)]
pub struct Config {
    pub reddit: RedditCredentials,
    /// OpenAI API key (OPENAI_API_KEY)
    pub openai_api_key: String,
    /// OpenAI API base URL (OPENAI_BASE_URL)
    pub openai_base_url: String,
    /// Completion model (REDSONA_MODEL)
    pub model: String,
    /// Sampling temperature (REDSONA_TEMPERATURE)
    pub temperature: f64,
    /// Persona output directory (REDSONA_OUTPUT_DIR)
    pub output_dir: PathBuf,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup. All required
    /// variables are checked before returning so one error names every
    /// missing credential at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut require = |name: &'static str| -> String {
            match read_var(&lookup, name) {
                Some(value) => value,
                None => {
                    missing.push(name);
                    String::new()
                }
            }
        };

        let client_id = require("REDDIT_CLIENT_ID");
        let client_secret = require("REDDIT_CLIENT_SECRET");
        let user_agent = require("REDDIT_USER_AGENT");
        let openai_api_key = require("OPENAI_API_KEY");

        if !missing.is_empty() {
            return Err(PersonaError::Config(format!(
                "missing environment variables: {}",
                missing.join(", ")
            )));
        }

        let config = Self {
            reddit: RedditCredentials {
                client_id,
                client_secret,
                user_agent,
            },
            openai_api_key,
            openai_base_url: read_var(&lookup, "OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            model: read_var(&lookup, "REDSONA_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: parse_temperature(read_var(&lookup, "REDSONA_TEMPERATURE")),
            output_dir: read_var(&lookup, "REDSONA_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        };
        config.log_status();
        Ok(config)
    }

    /// Log the loaded configuration without exposing credential values
    fn log_status(&self) {
        debug!(
            model = %self.model,
            temperature = self.temperature,
            base_url = %self.openai_base_url,
            output_dir = %self.output_dir.display(),
            "configuration loaded"
        );
    }
}

/// Read a single variable, filtering empty values
fn read_var<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|v| !v.trim().is_empty())
}

/// Parse REDSONA_TEMPERATURE, falling back to the default on bad input
fn parse_temperature(raw: Option<String>) -> f64 {
    match raw {
        None => DEFAULT_TEMPERATURE,
        Some(value) => match value.trim().parse::<f64>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(value = %value, "invalid REDSONA_TEMPERATURE, using default");
                DEFAULT_TEMPERATURE
            }
        },
    }
}
