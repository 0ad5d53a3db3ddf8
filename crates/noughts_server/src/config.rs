//! Server configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, `NOUGHTS_*` environment variables (a `.env` file is loaded at
//! startup), then command-line flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use noughts_engine::{Difficulty, Player};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Configuration for the HTTP server and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to.
    host: String,

    /// Port to bind to.
    port: u16,

    /// Tier used when a request names none.
    default_difficulty: Difficulty,

    /// Mark the computer plays when a request names none.
    engine_mark: Player,

    /// Seed for the process-wide random source. Drawn from OS entropy when
    /// absent.
    rng_seed: Option<u64>,

    /// Footer appended to every page.
    footer: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            default_difficulty: Difficulty::Random,
            engine_mark: Player::O,
            rng_seed: None,
            footer: "Created by noughts".to_string(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if given, otherwise starts from defaults, then applies
    /// environment overrides.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    /// Applies `NOUGHTS_HOST`, `NOUGHTS_PORT` and `NOUGHTS_SEED` overrides
    /// read through `lookup`.
    #[instrument(skip(self, lookup))]
    pub fn with_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup("NOUGHTS_HOST") {
            debug!(%host, "Host from environment");
            self.host = host;
        }
        if let Some(port) = lookup("NOUGHTS_PORT") {
            self.port = parse_env("NOUGHTS_PORT", &port)?;
        }
        if let Some(seed) = lookup("NOUGHTS_SEED") {
            self.rng_seed = Some(parse_env("NOUGHTS_SEED", &seed)?);
        }
        Ok(self)
    }
}

fn parse_env<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e| {
        warn!(key, raw, "Unparsable environment override");
        ConfigError::new(format!("Invalid {key} {raw:?}: {e}"))
    })
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
