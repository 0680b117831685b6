//! Environment-driven server configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("no config directory available, set PREFERENCES_PATH")]
    NoConfigDir,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSON file holding the persisted preference flags.
    pub preferences_path: PathBuf,
    /// Used when a session request does not say whether to shuffle.
    pub shuffle_by_default: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognised variables:
    /// - HOST (default 0.0.0.0)
    /// - PORT (default 3000)
    /// - PREFERENCES_PATH (default <config dir>/flashdeck/preferences.json)
    /// - SHUFFLE_BY_DEFAULT (default true)
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            Err(_) => 3000,
        };

        let preferences_path = match std::env::var("PREFERENCES_PATH") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_preferences_path()?,
        };

        let shuffle_by_default = match std::env::var("SHUFFLE_BY_DEFAULT") {
            Ok(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                name: "SHUFFLE_BY_DEFAULT",
                value,
            })?,
            Err(_) => true,
        };

        Ok(Self {
            host,
            port,
            preferences_path,
            shuffle_by_default,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_preferences_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("flashdeck").join("preferences.json"))
        .ok_or(ConfigError::NoConfigDir)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
