use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/bdui/config.toml` on Unix,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("bdui").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint is not empty
    /// - The timeout and maximum depth are positive
    /// - Username and password are given together or not at all
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.loader.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "loader.endpoint must not be empty".to_string(),
            });
        }

        if self.loader.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "loader.timeout_seconds must be greater than 0".to_string(),
            });
        }

        if self.mapper.max_depth == 0 {
            return Err(ConfigError::ValidationError {
                message: "mapper.max_depth must be greater than 0".to_string(),
            });
        }

        if self.loader.username.is_some() != self.loader.password.is_some() {
            return Err(ConfigError::ValidationError {
                message: "loader.username and loader.password must be set together".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = Config::default();
        config.loader.timeout_seconds = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn lone_username_is_rejected() {
        let mut config = Config::default();
        config.loader.username = Some("user".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn config_path_ends_with_bdui() {
        assert!(Config::config_path().ends_with("bdui/config.toml"));
    }
}
