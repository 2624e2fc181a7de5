//! Configuration management for `stormdist`
//!
//! Settings come from an optional TOML file layered under `STORMDIST_`
//! environment variables, then get defaults applied and are validated.

use crate::StormError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// NHC public advisory the tracker reads by default
pub const DEFAULT_ADVISORY_URL: &str =
    "https://www.nhc.noaa.gov/text/refresh/MIATCPAT5+shtml/041158.shtml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StormConfig {
    /// Advisory source settings
    #[serde(default)]
    pub advisory: AdvisoryConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how the advisory bulletin is downloaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryConfig {
    /// URL of the plain-text advisory bulletin
    #[serde(default = "default_advisory_url")]
    pub url: String,
    /// Request timeout in seconds; unset means the request may block indefinitely
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// User agent sent with the request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_advisory_url() -> String {
    DEFAULT_ADVISORY_URL.to_string()
}

fn default_user_agent() -> String {
    format!("stormdist/{}", crate::VERSION)
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            url: default_advisory_url(),
            timeout_seconds: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl AdvisoryConfig {
    /// Advisory settings pointing at `url`, everything else default
    pub fn with_url<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl StormConfig {
    /// Load configuration from the default file location and environment
    pub fn load() -> crate::Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> crate::Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // STORMDIST_ADVISORY__URL, STORMDIST_LOGGING__LEVEL, ...
        builder = builder.add_source(
            Environment::with_prefix("STORMDIST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build().map_err(|e| {
            StormError::config(format!(
                "Failed to build configuration from {}: {e}",
                config_file.display()
            ))
        })?;

        let mut config: StormConfig = settings
            .try_deserialize()
            .map_err(|e| StormError::config(format!("Failed to deserialize configuration: {e}")))?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stormdist").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.advisory.url.is_empty() {
            self.advisory.url = default_advisory_url();
        }
        if self.advisory.user_agent.is_empty() {
            self.advisory.user_agent = default_user_agent();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        self.validate_advisory()?;
        self.validate_logging()?;
        Ok(())
    }

    fn validate_advisory(&self) -> crate::Result<()> {
        let url = &self.advisory.url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(StormError::config(format!(
                "Advisory URL must be a valid HTTP or HTTPS URL, got '{url}'"
            )));
        }

        match self.advisory.timeout_seconds {
            Some(0) => Err(StormError::config(
                "Advisory timeout must be at least 1 second; leave it unset to disable",
            )),
            Some(secs) if secs > 300 => Err(StormError::config(
                "Advisory timeout cannot exceed 300 seconds",
            )),
            _ => Ok(()),
        }
    }

    fn validate_logging(&self) -> crate::Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(StormError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(StormError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = StormConfig::default();
        assert_eq!(config.advisory.url, DEFAULT_ADVISORY_URL);
        assert!(config.advisory.timeout_seconds.is_none());
        assert!(config.advisory.timeout().is_none());
        assert!(config.advisory.user_agent.starts_with("stormdist/"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_url() {
        let mut config = StormConfig::default();
        config.advisory.url = "ftp://example.org/advisory".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("HTTP or HTTPS"));
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = StormConfig::default();
        config.advisory.timeout_seconds = Some(500);
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("cannot exceed"));

        config.advisory.timeout_seconds = Some(0);
        assert!(config.validate().is_err());

        config.advisory.timeout_seconds = Some(20);
        assert!(config.validate().is_ok());
        assert_eq!(config.advisory.timeout(), Some(Duration::from_secs(20)));
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = StormConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_fields() {
        let mut config = StormConfig::default();
        config.advisory.url.clear();
        config.logging.format.clear();
        config.apply_defaults();
        assert_eq!(config.advisory.url, DEFAULT_ADVISORY_URL);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "stormdist-config-test-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[advisory]\nurl = \"http://127.0.0.1:9/advisory.txt\"\ntimeout_seconds = 5\n\n[logging]\nformat = \"json\""
        )
        .unwrap();

        let config = StormConfig::load_from_path(Some(path.clone()));
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.advisory.url, "http://127.0.0.1:9/advisory.txt");
        assert_eq!(config.advisory.timeout_seconds, Some(5));
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = StormConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("stormdist"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
