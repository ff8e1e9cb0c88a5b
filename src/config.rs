//! Configuration management for Chargecap
//!
//! This module handles loading, validation, and management of the crate
//! configuration from YAML files.

use crate::error::{ChargecapError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Telematics service credentials
    pub telematics: TelematicsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Coordinator polling interval in milliseconds
    pub poll_interval_ms: u64,
}

/// Telematics service credentials and account selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelematicsConfig {
    /// Account username
    pub username: String,

    /// Account password
    pub password: String,

    /// Account PIN for privileged remote commands
    pub pin: String,

    /// Service region (e.g. EU, USA, CA)
    pub region: String,

    /// Vehicle brand (e.g. Kia, Hyundai)
    pub brand: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub level: String,

    /// Path to log file or log directory
    pub file: String,

    /// Number of rotated files to keep
    pub backup_count: u32,

    /// Whether to log to console
    pub console_output: bool,

    /// Whether to use JSON format
    pub json_format: bool,
}

impl Default for TelematicsConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            pin: String::new(),
            region: "EU".to_string(),
            brand: "Kia".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            file: "/tmp/chargecap.log".to_string(),
            backup_count: 5,
            console_output: true,
            json_format: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            telematics: TelematicsConfig::default(),
            logging: LoggingConfig::default(),
            poll_interval_ms: 30_000,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        let default_paths = [
            "chargecap_config.yaml",
            "/data/chargecap_config.yaml",
            "/etc/chargecap/config.yaml",
        ];

        for path in &default_paths {
            if Path::new(path).exists() {
                return Self::from_file(path);
            }
        }

        // Fall back to default configuration
        Ok(Config::default())
    }

    /// Save configuration to a YAML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.telematics.region.is_empty() {
            return Err(ChargecapError::validation(
                "telematics.region",
                "Region cannot be empty",
            ));
        }

        if self.telematics.brand.is_empty() {
            return Err(ChargecapError::validation(
                "telematics.brand",
                "Brand cannot be empty",
            ));
        }

        if self.poll_interval_ms == 0 {
            return Err(ChargecapError::validation(
                "poll_interval_ms",
                "Must be greater than 0",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.telematics.region, "EU");
        assert_eq!(config.poll_interval_ms, 30_000);
        assert!(config.logging.console_output);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        // Test empty region
        config.telematics.region = String::new();
        assert!(config.validate().is_err());

        // Reset and test zero poll interval
        config = Config::default();
        config.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let deserialized: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.telematics.region, deserialized.telematics.region);
    }
}
