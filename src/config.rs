//! Configuration management for the role tracker binary.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Log levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the role tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File of role records to validate; stdin when `None`
    pub data_file: Option<PathBuf>,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLE_TRACKER_DATA_FILE`: path to a JSON array of role records
    /// - `LOG_LEVEL`: one of trace, debug, info, warn, error (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_file = match env::var("ROLE_TRACKER_DATA_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ROLE_TRACKER_DATA_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => None,
        };

        let log_level = Self::parse_log_level("LOG_LEVEL", "info")?;

        Ok(Config {
            data_file,
            log_level,
        })
    }

    /// Read a log level from the environment, falling back to `default`.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(level)
                } else {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!(
                            "Must be one of {}, got: {}",
                            LOG_LEVELS.join(", "),
                            val
                        ),
                    })
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: None,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }

        fn unset(&mut self, key: &str) {
            env::remove_var(key);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_file, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let mut guard = EnvGuard::new();
        guard.unset("ROLE_TRACKER_DATA_FILE");
        guard.unset("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ROLE_TRACKER_DATA_FILE", "roles.json");
        guard.set("LOG_LEVEL", "DEBUG");

        let config = Config::from_env().unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("roles.json")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_data_file() {
        let mut guard = EnvGuard::new();
        guard.set("ROLE_TRACKER_DATA_FILE", "   ");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "ROLE_TRACKER_DATA_FILE");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        let mut guard = EnvGuard::new();
        guard.unset("ROLE_TRACKER_DATA_FILE");
        guard.set("LOG_LEVEL", "loud");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, reason }) => {
                assert_eq!(var, "LOG_LEVEL");
                assert!(reason.contains("loud"));
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }
}
