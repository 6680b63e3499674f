//! Configuration management for the postal code resolver.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Placeholder replaced by the URL-encoded postal code in the lookup path.
pub const CODE_PLACEHOLDER: &str = "{code}";

const DEFAULT_API_BASE_URL: &str = "https://api.zippopotam.us";
const DEFAULT_LOOKUP_PATH: &str = "/us/{code}";
const DEFAULT_EXPECTED_COUNTRY: &str = "US";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for the postal code resolver.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider base URL
    pub api_base_url: String,

    /// Lookup path template; must contain `{code}`
    pub lookup_path: String,

    /// Reference country the resolved country is compared against (default: "US")
    pub expected_country: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `POSTAL_API_BASE_URL`: Provider base URL (default: https://api.zippopotam.us)
    /// - `POSTAL_LOOKUP_PATH`: Path template with `{code}` (default: /us/{code})
    /// - `EXPECTED_COUNTRY`: Reference country abbreviation (default: "US")
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let api_base_url = env::var("POSTAL_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let lookup_path =
            env::var("POSTAL_LOOKUP_PATH").unwrap_or_else(|_| DEFAULT_LOOKUP_PATH.to_string());
        let expected_country = env::var("EXPECTED_COUNTRY")
            .unwrap_or_else(|_| DEFAULT_EXPECTED_COUNTRY.to_string())
            .trim()
            .to_string();

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "POSTAL_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if !lookup_path.contains(CODE_PLACEHOLDER) {
            return Err(ConfigError::InvalidValue {
                var: "POSTAL_LOOKUP_PATH".to_string(),
                reason: format!("Must contain the {} placeholder", CODE_PLACEHOLDER),
            });
        }

        if expected_country.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "EXPECTED_COUNTRY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            api_base_url,
            lookup_path,
            expected_country,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            lookup_path: DEFAULT_LOOKUP_PATH.to_string(),
            expected_country: DEFAULT_EXPECTED_COUNTRY.to_string(),
            request_timeout: 10,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const ALL_VARS: [&str; 5] = [
        "POSTAL_API_BASE_URL",
        "POSTAL_LOOKUP_PATH",
        "EXPECTED_COUNTRY",
        "REQUEST_TIMEOUT",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in ALL_VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
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
        assert_eq!(config.api_base_url, "https://api.zippopotam.us");
        assert_eq!(config.lookup_path, "/us/{code}");
        assert_eq!(config.expected_country, "US");
        assert_eq!(config.request_timeout, 10);
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_base_url, "https://api.zippopotam.us");
        assert_eq!(config.expected_country, "US");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("POSTAL_API_BASE_URL", "http://localhost:8080");
        guard.set("POSTAL_LOOKUP_PATH", "/lookup?zipCode={code}");
        guard.set("EXPECTED_COUNTRY", " CA ");
        guard.set("REQUEST_TIMEOUT", "3");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.lookup_path, "/lookup?zipCode={code}");
        assert_eq!(config.expected_country, "CA");
        assert_eq!(config.request_timeout, 3);
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("POSTAL_API_BASE_URL", "not-a-url");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "POSTAL_API_BASE_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_path_without_placeholder() {
        let mut guard = EnvGuard::new();
        guard.set("POSTAL_LOOKUP_PATH", "/us/");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "POSTAL_LOOKUP_PATH"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_country() {
        let mut guard = EnvGuard::new();
        guard.set("EXPECTED_COUNTRY", "   ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "EXPECTED_COUNTRY"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_zero_timeout() {
        let mut guard = EnvGuard::new();
        guard.set("REQUEST_TIMEOUT", "0");

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");
        guard.set("TEST_U64_INVALID", "not-a-number");

        assert_eq!(Config::parse_env_u64("TEST_U64", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u64("NONEXISTENT", 10).unwrap(), 10);
        assert!(Config::parse_env_u64("TEST_U64_INVALID", 10).is_err());
    }
}
