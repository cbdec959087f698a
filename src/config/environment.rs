//! Deployment environment and sanitizer settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SanitizeError;

/// Environment variable consulted by [`Environment::from_env`].
pub const ENVIRONMENT_VAR: &str = "APP_ENV";

/// Message returned to clients when real error text is withheld.
pub const DEFAULT_FALLBACK_ERROR: &str = "An unexpected error occurred";

/// Deployment environment.
///
/// Only [`Environment::Production`] hardens error output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Read the environment from `APP_ENV`.
    ///
    /// Unset or unrecognised values fall back to development, and the
    /// unrecognised case is logged.
    pub fn from_env() -> Self {
        match std::env::var(ENVIRONMENT_VAR) {
            Ok(raw) => raw.parse::<Environment>().unwrap_or_else(|e| {
                log::warn!("ENVIRONMENT_UNRECOGNISED var={} error={}", ENVIRONMENT_VAR, e);
                Environment::Development
            }),
            Err(_) => Environment::Development,
        }
    }
}

impl FromStr for Environment {
    type Err = SanitizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(SanitizeError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings bound once at startup and threaded into response shaping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    pub environment: Environment,
    pub fallback_error_message: String,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            fallback_error_message: DEFAULT_FALLBACK_ERROR.to_string(),
        }
    }
}

impl SanitizerConfig {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            ..Self::default()
        }
    }

    pub fn with_fallback_error_message(mut self, message: &str) -> Self {
        self.fallback_error_message = message.to_string();
        self
    }

    /// Build from the process environment (see [`Environment::from_env`]).
    pub fn from_env() -> Self {
        Self::new(Environment::from_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!("production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(" Prod ".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_is_production() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Test.is_production());
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: SanitizerConfig =
            serde_json::from_str(r#"{"environment": "production"}"#).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.fallback_error_message, DEFAULT_FALLBACK_ERROR);

        let config: SanitizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SanitizerConfig::default());
    }

    // Single test: the process environment is shared across test threads.
    #[test]
    fn test_from_env() {
        let saved = std::env::var(ENVIRONMENT_VAR).ok();

        std::env::set_var(ENVIRONMENT_VAR, "PRODUCTION");
        assert_eq!(Environment::from_env(), Environment::Production);
        assert_eq!(SanitizerConfig::from_env().environment, Environment::Production);

        std::env::set_var(ENVIRONMENT_VAR, "test");
        assert_eq!(Environment::from_env(), Environment::Test);

        std::env::set_var(ENVIRONMENT_VAR, "staging");
        assert_eq!(Environment::from_env(), Environment::Development);

        std::env::remove_var(ENVIRONMENT_VAR);
        assert_eq!(Environment::from_env(), Environment::Development);
        let config = SanitizerConfig::from_env();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.fallback_error_message, DEFAULT_FALLBACK_ERROR);

        if let Some(value) = saved {
            std::env::set_var(ENVIRONMENT_VAR, value);
        }
    }

    #[test]
    fn test_config_builder() {
        let config = SanitizerConfig::new(Environment::Test).with_fallback_error_message("Oops");
        assert_eq!(config.environment, Environment::Test);
        assert_eq!(config.fallback_error_message, "Oops");
    }
}
