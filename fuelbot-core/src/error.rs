//! Structured error types for fuelbot-core.
//!
//! Uses `thiserror` so downstream crates get composable, matchable errors
//! instead of stringly-typed failures.

use thiserror::Error;

/// Configuration resolution errors.
///
/// Every variant names the environment variable involved so startup
/// failures point straight at the missing or malformed setting.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable was absent from both the environment and the
    /// `.env` layers, and has no default.
    #[error("missing required environment variable '{name}'")]
    Missing { name: &'static str },

    /// A variable was present but failed its type constraint.
    #[error("invalid value for environment variable '{name}': {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Result type alias for fuelbot-core operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Create a missing-variable error.
    pub fn missing(name: &'static str) -> Self {
        Self::Missing { name }
    }

    /// Create an invalid-value error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::missing("TOKEN");
        assert_eq!(
            err.to_string(),
            "missing required environment variable 'TOKEN'"
        );

        let err = ConfigError::invalid("POSTGRES_PORT", "invalid digit found in string");
        assert!(err.to_string().contains("POSTGRES_PORT"));
        assert!(err.to_string().contains("invalid digit"));
    }
}
