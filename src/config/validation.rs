//! Configuration validation utilities
//!
//! Commands that talk to the server validate the connection settings first,
//! so a missing token or URI is reported as such instead of surfacing later
//! as an empty result.

use super::Config;
use anyhow::{Result, anyhow};
use edison_gitea::normalize_base_url;

/// A problem with the loaded configuration
#[derive(Debug, PartialEq)]
pub enum ConfigValidationError {
    /// A required field is absent or blank
    MissingField { field: String },
    /// The server URI cannot be used as a base URL
    InvalidUri { uri: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValidationError::MissingField { field } => {
                write!(f, "'{}' is not set in the configuration file", field)
            }
            ConfigValidationError::InvalidUri { uri, reason } => {
                write!(f, "'URI' value '{}' is invalid: {}", uri, reason)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Join several validation errors into one anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ConfigValidationError>) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    anyhow!("Invalid configuration: {}", messages.join("; "))
}

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Collect every problem with the connection settings
    pub fn connection_errors(config: &Config) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if config.uri.trim().is_empty() {
            errors.push(ConfigValidationError::MissingField {
                field: "URI".to_string(),
            });
        } else if let Err(e) = normalize_base_url(&config.uri) {
            errors.push(ConfigValidationError::InvalidUri {
                uri: config.uri.clone(),
                reason: format!("{e:#}"),
            });
        }

        if config.token.trim().is_empty() {
            errors.push(ConfigValidationError::MissingField {
                field: "token".to_string(),
            });
        }

        errors
    }

    /// Validate the token and server URI
    pub fn validate_connection(config: &Config) -> Result<()> {
        let errors = Self::connection_errors(config);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(validation_errors_to_anyhow(errors))
        }
    }
}
