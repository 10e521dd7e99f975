//! Command argument validation utilities
//!
//! This module provides centralized validation logic for command arguments
//! after clap parsing. It handles domain-specific validation rules that
//! go beyond basic argument parsing.

use anyhow::{Result, anyhow};

/// Longest repository name Gitea accepts
const MAX_REPOSITORY_NAME_LEN: usize = 100;

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Mutually exclusive arguments were both provided
    MutualExclusivity { first: String, second: String },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MutualExclusivity { first, second } => {
                write!(f, "Cannot specify both {} and {}", first, second)
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Validate the `--top` count
///
/// A count given on the command line must select at least one language.
pub fn validate_top_count(top: Option<usize>) -> Result<()> {
    if top == Some(0) {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "--top".to_string(),
                value: "0".to_string(),
                reason: "at least one language must be requested".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate the visibility flags of `create-repo`
pub fn validate_visibility_flags(private: bool, public: bool) -> Result<()> {
    if private && public {
        return Err(validation_error_to_anyhow(
            CommandValidationError::MutualExclusivity {
                first: "--private".to_string(),
                second: "--public".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate a repository name before it is sent to the server
///
/// Gitea accepts ASCII letters, digits, `-`, `_` and `.`, up to 100
/// characters, and rejects the names `.` and `..`.
pub fn validate_repository_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| {
        validation_error_to_anyhow(CommandValidationError::InvalidValue {
            argument: "repository name".to_string(),
            value: name.to_string(),
            reason: reason.to_string(),
        })
    };

    if name.trim().is_empty() {
        return Err(invalid("repository name cannot be empty or whitespace only"));
    }
    if name.len() > MAX_REPOSITORY_NAME_LEN {
        return Err(invalid("repository name cannot exceed 100 characters"));
    }
    if name == "." || name == ".." {
        return Err(invalid("'.' and '..' are reserved"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(invalid(
            "only letters, digits, '-', '_' and '.' are allowed",
        ));
    }
    Ok(())
}
