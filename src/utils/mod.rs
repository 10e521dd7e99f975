//! Utility modules for common functionality

pub mod legacy_args;
pub mod prompt;

// Re-export commonly used functions
pub use legacy_args::{legacy_subcommand, translate_legacy_args};
pub use prompt::{parse_private_answer, read_line, read_repo_options};
