//! Edison - A CLI tool for exploring a Gitea account

pub mod commands;
pub mod config;
pub mod constants;
pub mod output;
pub mod stats;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext, Connection};
pub use config::{Config, LoadedConfig};
pub use output::Styler;
pub use stats::{LanguageStat, LanguageTotals, RepositorySet};
