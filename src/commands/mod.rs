//! Command implementations

pub mod ascii;
pub mod base;
pub mod create;
pub mod languages;
pub mod overview;
pub mod repositories;
pub mod show_config;
pub mod user;
pub mod validators;
pub mod version;

pub use ascii::PrintAsciiCommand;
pub use base::{Command, CommandContext, Connection, print_lines};
pub use create::{CreateRepoCommand, create_repository};
pub use languages::{CodeSizeCommand, LanguagesCommand};
pub use overview::OverviewCommand;
pub use repositories::{ListOrgReposCommand, ListReposCommand, RepoCountCommand};
pub use show_config::PrintConfigCommand;
pub use user::GetUserCommand;
pub use version::GiteaVersionCommand;
