//! Repository and language statistics

pub mod languages;
pub mod repositories;

pub use languages::{LanguageStat, LanguageTotals, collect_language_totals};
pub use repositories::{RepositorySet, enumerate_repositories, filter_by_owner};
