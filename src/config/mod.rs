//! Configuration management module

pub mod loader;
pub mod validation;

pub use loader::{Config, LoadedConfig};
pub use validation::{ConfigValidationError, ConfigValidator};
