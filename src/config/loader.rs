//! Configuration file discovery and loading

use crate::constants::config::{
    CONFIG_FILE_NAME, DEFAULT_CONFIG_FILE, DEFAULT_TOP_LANGS, USER_CONFIG_DIR,
};
use crate::output::mask_token;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from `configuration.json`
///
/// Every field is optional in the file. Display toggles default to on so an
/// empty file still produces the full overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Banner lines printed before the overview
    #[serde(deserialize_with = "deserialize_ascii_art")]
    pub ascii_art: Vec<String>,
    /// Number of languages shown by `top-user-langs` and the overview
    pub top_langs: usize,
    pub repo_count: bool,
    /// Count organization-owned repositories in statistics
    pub include_orgs: bool,
    pub gitea_user: bool,
    pub gitea_version: bool,
    pub edison_version: bool,
    /// Use ANSI colors in output
    pub color: bool,
    pub token: String,
    #[serde(rename = "URI")]
    pub uri: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ascii_art: Vec::new(),
            top_langs: DEFAULT_TOP_LANGS,
            repo_count: true,
            include_orgs: false,
            gitea_user: true,
            gitea_version: true,
            edison_version: true,
            color: true,
            token: String::new(),
            uri: String::new(),
        }
    }
}

/// Older configuration files store the banner as one multi-line string
#[derive(Deserialize)]
#[serde(untagged)]
enum AsciiArt {
    Lines(Vec<String>),
    Text(String),
}

fn deserialize_ascii_art<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let lines = match Option::<AsciiArt>::deserialize(deserializer)? {
        Some(AsciiArt::Lines(lines)) => lines,
        Some(AsciiArt::Text(text)) => text.lines().map(str::to_string).collect(),
        None => Vec::new(),
    };
    Ok(lines)
}

/// A configuration together with the file it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when no file was found or the file could not be used
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;

        Self::from_json(&content)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))
    }

    /// Parse configuration from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Path of the configuration file in the user's config directory
    ///
    /// This is typically `~/.config/edison/configuration.json`.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
    }

    /// Find the first existing configuration file
    ///
    /// The working directory's `./configuration/configuration.json` wins over
    /// the user config directory.
    pub fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }

        Self::user_config_path().filter(|path| path.is_file())
    }

    /// Load the configuration edison runs with
    ///
    /// An explicitly requested file must load. A discovered file that fails
    /// to read or parse is reported and replaced by the defaults, as is a
    /// missing file.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<LoadedConfig> {
        if let Some(path) = explicit {
            let config = Self::load(path)?;
            return Ok(LoadedConfig {
                config,
                path: Some(path.to_path_buf()),
            });
        }

        let Some(path) = Self::discover() else {
            tracing::debug!("No configuration file found, using defaults");
            return Ok(LoadedConfig::default());
        };

        match Self::load(&path) {
            Ok(config) => {
                tracing::debug!("Loaded configuration from {}", path.display());
                Ok(LoadedConfig {
                    config,
                    path: Some(path),
                })
            }
            Err(e) => {
                tracing::warn!("Ignoring configuration file: {e:#}");
                Ok(LoadedConfig::default())
            }
        }
    }

    /// Whether both connection settings are present
    pub fn has_connection(&self) -> bool {
        !self.token.trim().is_empty() && !self.uri.trim().is_empty()
    }

    /// Copy of the configuration safe to print
    pub fn redacted(&self) -> Self {
        Self {
            token: mask_token(&self.token),
            ..self.clone()
        }
    }
}
