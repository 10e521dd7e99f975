//! Base types and traits for the command pattern

use crate::config::{Config, ConfigValidator, LoadedConfig};
use crate::output::Styler;
use anyhow::{Result, anyhow};
use edison_gitea::{GiteaApi, GiteaClient};
use std::path::PathBuf;
use std::sync::Arc;

/// The server connection, or why there is none
#[derive(Clone)]
pub enum Connection {
    Connected(Arc<dyn GiteaApi>),
    Unavailable(String),
}

impl Connection {
    /// Build a client from the configured URI and token
    pub fn from_config(config: &Config) -> Self {
        let client = ConfigValidator::validate_connection(config)
            .and_then(|_| GiteaClient::new(&config.uri, config.token.trim()));

        match client {
            Ok(client) => Connection::Connected(Arc::new(client)),
            Err(e) => Connection::Unavailable(format!("{e:#}")),
        }
    }
}

/// Context passed to all commands containing shared configuration and options
#[derive(Clone)]
pub struct CommandContext {
    /// The loaded configuration
    pub config: Config,
    /// File the configuration was read from, if any
    pub config_path: Option<PathBuf>,
    /// Output styling
    pub styler: Styler,
    /// Gitea server access
    pub connection: Connection,
    /// Count organization-owned repositories in statistics
    pub include_orgs: bool,
    /// Fetch repository languages concurrently
    pub parallel: bool,
}

impl CommandContext {
    /// Context for a loaded configuration, connecting with its settings
    pub fn new(loaded: LoadedConfig, styler: Styler) -> Self {
        let connection = Connection::from_config(&loaded.config);
        Self::with_connection(loaded, styler, connection)
    }

    /// Context with an explicit connection
    pub fn with_connection(loaded: LoadedConfig, styler: Styler, connection: Connection) -> Self {
        let include_orgs = loaded.config.include_orgs;
        Self {
            config: loaded.config,
            config_path: loaded.path,
            styler,
            connection,
            include_orgs,
            parallel: false,
        }
    }

    /// The Gitea API, or an error explaining why it cannot be reached
    pub fn api(&self) -> Result<&dyn GiteaApi> {
        match &self.connection {
            Connection::Connected(api) => Ok(api.as_ref()),
            Connection::Unavailable(reason) => {
                Err(anyhow!("Cannot connect to Gitea: {}", reason))
            }
        }
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}

/// Print rendered lines to standard output
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
