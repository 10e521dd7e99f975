//! Server and client version commands

use super::{Command, CommandContext, print_lines};
use crate::output::Styler;
use anyhow::{Context, Result};
use async_trait::async_trait;
use edison_gitea::GiteaApi;

/// Prints the version reported by the Gitea server
pub struct GiteaVersionCommand;

pub async fn render_gitea_version(api: &dyn GiteaApi, styler: &Styler) -> Result<Vec<String>> {
    let version = api
        .server_version()
        .await
        .context("Failed to fetch the Gitea server version")?;

    let value = if version.version.trim().is_empty() {
        styler.unavailable()
    } else {
        version.version
    };

    Ok(vec![format!("{} {}", styler.label("Gitea version:"), value)])
}

/// Edison's own version, as shown in the overview
pub fn render_edison_version(styler: &Styler) -> Vec<String> {
    vec![format!(
        "{} {}",
        styler.label("Edison version:"),
        env!("CARGO_PKG_VERSION")
    )]
}

#[async_trait]
impl Command for GiteaVersionCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let lines = render_gitea_version(context.api()?, &context.styler).await?;
        print_lines(&lines);
        Ok(())
    }
}
