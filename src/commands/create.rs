//! Interactive repository creation

use super::validators::validate_repository_name;
use super::{Command, CommandContext, print_lines};
use crate::output::Styler;
use crate::utils::prompt::read_repo_options;
use anyhow::{Context, Result};
use async_trait::async_trait;
use edison_gitea::{CreateRepoOption, GiteaApi, Repository};
use std::io;

/// Creates a repository for the authenticated user
///
/// Without a name the details are asked for on standard input.
pub struct CreateRepoCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    /// `None` means private
    pub private: Option<bool>,
}

impl CreateRepoCommand {
    /// Options taken from the command line, when a name was given
    pub fn options_from_args(&self) -> Option<CreateRepoOption> {
        let name = self.name.as_ref()?;
        Some(CreateRepoOption {
            name: name.trim().to_string(),
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            private: self.private.unwrap_or(true),
        })
    }
}

/// Validate the options and submit them
pub async fn create_repository(api: &dyn GiteaApi, option: &CreateRepoOption) -> Result<Repository> {
    validate_repository_name(&option.name)?;
    api.create_repo(option)
        .await
        .with_context(|| format!("Failed to create repository {}", option.name))
}

pub fn render_created_repository(repo: &Repository, styler: &Styler) -> Vec<String> {
    let or_unavailable = |value: &str| {
        if value.is_empty() {
            styler.unavailable()
        } else {
            value.to_string()
        }
    };

    vec![
        styler.heading(&format!("Created repository {}", repo.name)),
        format!("  {} {}", styler.label("Full name:"), repo.display_name()),
        format!(
            "  {} {}",
            styler.label("Visibility:"),
            if repo.private { "private" } else { "public" }
        ),
        format!("  {} {}", styler.label("SSH:"), or_unavailable(&repo.ssh_url)),
        format!("  {} {}", styler.label("Web:"), or_unavailable(&repo.html_url)),
    ]
}

#[async_trait]
impl Command for CreateRepoCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let api = context.api()?;

        let option = match self.options_from_args() {
            Some(option) => option,
            None => {
                let stdin = io::stdin();
                let mut input = stdin.lock();
                read_repo_options(&mut input, &mut io::stdout())?
            }
        };

        let repo = create_repository(api, &option).await?;
        print_lines(&render_created_repository(&repo, &context.styler));
        Ok(())
    }
}
