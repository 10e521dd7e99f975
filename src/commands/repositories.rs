//! Repository listing and counting commands

use super::{Command, CommandContext, print_lines};
use crate::output::Styler;
use crate::stats::{RepositorySet, enumerate_repositories};
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use edison_gitea::Repository;
use serde::Serialize;

/// Output format for a repository in JSON mode
#[derive(Serialize)]
struct RepositoryOutput {
    owner: String,
    name: String,
    private: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    ssh_url: String,
}

impl From<&Repository> for RepositoryOutput {
    fn from(repo: &Repository) -> Self {
        Self {
            owner: repo.owner_login().to_string(),
            name: repo.name.clone(),
            private: repo.private,
            ssh_url: repo.ssh_url.clone(),
        }
    }
}

/// Lists the user's repositories with their SSH URLs
pub struct ListReposCommand {
    /// Output in JSON format
    pub json: bool,
}

/// Lists the repositories of every organization the user belongs to
pub struct ListOrgReposCommand;

/// Prints how many repositories are counted for the user
pub struct RepoCountCommand;

/// One bullet per repository with its SSH URL underneath
pub fn render_repository_list(repositories: &[Repository], styler: &Styler) -> Vec<String> {
    let mut lines = Vec::new();
    for repo in repositories {
        let visibility = if repo.private { " (private)" } else { "" };
        lines.push(format!(
            "{} {}{}",
            styler.bullet(),
            styler.name(&repo.display_name()),
            styler.muted(visibility)
        ));
        if repo.ssh_url.is_empty() {
            lines.push(format!("  SSH: {}", styler.unavailable()));
        } else {
            lines.push(format!("  SSH: {}", repo.ssh_url));
        }
    }
    lines
}

pub fn render_repository_count(set: &RepositorySet, include_orgs: bool, styler: &Styler) -> Vec<String> {
    let scope = if include_orgs {
        "including organizations".to_string()
    } else {
        format!("owned, {} visible", set.visible)
    };
    vec![format!(
        "{} {} {}",
        styler.label("Repositories:"),
        set.count(),
        styler.muted(&format!("({scope})"))
    )]
}

#[async_trait]
impl Command for ListReposCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let set = enumerate_repositories(context.api()?, context.include_orgs).await?;

        if self.json {
            let output: Vec<RepositoryOutput> =
                set.repositories.iter().map(RepositoryOutput::from).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        let styler = &context.styler;
        if set.repositories.is_empty() {
            println!(
                "{}",
                styler.warning(&format!("No repositories found for {}", set.user.login))
            );
            return Ok(());
        }

        println!(
            "{}",
            styler.heading(&format!("Found {} repositories", set.count()))
        );
        println!();
        print_lines(&render_repository_list(&set.repositories, styler));

        Ok(())
    }
}

#[async_trait]
impl Command for ListOrgReposCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let api = context.api()?;
        let styler = &context.styler;
        let orgs = api.my_orgs().await.context("Failed to list organizations")?;

        if orgs.is_empty() {
            println!("{}", styler.warning("You are not a member of any organization"));
            return Ok(());
        }

        let mut failed = Vec::new();
        for org in &orgs {
            println!("{}", styler.heading(&format!("Organization {}", org.username)));
            match api.org_repos(&org.username).await {
                Ok(repositories) if repositories.is_empty() => {
                    println!("  {}", styler.muted("no repositories"));
                }
                Ok(repositories) => print_lines(&render_repository_list(&repositories, styler)),
                Err(e) => {
                    println!("  {}", styler.error(&format!("{e:#}")));
                    failed.push(org.username.clone());
                }
            }
            println!();
        }

        if !failed.is_empty() {
            bail!(
                "Failed to list repositories of {} organization(s): {}",
                failed.len(),
                failed.join(", ")
            );
        }

        Ok(())
    }
}

#[async_trait]
impl Command for RepoCountCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let set = enumerate_repositories(context.api()?, context.include_orgs).await?;
        print_lines(&render_repository_count(&set, context.include_orgs, &context.styler));
        Ok(())
    }
}
