//! Authenticated user command

use super::{Command, CommandContext, print_lines};
use crate::output::Styler;
use anyhow::{Context, Result};
use async_trait::async_trait;
use edison_gitea::User;

/// Prints the user the configured token belongs to
pub struct GetUserCommand;

pub fn render_user(user: &User, styler: &Styler) -> Vec<String> {
    let or_not_set = |value: &str| {
        if value.trim().is_empty() {
            styler.muted("not set")
        } else {
            value.to_string()
        }
    };

    let mut lines = vec![
        format!("{} {}", styler.label("User:"), styler.name(&user.login)),
        format!("  {} {}", styler.label("Full name:"), or_not_set(&user.full_name)),
        format!("  {} {}", styler.label("Email:"), or_not_set(&user.email)),
        format!(
            "  {} {}",
            styler.label("Admin:"),
            if user.is_admin { "yes" } else { "no" }
        ),
    ];

    if let Some(created) = user.created {
        lines.push(format!(
            "  {} {}",
            styler.label("Member since:"),
            created.format("%Y-%m-%d")
        ));
    }

    lines
}

#[async_trait]
impl Command for GetUserCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let user = context
            .api()?
            .current_user()
            .await
            .context("Failed to fetch the authenticated user")?;

        print_lines(&render_user(&user, &context.styler));
        Ok(())
    }
}
