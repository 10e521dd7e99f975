//! Print the effective configuration

use super::{Command, CommandContext, print_lines};
use anyhow::Result;
use async_trait::async_trait;

/// Prints where the configuration came from and its values, token masked
pub struct PrintConfigCommand;

pub fn render_config(context: &CommandContext) -> Result<Vec<String>> {
    let styler = &context.styler;
    let source = match &context.config_path {
        Some(path) => path.display().to_string(),
        None => styler.warning("none found, using defaults"),
    };

    let mut lines = vec![format!("{} {}", styler.label("Configuration file:"), source)];
    let json = serde_json::to_string_pretty(&context.config.redacted())?;
    lines.extend(json.lines().map(str::to_string));

    Ok(lines)
}

#[async_trait]
impl Command for PrintConfigCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        print_lines(&render_config(context)?);
        Ok(())
    }
}
