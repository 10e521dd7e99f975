//! ASCII art banner

use super::{Command, CommandContext, print_lines};
use crate::config::Config;
use crate::output::Styler;
use anyhow::Result;
use async_trait::async_trait;

/// Prints the banner lines from the configuration
pub struct PrintAsciiCommand;

/// Banner lines, or a hint when none are configured
pub fn render_ascii_art(config: &Config, styler: &Styler) -> Vec<String> {
    if config.ascii_art.is_empty() {
        return vec![styler.warning("No ASCII art configured")];
    }

    config
        .ascii_art
        .iter()
        .map(|line| styler.accent(line))
        .collect()
}

#[async_trait]
impl Command for PrintAsciiCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        print_lines(&render_ascii_art(&context.config, &context.styler));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_ascii_art_keeps_lines_verbatim() {
        let config = Config {
            ascii_art: vec!["  ___ ".to_string(), " | __|".to_string(), " | _| ".to_string()],
            ..Config::default()
        };
        let lines = render_ascii_art(&config, &Styler::plain());
        assert_eq!(lines, config.ascii_art);
    }

    #[test]
    fn test_render_ascii_art_without_art() {
        let lines = render_ascii_art(&Config::default(), &Styler::plain());
        assert_eq!(lines, vec!["No ASCII art configured"]);
    }
}
