//! Language statistics and code size commands

use super::{Command, CommandContext, print_lines};
use crate::output::{Styler, format_bytes, format_percentage};
use crate::stats::{LanguageStat, LanguageTotals, collect_language_totals, enumerate_repositories};
use anyhow::Result;
use async_trait::async_trait;

/// Prints the user's languages by share of code size
///
/// `top: None` prints every language, `Some(n)` only the `n` largest.
pub struct LanguagesCommand {
    pub top: Option<usize>,
}

/// Prints the summed language sizes of the user's repositories
///
/// Historically exposed as "lines of code", the figure is a byte count.
pub struct CodeSizeCommand;

/// Heading plus one line per language
pub fn render_language_stats(stats: &[LanguageStat], heading: &str, styler: &Styler) -> Vec<String> {
    let mut lines = vec![styler.heading(heading)];

    if stats.is_empty() {
        lines.push(format!("  {}", styler.warning("No language data available")));
    } else {
        let width = stats.iter().map(|s| s.language.chars().count()).max().unwrap_or(0);
        for stat in stats {
            lines.push(format!(
                "{} {} {:>7}  {}",
                styler.bullet(),
                styler.name(&format!("{:<width$}", stat.language)),
                format_percentage(stat.percentage),
                styler.muted(&format_bytes(stat.bytes))
            ));
        }
    }

    lines
}

/// Total language bytes across the counted repositories
pub fn render_code_size(totals: &LanguageTotals, styler: &Styler) -> Vec<String> {
    vec![format!(
        "{} {} {}",
        styler.label("Code size:"),
        format_bytes(totals.total_bytes()),
        styler.muted(&format!(
            "across {} repositories (language bytes, not lines)",
            totals.repositories_counted()
        ))
    )]
}

/// Warning naming the repositories left out of the totals, if any
pub fn render_skipped(totals: &LanguageTotals, styler: &Styler) -> Vec<String> {
    if totals.skipped().is_empty() {
        return Vec::new();
    }

    vec![styler.warning(&format!(
        "Skipped {} repositories whose languages could not be fetched: {}",
        totals.skipped().len(),
        totals.skipped().join(", ")
    ))]
}

pub fn language_heading(top: Option<usize>, shown: usize, repositories: usize) -> String {
    match top {
        Some(_) => format!("Top {} languages across {} repositories", shown, repositories),
        None => format!("Languages across {} repositories", repositories),
    }
}

#[async_trait]
impl Command for LanguagesCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let api = context.api()?;
        let set = enumerate_repositories(api, context.include_orgs).await?;
        let totals = collect_language_totals(api, &set.repositories, context.parallel).await;

        let stats = match self.top {
            Some(n) => totals.top(n),
            None => totals.percentages(),
        };

        let heading = language_heading(self.top, stats.len(), totals.repositories_counted());
        print_lines(&render_language_stats(&stats, &heading, &context.styler));
        print_lines(&render_skipped(&totals, &context.styler));
        Ok(())
    }
}

#[async_trait]
impl Command for CodeSizeCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let api = context.api()?;
        let set = enumerate_repositories(api, context.include_orgs).await?;
        let totals = collect_language_totals(api, &set.repositories, context.parallel).await;

        print_lines(&render_code_size(&totals, &context.styler));
        print_lines(&render_skipped(&totals, &context.styler));
        Ok(())
    }
}
