//! Default overview shown when no command is given

use super::ascii::render_ascii_art;
use super::languages::{language_heading, render_code_size, render_language_stats, render_skipped};
use super::repositories::render_repository_count;
use super::user::render_user;
use super::version::{render_edison_version, render_gitea_version};
use super::{Command, CommandContext, print_lines};
use crate::output::Styler;
use crate::stats::{LanguageTotals, collect_language_totals, enumerate_repositories};
use anyhow::{Result, bail};
use async_trait::async_trait;

/// Banner, versions, user, repository count, code size and top languages
///
/// Each part is governed by its display toggle in the configuration. A part
/// that fails is reported in place and the remaining parts still run; the
/// command fails at the end if any part did.
pub struct OverviewCommand;

/// Collects per-step failures while the overview prints
struct StepReport<'a> {
    styler: &'a Styler,
    failures: Vec<String>,
}

impl<'a> StepReport<'a> {
    fn new(styler: &'a Styler) -> Self {
        Self {
            styler,
            failures: Vec::new(),
        }
    }

    fn print(&mut self, step: &str, result: Result<Vec<String>>) {
        match result {
            Ok(lines) => print_lines(&lines),
            Err(e) => self.fail(step, &e),
        }
    }

    fn fail(&mut self, step: &str, error: &anyhow::Error) {
        println!(
            "{} {}",
            self.styler.label(&format!("{step}:")),
            self.styler.error(&format!("{error:#}"))
        );
        self.failures.push(step.to_string());
    }

    fn finish(self) -> Result<()> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            bail!("Overview incomplete, failed steps: {}", self.failures.join(", "))
        }
    }
}

/// Top languages section, preceded by a blank line; nothing when `top_langs` is 0
pub fn render_top_languages(totals: &LanguageTotals, top_langs: usize, styler: &Styler) -> Vec<String> {
    if top_langs == 0 {
        return Vec::new();
    }

    let top = totals.top(top_langs);
    let heading = language_heading(Some(top_langs), top.len(), totals.repositories_counted());
    let mut lines = vec![String::new()];
    lines.extend(render_language_stats(&top, &heading, styler));
    lines
}

#[async_trait]
impl Command for OverviewCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let config = &context.config;
        let styler = &context.styler;
        let mut report = StepReport::new(styler);

        if !config.ascii_art.is_empty() {
            print_lines(&render_ascii_art(config, styler));
            println!();
        }

        let api = context.api();

        if config.gitea_version {
            match api {
                Ok(api) => report.print("Gitea version", render_gitea_version(api, styler).await),
                Err(ref e) => report.fail("Gitea version", e),
            }
        }
        if config.edison_version {
            print_lines(&render_edison_version(styler));
        }

        let api = match api {
            Ok(api) => api,
            Err(e) => {
                if !config.gitea_version {
                    report.fail("Gitea", &e);
                }
                return report.finish();
            }
        };

        // User, count, code size and languages share one enumeration.
        let set = match enumerate_repositories(api, context.include_orgs).await {
            Ok(set) => set,
            Err(e) => {
                report.fail("Repositories", &e);
                return report.finish();
            }
        };

        if config.gitea_user {
            print_lines(&render_user(&set.user, styler));
        }
        if config.repo_count {
            print_lines(&render_repository_count(&set, context.include_orgs, styler));
        }

        let totals = collect_language_totals(api, &set.repositories, context.parallel).await;
        print_lines(&render_code_size(&totals, styler));
        print_lines(&render_skipped(&totals, styler));

        print_lines(&render_top_languages(&totals, config.top_langs, styler));

        report.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edison_gitea::LanguageBytes;

    fn go_and_python() -> LanguageTotals {
        let mut totals = LanguageTotals::new();
        for repo in [vec![("Go", 100)], vec![("Go", 100), ("Python", 200)]] {
            let langs: LanguageBytes = repo.into_iter().map(|(l, b)| (l.to_string(), b)).collect();
            totals.add_repository(&langs);
        }
        totals
    }

    #[test]
    fn test_top_languages_hidden_when_zero() {
        assert!(render_top_languages(&go_and_python(), 0, &Styler::plain()).is_empty());
    }

    #[test]
    fn test_top_languages_section() {
        let lines = render_top_languages(&go_and_python(), 1, &Styler::plain());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Top 1 languages across 2 repositories");
        assert!(lines[2].contains("50.00%"));
    }
}
