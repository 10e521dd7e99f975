//! Language size aggregation
//!
//! Gitea reports, per repository, how many bytes of each language it holds.
//! [`collect_language_totals`] sums those maps over a set of repositories and
//! [`LanguageTotals::percentages`] turns the sums into shares of the grand
//! total, largest first.
//!
//! A repository whose language map cannot be fetched is skipped entirely: it
//! adds nothing to the per-language sums nor to the grand total, so the
//! shares of the remaining repositories still add up to 100%.

use crate::constants::stats::PARALLEL_FETCHES;
use edison_gitea::{GiteaApi, LanguageBytes, Repository};
use futures::stream::{self, StreamExt};
use std::collections::HashMap;

/// One language's share of the aggregated code size
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageStat {
    pub language: String,
    pub bytes: u64,
    pub percentage: f64,
}

/// Running per-language byte sums in first-seen order
#[derive(Debug, Clone, Default)]
pub struct LanguageTotals {
    languages: Vec<(String, u64)>,
    positions: HashMap<String, usize>,
    total_bytes: u64,
    repositories_counted: usize,
    skipped: Vec<String>,
}

impl LanguageTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one repository's language map
    pub fn add_repository(&mut self, languages: &LanguageBytes) {
        for (language, &bytes) in languages {
            match self.positions.get(language) {
                Some(&index) => {
                    let entry = &mut self.languages[index].1;
                    *entry = entry.saturating_add(bytes);
                }
                None => {
                    self.positions.insert(language.clone(), self.languages.len());
                    self.languages.push((language.clone(), bytes));
                }
            }
            self.total_bytes = self.total_bytes.saturating_add(bytes);
        }
        self.repositories_counted += 1;
    }

    /// Remember a repository whose languages could not be fetched
    pub fn record_skipped(&mut self, repository: impl Into<String>) {
        self.skipped.push(repository.into());
    }

    /// Sum of all language sizes, in bytes
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn repositories_counted(&self) -> usize {
        self.repositories_counted
    }

    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    pub fn bytes_for(&self, language: &str) -> Option<u64> {
        self.positions
            .get(language)
            .map(|&index| self.languages[index].1)
    }

    /// Every language with its share of the total, largest first
    ///
    /// Equal sizes keep the order in which the languages were first seen.
    /// Returns an empty list when the total is zero.
    pub fn percentages(&self) -> Vec<LanguageStat> {
        if self.total_bytes == 0 {
            return Vec::new();
        }

        let total = self.total_bytes as f64;
        let mut stats: Vec<LanguageStat> = self
            .languages
            .iter()
            .map(|(language, bytes)| LanguageStat {
                language: language.clone(),
                bytes: *bytes,
                percentage: 100.0 * (*bytes as f64) / total,
            })
            .collect();

        // Share is monotonic in bytes; comparing integers keeps ties exact.
        stats.sort_by(|a, b| b.bytes.cmp(&a.bytes));
        stats
    }

    /// The `n` largest languages, or fewer if less are known
    pub fn top(&self, n: usize) -> Vec<LanguageStat> {
        let mut stats = self.percentages();
        stats.truncate(n);
        stats
    }
}

/// Fetch and sum the language maps of `repositories`
///
/// With `parallel`, up to [`PARALLEL_FETCHES`] requests are in flight at once.
/// Results are consumed in input order either way, so the totals and their
/// tie order do not depend on the mode.
pub async fn collect_language_totals(
    api: &dyn GiteaApi,
    repositories: &[Repository],
    parallel: bool,
) -> LanguageTotals {
    let concurrency = if parallel { PARALLEL_FETCHES } else { 1 };

    // Collected before streaming; the returned future must stay `Send`.
    let fetches: Vec<_> = repositories
        .iter()
        .map(|repo| async move {
            let result = api.repo_languages(repo.owner_login(), &repo.name).await;
            (repo, result)
        })
        .collect();

    let results: Vec<_> = stream::iter(fetches)
        .buffered(concurrency)
        .collect()
        .await;

    let mut totals = LanguageTotals::new();
    for (repo, result) in results {
        match result {
            Ok(languages) => totals.add_repository(&languages),
            Err(e) => {
                tracing::warn!("Skipping languages of {}: {e:#}", repo.display_name());
                totals.record_skipped(repo.display_name());
            }
        }
    }

    tracing::debug!(
        repositories = totals.repositories_counted(),
        skipped = totals.skipped().len(),
        total_bytes = totals.total_bytes(),
        "aggregated language sizes"
    );

    totals
}
