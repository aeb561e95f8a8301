//! End-to-end generation: list → fetch → aggregate → rank → render → write.

use crate::config::{Config, GitHubConfig};
use crate::encode::ImageFormat;
use crate::errors::Result;
use crate::github::{
    fetch_languages, list_repositories, GitHubApi, LanguageOutcome, RepositoryListing,
};
use crate::stats::{aggregate, top_languages, AggregateStats, RankedLanguage};
use crate::svg::{render, write_document};
use std::path::PathBuf;
use tracing::{info, warn};

/// Languages fetched for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLanguages {
    pub name: String,
    pub outcome: LanguageOutcome,
}

/// Everything gathered from the API in one run.
#[derive(Debug, Clone)]
pub struct CollectionReport {
    pub listing: RepositoryListing,
    pub repositories: Vec<RepositoryLanguages>,
    pub stats: AggregateStats,
}

impl CollectionReport {
    /// Names of repositories whose language fetch failed.
    pub fn failed_repositories(&self) -> impl Iterator<Item = &str> {
        self.repositories
            .iter()
            .filter(|repo| repo.outcome.is_failed())
            .map(|repo| repo.name.as_str())
    }
}

/// Result of a full generation run.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// The document was written to `path`.
    Written {
        path: PathBuf,
        format: ImageFormat,
        languages: Vec<RankedLanguage>,
    },
    /// No language bytes were found; nothing was written.
    NoData,
}

/// Lists repositories and fetches their languages one at a time, in listing order.
pub async fn collect_language_stats<A: GitHubApi>(
    api: &A,
    github: &GitHubConfig,
) -> CollectionReport {
    info!("Fetching repository list...");
    let listing = list_repositories(api, github.per_page, github.max_repositories).await;
    let total = listing.repositories.len();
    info!("Found {} repositories", total);

    let mut repositories = Vec::with_capacity(total);
    for (index, repo) in listing.repositories.iter().enumerate() {
        info!("Processing repository {}/{}: {}", index + 1, total, repo.name);
        let outcome = fetch_languages(api, &github.username, &repo.name).await;
        repositories.push(RepositoryLanguages {
            name: repo.name.clone(),
            outcome,
        });
    }

    let stats = aggregate(repositories.iter().filter_map(|repo| repo.outcome.languages()));

    let report = CollectionReport {
        listing,
        repositories,
        stats,
    };

    let failed = report.failed_repositories().count();
    if failed > 0 {
        warn!(failed, "Some repositories contributed no language data");
    }

    report
}

/// Runs the whole pipeline and writes the card to the configured output path.
///
/// # Errors
///
/// Only output failures are returned; API failures reduce the data instead.
pub async fn generate<A: GitHubApi>(api: &A, config: &Config) -> Result<GenerateOutcome> {
    let report = collect_language_stats(api, &config.github).await;

    info!("Generating language statistics...");
    let languages = top_languages(&report.stats, config.stats.limit);
    if languages.is_empty() {
        info!("No language data found");
        return Ok(GenerateOutcome::NoData);
    }

    let svg = render(&languages);
    let path = config.output_path().to_path_buf();
    let format = write_document(&svg, &path)?;
    info!("Card generated: {}", path.display());

    Ok(GenerateOutcome::Written {
        path,
        format,
        languages,
    })
}
