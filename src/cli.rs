//! Command-line interface for langstats.
//!
//! Handles CLI argument parsing and execution logic for generating the
//! language statistics card.

use crate::config::{CliOverrides, Config};
use crate::errors::Result;
use crate::github::GitHubClient;
use crate::pipeline::{self, GenerateOutcome};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::Level;

/// Command-line arguments for langstats.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The output path for the generated card (`.svg` or `.png`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// GitHub token to use for API requests.
    #[arg(short, long)]
    pub token: Option<String>,

    /// Account used when fetching repository languages.
    #[arg(short, long)]
    pub user: Option<String>,

    /// Number of languages shown on the card.
    #[arg(short = 'n', long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,

    /// Stop listing after this many repositories.
    #[arg(long = "max-repos", value_name = "COUNT")]
    pub max_repos: Option<usize>,

    /// Set the logging level.
    #[arg(long, short = 'L', value_name = "LEVEL", default_value_t = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO })]
    pub log_level: Level,
}

impl Cli {
    /// Configuration overrides carried by the parsed arguments.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            token: self.token.clone(),
            username: self.user.clone(),
            output: self.output.clone(),
            limit: self.limit,
            max_repositories: self.max_repos,
        }
    }
}

/// Writes the human-readable result of a run.
pub fn write_summary<W: Write>(writer: &mut W, outcome: &GenerateOutcome) -> io::Result<()> {
    match outcome {
        GenerateOutcome::Written {
            path, languages, ..
        } => {
            writeln!(writer, "Card generated: {}", path.display())?;
            writeln!(writer)?;
            writeln!(writer, "Language statistics:")?;
            for lang in languages {
                writeln!(writer, "  {}: {:.1}%", lang.name, lang.percentage)?;
            }
        }
        GenerateOutcome::NoData => {
            writeln!(writer, "No language data found, nothing written.")?;
        }
    }

    Ok(())
}

/// Executes the CLI command to generate the language card.
///
/// # Errors
///
/// Fails before any request when no token is configured, and when the
/// output cannot be written.
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(Some(cli.overrides()));
    let client = GitHubClient::from_config(&config)?;

    let start_time = std::time::Instant::now();
    let outcome = pipeline::generate(&client, &config).await?;

    tracing::debug!(
        username = config.username(),
        total_duration = ?start_time.elapsed(),
        "Generation completed"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_summary(&mut handle, &outcome)?;

    Ok(())
}
