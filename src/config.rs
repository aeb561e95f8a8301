//! Configuration management for the langstats application.
//!
//! Centralizes all configuration options and provides a clean interface
//! for accessing application settings. Values are resolved in the order
//! CLI override, environment variable, built-in default.

use crate::errors::ConfigError;
use std::path::{Path, PathBuf};

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
/// Environment variable holding the account whose languages are fetched.
pub const USERNAME_ENV: &str = "GITHUB_USERNAME";
/// Environment variable holding the output destination.
pub const OUTPUT_PATH_ENV: &str = "OUTPUT_PATH";
/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// GitHub API configuration
    pub github: GitHubConfig,
    /// Ranking configuration
    pub stats: StatsConfig,
    /// Output configuration
    pub output: OutputConfig,
}

/// GitHub API configuration
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// GitHub API token (required before any request is made)
    pub token: Option<String>,
    /// Account used in the per-repository languages endpoint
    pub username: String,
    /// API base URL, without a trailing slash
    pub api_base: String,
    /// Page size for the repository listing
    pub per_page: u32,
    /// Upper bound on the number of repositories collected
    pub max_repositories: usize,
}

/// Ranking configuration
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// Number of languages kept in the rendered card
    pub limit: usize,
}

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Destination of the generated document
    pub path: PathBuf,
}

/// CLI configuration overrides
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// GitHub token override
    pub token: Option<String>,
    /// Account override
    pub username: Option<String>,
    /// Output path override
    pub output: Option<PathBuf>,
    /// Language limit override
    pub limit: Option<usize>,
    /// Repository cap override
    pub max_repositories: Option<usize>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            username: "LeoZWT".to_string(),
            api_base: "https://api.github.com".to_string(),
            per_page: 100,
            max_repositories: 1000,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self { limit: 6 }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("assets/lang-stats-dynamic.svg"),
        }
    }
}

impl Config {
    /// Load configuration from the process environment with CLI overrides
    pub fn load(cli_overrides: Option<CliOverrides>) -> Self {
        Self::load_with(cli_overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` in place of the process environment.
    ///
    /// Empty environment values are treated as unset.
    pub fn load_with<F>(cli_overrides: Option<CliOverrides>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let env = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        // Environment first, CLI overrides take precedence below
        if let Some(token) = env(TOKEN_ENV) {
            config.github.token = Some(token);
        }
        if let Some(username) = env(USERNAME_ENV) {
            config.github.username = username;
        }
        if let Some(path) = env(OUTPUT_PATH_ENV) {
            config.output.path = PathBuf::from(path);
        }
        if let Some(base) = env(API_URL_ENV) {
            config.github.api_base = base.trim_end_matches('/').to_string();
        }

        if let Some(overrides) = cli_overrides {
            if let Some(token) = overrides.token.filter(|token| !token.trim().is_empty()) {
                config.github.token = Some(token);
            }
            if let Some(username) = overrides.username {
                config.github.username = username;
            }
            if let Some(path) = overrides.output {
                config.output.path = path;
            }
            if let Some(limit) = overrides.limit {
                config.stats.limit = limit;
            }
            if let Some(max) = overrides.max_repositories {
                config.github.max_repositories = max;
            }
        }

        config
    }

    /// Get the GitHub token, failing when none was configured
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        self.github
            .token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingToken)
    }

    /// Get the account name
    pub fn username(&self) -> &str {
        &self.github.username
    }

    /// Get the output path
    pub fn output_path(&self) -> &Path {
        &self.output.path
    }
}
