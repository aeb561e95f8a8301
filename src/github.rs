//! GitHub REST client and the sequential fetch steps built on it.
//!
//! Fetch failures are never propagated: the lister stops paginating and
//! reports why through [`ListingStop`], and the language fetcher returns a
//! [`LanguageOutcome`] that callers may surface or fold into an empty map.

use crate::config::Config;
use crate::errors::{ConfigError, GitHubError, Result};
use indexmap::IndexMap;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

/// Accept header pinning the REST API version.
pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

const USER_AGENT: &str = concat!("langstats/", env!("CARGO_PKG_VERSION"));

/// Language name → byte count for one repository, in API order.
pub type LanguageByteMap = IndexMap<String, u64>;

/// Outcome of a single API call.
pub type FetchResult<T> = std::result::Result<T, GitHubError>;

/// Repository entry from the listing endpoint. Only `name` is used downstream.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Repository {
    /// Repository name
    pub name: String,
    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,
    /// Last update timestamp as reported by the API
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// The two read-only endpoints this tool consumes.
#[allow(async_fn_in_trait)]
pub trait GitHubApi {
    /// Fetches one page (1-based) of the authenticated user's repositories,
    /// newest-updated first, private ones included.
    async fn repositories_page(&self, page: u32, per_page: u32) -> FetchResult<Vec<Repository>>;

    /// Fetches the language breakdown of `owner/repo`.
    async fn repository_languages(&self, owner: &str, repo: &str) -> FetchResult<LanguageByteMap>;
}

/// Why repository pagination ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingStop {
    /// A page came back empty
    Exhausted,
    /// The configured repository cap was reached
    CapReached,
    /// A page request failed; repositories from earlier pages are kept
    Failed { page: u32, error: GitHubError },
}

/// Repositories collected by [`list_repositories`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryListing {
    pub repositories: Vec<Repository>,
    pub stop: ListingStop,
}

impl RepositoryListing {
    /// True when pagination ended on an error rather than on its own.
    pub fn is_truncated(&self) -> bool {
        matches!(self.stop, ListingStop::Failed { .. })
    }
}

/// Result of fetching one repository's languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageOutcome {
    Fetched(LanguageByteMap),
    Failed(GitHubError),
}

impl LanguageOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, LanguageOutcome::Failed(_))
    }

    pub fn languages(&self) -> Option<&LanguageByteMap> {
        match self {
            LanguageOutcome::Fetched(languages) => Some(languages),
            LanguageOutcome::Failed(_) => None,
        }
    }

    /// Consumes the outcome; a failure contributes an empty map.
    pub fn into_languages(self) -> LanguageByteMap {
        match self {
            LanguageOutcome::Fetched(languages) => languages,
            LanguageOutcome::Failed(_) => LanguageByteMap::new(),
        }
    }
}

/// Pages through the repository listing until a page is empty, `max_repositories`
/// have been collected, or a request fails.
///
/// The returned list never holds more than `max_repositories` entries.
#[instrument(skip(api))]
pub async fn list_repositories<A: GitHubApi>(
    api: &A,
    per_page: u32,
    max_repositories: usize,
) -> RepositoryListing {
    let per_page = per_page.clamp(1, 100);
    let mut repositories: Vec<Repository> = Vec::new();
    let mut page: u32 = 1;

    let stop = loop {
        if repositories.len() >= max_repositories {
            break ListingStop::CapReached;
        }

        match api.repositories_page(page, per_page).await {
            Ok(items) if items.is_empty() => break ListingStop::Exhausted,
            Ok(items) => {
                debug!(page, count = items.len(), "Fetched repository page");
                repositories.extend(items);
                page += 1;
            }
            Err(error) => {
                warn!(page, %error, "Error fetching repositories, keeping earlier pages");
                break ListingStop::Failed { page, error };
            }
        }
    };

    repositories.truncate(max_repositories);
    info!(count = repositories.len(), stop = ?stop, "Repository listing finished");

    RepositoryListing { repositories, stop }
}

/// Fetches the languages of one repository, logging failures.
#[instrument(skip(api))]
pub async fn fetch_languages<A: GitHubApi>(api: &A, owner: &str, repo: &str) -> LanguageOutcome {
    match api.repository_languages(owner, repo).await {
        Ok(languages) => {
            debug!(count = languages.len(), "Fetched languages");
            LanguageOutcome::Fetched(languages)
        }
        Err(error) => {
            warn!(%error, "Error fetching languages for {}", repo);
            LanguageOutcome::Failed(error)
        }
    }
}

/// reqwest-backed [`GitHubApi`] implementation.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: String,
}

impl GitHubClient {
    /// Builds a client that authenticates every request with `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the
    /// underlying HTTP client cannot be constructed.
    pub fn new(token: &str, api_base: &str) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ConfigError::InvalidToken)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Builds a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError::MissingToken`] before any request is made
    /// when no token is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config.require_token()?;
        Self::new(token, &config.github.api_base)
    }

    /// Get the API base URL
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> FetchResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| GitHubError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "GitHub API returned non-success status");
            return Err(GitHubError::from_status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GitHubError::Decode(e.to_string()))
    }
}

impl GitHubApi for GitHubClient {
    async fn repositories_page(&self, page: u32, per_page: u32) -> FetchResult<Vec<Repository>> {
        let request = self
            .http
            .get(format!("{}/user/repos", self.api_base))
            .query(&[
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
                ("type", "all".to_string()),
                ("sort", "updated".to_string()),
                ("direction", "desc".to_string()),
            ]);

        self.get_json(request).await
    }

    async fn repository_languages(&self, owner: &str, repo: &str) -> FetchResult<LanguageByteMap> {
        let request = self
            .http
            .get(format!("{}/repos/{}/{}/languages", self.api_base, owner, repo));

        self.get_json(request).await
    }
}
