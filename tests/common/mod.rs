#![allow(dead_code)]

use langstats::errors::GitHubError;
use langstats::github::{FetchResult, GitHubApi, LanguageByteMap, Repository};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory GitHub API serving canned pages and language maps.
///
/// Pages past the configured ones come back empty, and repositories without
/// configured languages report an empty map.
#[derive(Default)]
pub struct FakeGitHub {
    pages: Vec<FetchResult<Vec<Repository>>>,
    languages: HashMap<String, FetchResult<LanguageByteMap>>,
    page_requests: RefCell<Vec<(u32, u32)>>,
    language_requests: RefCell<Vec<(String, String)>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, repositories: Vec<Repository>) -> Self {
        self.pages.push(Ok(repositories));
        self
    }

    pub fn with_failing_page(mut self, error: GitHubError) -> Self {
        self.pages.push(Err(error));
        self
    }

    pub fn with_languages(mut self, repo: &str, languages: &[(&str, u64)]) -> Self {
        self.languages
            .insert(repo.to_string(), Ok(language_map(languages)));
        self
    }

    pub fn with_failing_languages(mut self, repo: &str, error: GitHubError) -> Self {
        self.languages.insert(repo.to_string(), Err(error));
        self
    }

    /// `(page, per_page)` pairs in request order.
    pub fn page_requests(&self) -> Vec<(u32, u32)> {
        self.page_requests.borrow().clone()
    }

    /// `(owner, repo)` pairs in request order.
    pub fn language_requests(&self) -> Vec<(String, String)> {
        self.language_requests.borrow().clone()
    }
}

impl GitHubApi for FakeGitHub {
    async fn repositories_page(&self, page: u32, per_page: u32) -> FetchResult<Vec<Repository>> {
        self.page_requests.borrow_mut().push((page, per_page));
        self.pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn repository_languages(&self, owner: &str, repo: &str) -> FetchResult<LanguageByteMap> {
        self.language_requests
            .borrow_mut()
            .push((owner.to_string(), repo.to_string()));
        self.languages
            .get(repo)
            .cloned()
            .unwrap_or_else(|| Ok(LanguageByteMap::new()))
    }
}

pub fn repo(name: &str) -> Repository {
    Repository {
        name: name.to_string(),
        private: false,
        updated_at: None,
    }
}

/// `count` repositories named `{prefix}-0`, `{prefix}-1`, ...
pub fn repos(prefix: &str, count: usize) -> Vec<Repository> {
    (0..count).map(|i| repo(&format!("{}-{}", prefix, i))).collect()
}

pub fn language_map(languages: &[(&str, u64)]) -> LanguageByteMap {
    languages
        .iter()
        .map(|&(name, bytes)| (name.to_string(), bytes))
        .collect()
}
