// src/github/fetch.rs
// =============================================================================
// This module talks to GitHub.
//
// Strategy:
// - Parse the GitHub URL to extract owner and repo name
// - Fetch repository metadata from the REST API (this one MUST work)
// - Fetch README.md via raw.githubusercontent.com, trying `main` then `master`
// - Fetch the 20 most recent commits from the REST API
//
// Everything is awaited one request at a time. Only the metadata request is
// fatal; README and commits degrade to empty values with a warning, because
// a summary without them is still useful to the person reading it.
//
// Base URLs are configurable so tests can point the client at a mock server.
// There is no request timeout or retry; a hung request hangs the run.
// =============================================================================

use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::github::models::{Commit, GitHubRepo, RepoData};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use tracing::{debug, info, warn};

const USER_AGENT: &str = "portfolio-sync";

/// Branches tried, in order, when looking for README.md
const README_BRANCHES: [&str; 2] = ["main", "master"];

/// A thin wrapper around reqwest configured for GitHub
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_base: String,
    raw_base: String,
}

impl GitHubClient {
    /// Builds a client from the run configuration
    ///
    /// Adds the GitHub v3 Accept header to every request, and a bearer
    /// token when one is configured (raises the API rate limit).
    pub fn new(config: &SyncConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("Ignoring GitHub token with invalid characters"),
            }
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(GitHubClient {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            raw_base: config.raw_base.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches repository metadata
    ///
    /// A transport failure or a non-2xx status is an error: without the
    /// repo record there is nothing to summarize.
    pub async fn fetch_repo(&self, owner: &str, repo: &str) -> Result<GitHubRepo> {
        let url = format!("{}/repos/{}/{}", self.api_base, owner, repo);
        info!("Fetching repository metadata from {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SyncError::RepoStatus {
                owner: owner.to_string(),
                repo: repo.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.json::<GitHubRepo>().await?)
    }

    /// Fetches README.md from the first default branch that has one
    ///
    /// Returns an empty string (and logs a warning) if no branch works.
    pub async fn fetch_readme(&self, owner: &str, repo: &str) -> String {
        for branch in README_BRANCHES {
            let url = format!("{}/{}/{}/{}/README.md", self.raw_base, owner, repo, branch);
            match self.fetch_text(&url).await {
                Ok(content) => {
                    debug!("README found on branch {} ({} bytes)", branch, content.len());
                    return content;
                }
                Err(e) => debug!("No README on branch {}: {}", branch, e),
            }
        }

        warn!("Could not fetch README for {}/{}", owner, repo);
        String::new()
    }

    /// Fetches the 20 most recent commits
    ///
    /// Any failure yields an empty list (and a warning).
    pub async fn fetch_commits(&self, owner: &str, repo: &str) -> Vec<Commit> {
        let url = format!("{}/repos/{}/{}/commits?per_page=20", self.api_base, owner, repo);
        info!("Fetching recent commits from {}", url);

        match self.fetch_json::<Vec<Commit>>(&url).await {
            Ok(commits) => commits,
            Err(e) => {
                warn!("Could not fetch commits for {}/{}: {}", owner, repo, e);
                Vec::new()
            }
        }
    }

    /// Runs all three fetches and derives features and recent changes
    pub async fn fetch_repo_data(&self, owner: &str, repo: &str) -> Result<RepoData> {
        let repo_info = self.fetch_repo(owner, repo).await?;
        let readme = self.fetch_readme(owner, repo).await;
        let commits = self.fetch_commits(owner, repo).await;

        Ok(RepoData::new(repo_info, readme, commits))
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(SyncError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(SyncError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

// Parses a GitHub URL to extract owner and repository name
//
// Supported formats:
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - github.com/owner/repo/tree/main (anything after the repo is ignored)
//
// Returns: (owner, repo) tuple
//
// Example:
//   "https://github.com/celloopa/ghosted" -> ("celloopa", "ghosted")
pub fn parse_github_url(url: &str) -> Result<(String, String)> {
    let start = url
        .find("github.com/")
        .ok_or_else(|| SyncError::InvalidUrl(url.to_string()))?;

    let path = &url[start + "github.com/".len()..];
    let mut parts = path.split('/');

    let owner = parts.next().unwrap_or("");
    let repo = parts.next().unwrap_or("");

    if owner.is_empty() || repo.is_empty() {
        return Err(SyncError::InvalidUrl(url.to_string()));
    }

    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    Ok((owner.to_string(), repo.to_string()))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return String instead of Result from fetch_readme?
//    - A missing README is normal, not an error for this tool
//    - The caller gets "" and the warning is already logged
//
// 2. What is DeserializeOwned?
//    - A serde trait bound meaning "can be built from JSON without
//      borrowing from the input"; needed because the response body is
//      dropped once .json() returns
// -----------------------------------------------------------------------------
