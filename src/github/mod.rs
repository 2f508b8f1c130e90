// src/github/mod.rs
// =============================================================================
// This module handles everything we read from GitHub.
//
// Currently implements:
// - Parsing GitHub URLs to extract owner/repo
// - Fetching repo metadata and recent commits through the REST API
// - Fetching README.md through raw.githubusercontent.com
// =============================================================================

mod fetch;
mod models;

pub use fetch::{parse_github_url, GitHubClient};
pub use models::{Commit, CommitAuthor, CommitDetail, GitHubRepo, RepoData};
