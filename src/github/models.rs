// src/github/models.rs
// =============================================================================
// Data types for what we read from GitHub.
//
// Only the fields we actually use are declared; serde ignores the rest of
// the (very large) API payloads. Fields GitHub may send as null are Options
// or carry #[serde(default)] so a sparse repo never fails to deserialize.
// =============================================================================

use serde::{Deserialize, Serialize};

/// Repository metadata from `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub pushed_at: String,
}

/// One entry of `GET /repos/{owner}/{repo}/commits`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitAuthor {
    #[serde(default)]
    pub date: String,
}

impl Commit {
    /// Convenience constructor, mostly for tests
    pub fn new(sha: &str, message: &str, date: &str) -> Self {
        Commit {
            sha: sha.to_string(),
            commit: CommitDetail {
                message: message.to_string(),
                author: Some(CommitAuthor {
                    date: date.to_string(),
                }),
            },
        }
    }

    /// Only the first line of a commit message carries meaning for us
    pub fn summary_line(&self) -> &str {
        self.commit.message.split('\n').next().unwrap_or("")
    }
}

/// Everything one sync run knows about a repository
///
/// `features` and `recent_changes` are derived from `readme` and `commits`
/// right after fetching.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoData {
    pub repo: GitHubRepo,
    #[serde(skip_serializing)]
    pub readme: String,
    #[serde(skip_serializing)]
    pub commits: Vec<Commit>,
    pub features: Vec<String>,
    pub recent_changes: Vec<String>,
}

impl RepoData {
    /// Builds the aggregate and runs the extraction heuristics
    pub fn new(repo: GitHubRepo, readme: String, commits: Vec<Commit>) -> Self {
        let features = crate::extract::extract_features(&readme);
        let recent_changes = crate::extract::extract_recent_changes(&commits);
        RepoData {
            repo,
            readme,
            commits,
            features,
            recent_changes,
        }
    }
}
