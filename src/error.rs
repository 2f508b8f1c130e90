// src/error.rs
// =============================================================================
// Error types for the library side of portfolio-sync.
//
// The binary uses anyhow for plumbing, but the fetch layer needs to tell the
// caller *which* kind of failure happened:
// - InvalidUrl: the user gave us something that isn't a GitHub repo URL
// - RepoStatus: GitHub answered, but not with 2xx (fatal for the run)
// - Http: the request itself failed (DNS, TLS, connection, bad JSON body)
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    /// The input URL does not look like github.com/<owner>/<repo>
    #[error("Invalid GitHub URL: {0}")]
    InvalidUrl(String),

    /// The repository metadata request returned a non-success status
    #[error("Failed to fetch repo {owner}/{repo}: HTTP {status}")]
    RepoStatus {
        owner: String,
        repo: String,
        status: u16,
    },

    /// A non-success status on any other request
    #[error("Failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;
