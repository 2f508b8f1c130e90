// src/lib.rs
// =============================================================================
// portfolio-sync keeps a portfolio site's content in step with the GitHub
// repositories it showcases.
//
// Modules:
// - github: fetching repo metadata, README and commits
// - extract: README feature and commit-message heuristics
// - frontmatter: the restricted front matter splitter
// - content: collection schemas, project file lookup, validation
// - suggest: highlight, keyword and CV entry suggestions
// - report: console and JSON output of a sync run
// - cv: JSON export of the CV document
// - sync: one end-to-end sync run
// =============================================================================

pub mod cli;
pub mod config;
pub mod content;
pub mod cv;
pub mod error;
pub mod extract;
pub mod frontmatter;
pub mod github;
pub mod logging;
pub mod report;
pub mod suggest;
pub mod sync;

pub use config::SyncConfig;
pub use error::{Result, SyncError};
pub use extract::{extract_features, extract_recent_changes};
pub use frontmatter::{split_structured, FieldValue, FrontMatter};
pub use github::{parse_github_url, GitHubClient, RepoData};
pub use report::{ProjectDocument, SyncReport};
pub use sync::sync_repository;
