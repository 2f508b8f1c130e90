// src/config.rs
// =============================================================================
// Run configuration for the `sync` command.
//
// Values come from command-line flags, which in turn fall back to
// environment variables (see cli.rs). The struct is plain data so tests can
// build one by hand and point it at a mock server.
// =============================================================================

use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_PROJECTS_DIR: &str = "src/content/projects";
pub const DEFAULT_CONTENT_DIR: &str = "src/content";
pub const DEFAULT_CV_PATH: &str = "src/data/cv.json";

#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Optional GitHub token, sent as a bearer token
    pub token: Option<String>,
    /// Base URL of the GitHub REST API
    pub api_base: String,
    /// Base URL serving raw repository files
    pub raw_base: String,
    /// Directory holding the project .mdx files
    pub projects_dir: PathBuf,
    /// Print the report as JSON instead of text
    pub json: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            raw_base: DEFAULT_RAW_BASE.to_string(),
            projects_dir: PathBuf::from(DEFAULT_PROJECTS_DIR),
            json: false,
        }
    }
}
