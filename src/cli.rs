// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The default action is a sync, so the common case stays short:
//
//   portfolio-sync https://github.com/celloopa/ghosted
//
// Two extra subcommands cover the rest of the content layer:
//
//   portfolio-sync validate --content-dir src/content
//   portfolio-sync cv --path src/data/cv.json
//
// Subcommand names are matched before the URL positional, so global flags
// such as -v may come first: `portfolio-sync -v validate`.
// =============================================================================

use crate::config::{
    SyncConfig, DEFAULT_API_BASE, DEFAULT_CONTENT_DIR, DEFAULT_CV_PATH, DEFAULT_PROJECTS_DIR,
    DEFAULT_RAW_BASE,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Environment variable holding the GitHub token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-sync",
    version,
    about = "Suggest portfolio content updates from a GitHub repository",
    long_about = "portfolio-sync reads a GitHub repository's metadata, README and recent commits \
                  and prints suggested highlights, keywords and a CV entry for the portfolio site. \
                  It never writes to the content files; review the output and apply it by hand."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Arguments for the implicit `sync` when no subcommand is given
    #[command(flatten)]
    pub sync: SyncArgs,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a repository and print suggested content updates (the default)
    ///
    /// Example: portfolio-sync sync https://github.com/celloopa/ghosted
    Sync(SyncArgs),

    /// Check content files against the collection schemas
    ///
    /// Example: portfolio-sync validate --content-dir src/content
    Validate {
        /// Content root holding projects/, visuals/ and blog/
        #[arg(long, default_value = DEFAULT_CONTENT_DIR)]
        content_dir: PathBuf,

        /// Output results in JSON format instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the CV document as formatted JSON
    ///
    /// Example: portfolio-sync cv --path src/data/cv.json
    Cv {
        /// Path to the CV JSON file
        #[arg(long, default_value = DEFAULT_CV_PATH)]
        path: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SyncArgs {
    /// GitHub repository URL (e.g., https://github.com/user/repo)
    pub repo_url: Option<String>,

    /// GitHub token (falls back to the GITHUB_TOKEN environment variable)
    #[arg(long)]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Base URL serving raw repository files
    #[arg(long, default_value = DEFAULT_RAW_BASE)]
    pub raw_base: String,

    /// Directory with the project .mdx files
    #[arg(long, default_value = DEFAULT_PROJECTS_DIR)]
    pub projects_dir: PathBuf,

    /// Output the report in JSON format instead of text
    #[arg(long)]
    pub json: bool,
}

impl SyncArgs {
    /// Builds the run configuration, reading the token from the
    /// environment when no --token flag was given
    pub fn to_config(&self) -> SyncConfig {
        let token = self
            .token
            .clone()
            .or_else(|| std::env::var(TOKEN_ENV).ok())
            .filter(|t| !t.is_empty());

        SyncConfig {
            token,
            api_base: self.api_base.clone(),
            raw_base: self.raw_base.clone(),
            projects_dir: self.projects_dir.clone(),
            json: self.json,
        }
    }
}
