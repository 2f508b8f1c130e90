// src/sync.rs
// =============================================================================
// One complete sync run, minus the printing.
//
// 1. Parse the repo URL (bad URL -> InvalidUrl, a usage error)
// 2. Fetch metadata, README and commits (metadata failure is fatal)
// 3. Find and split the local project file that mentions the URL
// 4. Build the suggestions
// =============================================================================

use crate::config::SyncConfig;
use crate::content::find_project_document;
use crate::error::Result;
use crate::frontmatter::split_structured;
use crate::github::{parse_github_url, GitHubClient};
use crate::report::{ProjectDocument, SyncReport};
use std::fs;
use tracing::{info, warn};

/// The line printed before any request goes out
///
/// Fails with InvalidUrl for a bad URL, so callers can report the usage
/// error before printing anything.
pub fn fetch_banner(repo_url: &str) -> Result<String> {
    let (owner, repo) = parse_github_url(repo_url)?;
    Ok(format!("🔍 Fetching data for {}/{}...", owner, repo))
}

pub async fn sync_repository(repo_url: &str, config: &SyncConfig) -> Result<SyncReport> {
    let (owner, repo) = parse_github_url(repo_url)?;
    info!("Syncing {}/{}", owner, repo);

    let client = GitHubClient::new(config)?;
    let data = client.fetch_repo_data(&owner, &repo).await?;

    let project_document = load_project_document(config, repo_url);

    Ok(SyncReport::new(data, project_document))
}

// The project file is optional context; any problem finding or reading it
// is logged and the run continues without it.
fn load_project_document(config: &SyncConfig, repo_url: &str) -> Option<ProjectDocument> {
    let path = match find_project_document(&config.projects_dir, repo_url) {
        Ok(Some(path)) => path,
        Ok(None) => {
            info!("No project file in {} mentions {}", config.projects_dir.display(), repo_url);
            return None;
        }
        Err(e) => {
            warn!("Could not scan {}: {}", config.projects_dir.display(), e);
            return None;
        }
    };

    match fs::read_to_string(&path) {
        Ok(text) => {
            let front_matter = split_structured(&text);
            if !front_matter.has_fields() {
                warn!("{} has no front matter fields", path.display());
            }
            Some(ProjectDocument { path, front_matter })
        }
        Err(e) => {
            warn!("Could not read {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;
    use tempfile::TempDir;

    #[test]
    fn test_fetch_banner() {
        let banner = fetch_banner("https://github.com/celloopa/ghosted.git").unwrap();
        assert_eq!(banner, "🔍 Fetching data for celloopa/ghosted...");
    }

    #[test]
    fn test_fetch_banner_rejects_bad_url() {
        match fetch_banner("not-a-url") {
            Err(SyncError::InvalidUrl(url)) => assert_eq!(url, "not-a-url"),
            other => panic!("expected InvalidUrl, got {:?}", other),
        }
    }

    #[test]
    fn test_project_document_without_front_matter_is_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ghosted.mdx");
        fs::write(&path, "See https://github.com/celloopa/ghosted\n").unwrap();

        let config = SyncConfig {
            projects_dir: dir.path().to_path_buf(),
            ..SyncConfig::default()
        };
        let doc = load_project_document(&config, "https://github.com/celloopa/ghosted").unwrap();
        assert_eq!(doc.path, path);
        assert!(!doc.front_matter.has_fields());
        assert!(doc.current_highlights().is_empty());
    }

    #[test]
    fn test_missing_projects_dir_yields_no_document() {
        let dir = TempDir::new().unwrap();
        let config = SyncConfig {
            projects_dir: dir.path().join("missing"),
            ..SyncConfig::default()
        };
        assert!(load_project_document(&config, "https://github.com/a/b").is_none());
    }
}
