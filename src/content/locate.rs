// src/content/locate.rs
// =============================================================================
// Finds the local project file that belongs to a repository.
//
// A project .mdx file "belongs" to a repo when its text contains the repo
// URL anywhere (usually in the `github:` field). Files are checked in
// sorted order so the result does not depend on directory listing order.
// =============================================================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lists files directly inside `dir` whose extension is one of `extensions`
pub fn list_content_files(dir: &Path, extensions: &[&str]) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.contains(&ext))
        })
        .collect();

    files.sort();
    Ok(files)
}

// Returns the first .mdx file in `dir` whose content contains `repo_url`
//
// Unreadable files are skipped; an unreadable directory is an error.
pub fn find_project_document(dir: &Path, repo_url: &str) -> io::Result<Option<PathBuf>> {
    for path in list_content_files(dir, &["mdx"])? {
        match fs::read_to_string(&path) {
            Ok(content) if content.contains(repo_url) => return Ok(Some(path)),
            Ok(_) => {}
            Err(e) => debug!("Skipping unreadable file {}: {}", path.display(), e),
        }
    }

    Ok(None)
}
