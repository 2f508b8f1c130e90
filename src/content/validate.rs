// src/content/validate.rs
// =============================================================================
// Checks every content file under a content root against its schema.
//
// Layout expected under the root:
//   projects/*.md(x)   -> Project
//   visuals/*.md(x)    -> Visual
//   blog/*.md(x)       -> BlogPost
//
// A missing collection directory is skipped, not an error: a site may not
// have every collection yet. A missing content root is an error.
// =============================================================================

use crate::content::locate::list_content_files;
use crate::content::schema::{Collection, ContentEntry, SchemaErrors};
use crate::frontmatter::split_structured;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONTENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// What happened to one content file
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Valid(ContentEntry),
    Invalid(SchemaErrors),
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub collection: Collection,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, FileOutcome::Valid(_))
    }
}

/// JSON-friendly view of a FileReport for --json output
#[derive(Debug, Serialize)]
pub struct FileReportJson {
    pub path: String,
    pub collection: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl From<&FileReport> for FileReportJson {
    fn from(report: &FileReport) -> Self {
        let errors = match &report.outcome {
            FileOutcome::Valid(_) => Vec::new(),
            FileOutcome::Invalid(errors) => errors.0.iter().map(ToString::to_string).collect(),
            FileOutcome::Unreadable(message) => vec![message.clone()],
        };
        FileReportJson {
            path: report.path.display().to_string(),
            collection: report.collection.to_string(),
            valid: report.is_valid(),
            errors,
        }
    }
}

/// Validates a single file against `collection`'s schema
pub fn validate_file(path: &Path, collection: Collection) -> FileReport {
    let outcome = match fs::read_to_string(path) {
        Ok(text) => match collection.parse_entry(&split_structured(&text)) {
            Ok(entry) => FileOutcome::Valid(entry),
            Err(errors) => FileOutcome::Invalid(errors),
        },
        Err(e) => FileOutcome::Unreadable(e.to_string()),
    };

    FileReport {
        path: path.to_path_buf(),
        collection,
        outcome,
    }
}

/// Validates every collection under `root`
///
/// Fails with `NotFound` when `root` itself is not a directory.
pub fn validate_content_dir(root: &Path) -> io::Result<Vec<FileReport>> {
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Content directory not found: {}", root.display()),
        ));
    }

    let mut reports = Vec::new();

    for collection in Collection::ALL {
        let dir = root.join(collection.dir_name());
        if !dir.is_dir() {
            debug!("No {} directory at {}", collection, dir.display());
            continue;
        }

        for path in list_content_files(&dir, &CONTENT_EXTENSIONS)? {
            reports.push(validate_file(&path, collection));
        }
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_content_dir() {
        let root = TempDir::new().unwrap();
        let projects = root.path().join("projects");
        let blog = root.path().join("blog");
        fs::create_dir(&projects).unwrap();
        fs::create_dir(&blog).unwrap();

        fs::write(
            projects.join("good.mdx"),
            "---\ntitle: Good\ndescription: D\ntechStack:\n  - Rust\nrole: Dev\nhighlights:\n  - Fast\n---\nBody",
        )
        .unwrap();
        fs::write(projects.join("bad.mdx"), "---\ntitle: Bad\n---\nBody").unwrap();
        fs::write(projects.join("ignored.txt"), "not content").unwrap();
        fs::write(
            blog.join("post.md"),
            "---\ntitle: Post\ndescription: D\npublishDate: 2024-01-02\n---\nHi",
        )
        .unwrap();

        let reports = validate_content_dir(root.path()).unwrap();
        assert_eq!(reports.len(), 3);

        // Projects come first, sorted by path
        assert_eq!(reports[0].path, projects.join("bad.mdx"));
        assert!(!reports[0].is_valid());
        assert!(reports[1].is_valid());
        assert_eq!(reports[2].collection, Collection::Blog);
        assert!(reports[2].is_valid());

        let json = FileReportJson::from(&reports[0]);
        assert!(!json.valid);
        assert!(json.errors.iter().any(|e| e.contains("description")));
    }

    #[test]
    fn test_empty_root() {
        let root = TempDir::new().unwrap();
        assert!(validate_content_dir(root.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("no-such-content");

        let err = validate_content_dir(&missing).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("no-such-content"));
    }

    #[test]
    fn test_root_that_is_a_file_is_an_error() {
        let root = TempDir::new().unwrap();
        let file = root.path().join("content.md");
        fs::write(&file, "not a directory").unwrap();

        assert!(validate_content_dir(&file).is_err());
    }

    #[test]
    fn test_file_without_front_matter_is_invalid() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("plain.md");
        fs::write(&path, "# Just a heading\n").unwrap();

        let report = validate_file(&path, Collection::Visuals);
        match report.outcome {
            FileOutcome::Invalid(errors) => assert!(!errors.0.is_empty()),
            other => panic!("expected invalid, got {:?}", other),
        }
    }
}
