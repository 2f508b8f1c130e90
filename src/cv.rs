// src/cv.rs
// =============================================================================
// JSON export of the CV document.
//
// The site serves its CV as `/cv.json`; this is the same export from the
// command line. The document is treated as opaque JSON: we check that it
// parses and re-print it with two-space indentation, nothing more.
// =============================================================================

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Reads and parses the CV JSON file
pub fn load_cv(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read CV file {}", path.display()))?;

    serde_json::from_str(&text)
        .with_context(|| format!("CV file {} is not valid JSON", path.display()))
}

/// Formats the CV the way the /cv.json endpoint serves it
pub fn render_cv(cv: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(cv)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_and_render() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cv.json");
        fs::write(&path, r#"{"basics":{"name":"Cello"},"projects":[]}"#).unwrap();

        let cv = load_cv(&path).unwrap();
        let rendered = render_cv(&cv).unwrap();
        assert!(rendered.contains("\n  \"basics\": {\n    \"name\": \"Cello\"\n  }"));
        assert!(rendered.contains("\"projects\": []"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cv.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_cv(&path).unwrap_err();
        assert!(err.to_string().contains("is not valid JSON"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load_cv(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Could not read CV file"));
    }
}
