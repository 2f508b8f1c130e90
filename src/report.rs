// src/report.rs
// =============================================================================
// Presentation of a sync run.
//
// Two formats:
// - text: a sectioned console summary followed by the suggested updates
//   and the suggested CV entry as pretty JSON
// - json: the whole report as a single JSON document (for scripts)
//
// Nothing is ever written back to the content files; a human reviews the
// output and applies what they want by hand.
//
// Rust concepts:
// - std::fmt::Write: writeln! into a String instead of stdout
// - #[serde(flatten)]: inline a nested struct's fields into the JSON
// =============================================================================

use crate::frontmatter::FrontMatter;
use crate::github::RepoData;
use crate::suggest::Suggestions;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

const RULE_WIDTH: usize = 60;

/// How many recent changes / features the text summary shows
const SHOWN_CHANGES: usize = 5;
const SHOWN_FEATURES: usize = 10;

/// The local project file matched to the repo, already split
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    pub path: PathBuf,
    pub front_matter: FrontMatter,
}

impl ProjectDocument {
    pub fn current_highlights(&self) -> &[String] {
        self.front_matter.list("highlights").unwrap_or(&[])
    }
}

/// Everything one `sync` run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    #[serde(flatten)]
    pub data: RepoData,
    pub project_document: Option<ProjectDocument>,
    pub suggestions: Suggestions,
}

impl SyncReport {
    pub fn new(data: RepoData, project_document: Option<ProjectDocument>) -> Self {
        let suggestions = Suggestions::from_repo_data(&data);
        SyncReport {
            data,
            project_document,
            suggestions,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the human-readable summary
    pub fn to_text(&self) -> Result<String> {
        let mut out = String::new();
        let repo = &self.data.repo;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(out, "\n{}", rule)?;
        writeln!(out, "PROJECT SYNC SUMMARY: {}", repo.name.to_uppercase())?;
        writeln!(out, "{}", rule)?;

        writeln!(out, "\n📦 Repository Info:")?;
        writeln!(out, "   Name: {}", repo.name)?;
        writeln!(out, "   Description: {}", repo.description.as_deref().unwrap_or("-"))?;
        writeln!(out, "   Language: {}", repo.language.as_deref().unwrap_or("-"))?;
        writeln!(out, "   Topics: {}", repo.topics.join(", "))?;
        writeln!(out, "   Last updated: {}", repo.updated_at)?;

        writeln!(out, "\n🔄 Recent Changes:")?;
        for change in self.data.recent_changes.iter().take(SHOWN_CHANGES) {
            writeln!(out, "   • {}", change)?;
        }

        writeln!(out, "\n✨ Extracted Features:")?;
        for feature in self.data.features.iter().take(SHOWN_FEATURES) {
            writeln!(out, "   • {}", feature)?;
        }

        if let Some(doc) = &self.project_document {
            writeln!(out, "\n📄 Current MDX Highlights ({}):", doc.path.display())?;
            for highlight in doc.current_highlights() {
                writeln!(out, "   • {}", highlight)?;
            }
        }

        writeln!(out, "\n{}", rule)?;

        writeln!(out, "\n💡 SUGGESTED UPDATES:")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

        writeln!(out, "\nSuggested MDX Highlights:")?;
        for highlight in &self.suggestions.highlights {
            writeln!(out, "   - {}", highlight)?;
        }

        writeln!(out, "\nSuggested cv.json Keywords:")?;
        writeln!(out, "   {}", serde_json::to_string(&self.suggestions.keywords)?)?;

        writeln!(out, "\n📝 cv.json Project Entry (suggested):")?;
        writeln!(out, "{}", serde_json::to_string_pretty(&self.suggestions.cv_entry)?)?;

        writeln!(out, "\n{}", rule)?;
        writeln!(out, "Review the suggestions above and apply updates manually.")?;
        writeln!(out, "{}", rule)?;

        Ok(out)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why build a String instead of calling println! directly?
//    - Tests can check the text without capturing stdout
//    - writeln! on a String returns fmt::Result, which `?` turns into
//      an anyhow::Error here
//
// 2. What does #[serde(flatten)] do?
//    - SyncReport holds a RepoData, but the JSON shows its fields
//      (repo, features, recentChanges) at the top level
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::split_structured;
    use crate::github::{Commit, GitHubRepo};

    fn report(with_doc: bool) -> SyncReport {
        let repo = GitHubRepo {
            name: "ghosted".to_string(),
            description: None,
            topics: vec!["cli".to_string()],
            language: Some("Go".to_string()),
            html_url: "https://github.com/celloopa/ghosted".to_string(),
            created_at: "2024-03-01T10:00:00Z".to_string(),
            updated_at: "2024-06-01T10:00:00Z".to_string(),
            pushed_at: "2024-06-01T10:00:00Z".to_string(),
        };
        let data = RepoData::new(
            repo,
            "## Features\n- Keyboard driven\n".to_string(),
            vec![Commit::new("1", "Add status filters", "2024-06-01")],
        );
        let doc = with_doc.then(|| ProjectDocument {
            path: PathBuf::from("src/content/projects/ghosted.mdx"),
            front_matter: split_structured("---\nhighlights:\n  - Existing highlight\n---\nBody"),
        });
        SyncReport::new(data, doc)
    }

    #[test]
    fn test_text_summary_sections() {
        let text = report(true).to_text().unwrap();
        assert!(text.contains("PROJECT SYNC SUMMARY: GHOSTED"));
        assert!(text.contains("   Description: -"));
        assert!(text.contains("   • Add status filters"));
        assert!(text.contains("   • Keyboard driven"));
        assert!(text.contains("   • Existing highlight"));
        assert!(text.contains("   - Scriptable CLI interface"));
        assert!(text.contains(r#"   ["Go","Cli"]"#));
        assert!(text.contains("\"startDate\": \"2024-03\""));
    }

    #[test]
    fn test_text_without_project_document() {
        let text = report(false).to_text().unwrap();
        assert!(!text.contains("Current MDX Highlights"));
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value = serde_json::from_str(&report(true).to_json().unwrap()).unwrap();
        assert_eq!(json["repo"]["name"], "ghosted");
        assert_eq!(json["features"][0], "Keyboard driven");
        assert_eq!(json["recentChanges"][0], "Add status filters");
        assert_eq!(json["suggestions"]["cvEntry"]["type"], "application");
        assert_eq!(
            json["projectDocument"]["frontMatter"]["fields"]["highlights"][0],
            "Existing highlight"
        );
        assert!(json.get("readme").is_none());
    }
}
