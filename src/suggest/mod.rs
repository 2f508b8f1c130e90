// src/suggest/mod.rs
// =============================================================================
// Turns fetched repo data into suggested content updates.
//
// Three outputs, all advisory (a human copies what they like):
// - highlight sentences for the project's .mdx front matter
// - keywords for the CV
// - a complete suggested CV project entry
//
// Everything here is a pure function of RepoData, so the same fetched data
// always produces the same suggestions.
//
// Rust concepts:
// - Function pointers: each highlight rule stores `fn(&RepoData) -> bool`
// - Const tables: rules and keyword markers are fixed arrays
// =============================================================================

use crate::extract::dedup_and_cap;
use crate::github::RepoData;
use serde::{Deserialize, Serialize};

/// Most keywords we suggest for one project
pub const MAX_KEYWORDS: usize = 8;

/// The CV's category for every synced project
pub const CV_PROJECT_TYPE: &str = "application";

// One highlight rule: if `applies` says yes, suggest `sentence`
struct HighlightRule {
    applies: fn(&RepoData) -> bool,
    sentence: &'static str,
}

const HIGHLIGHT_RULES: [HighlightRule; 5] = [
    HighlightRule {
        applies: has_terminal_ui,
        sentence: "Full-featured Terminal User Interface with vim-style navigation and keyboard shortcuts",
    },
    HighlightRule {
        applies: has_cli,
        sentence: "Scriptable CLI interface designed for AI agent integration with JSON I/O",
    },
    HighlightRule {
        applies: mentions_agents,
        sentence: "Multi-agent pipeline for automated document generation and job application workflow",
    },
    HighlightRule {
        applies: changed_compilation,
        sentence: "Document compilation system converting Typst files to PDFs with smart naming",
    },
    HighlightRule {
        applies: changed_fetching,
        sentence: "Job board integration fetching postings from Lever, Greenhouse, Workday, LinkedIn",
    },
];

fn has_terminal_ui(data: &RepoData) -> bool {
    has_topic(data, "tui") || data.readme.contains("TUI")
}

fn has_cli(data: &RepoData) -> bool {
    has_topic(data, "cli") || data.readme.contains("CLI")
}

fn mentions_agents(data: &RepoData) -> bool {
    data.readme.contains("AI agent") || data.readme.contains("agent pipeline")
}

fn changed_compilation(data: &RepoData) -> bool {
    data.recent_changes
        .iter()
        .any(|c| c.to_lowercase().contains("compile") || c.contains("PDF"))
}

fn changed_fetching(data: &RepoData) -> bool {
    data.recent_changes
        .iter()
        .any(|c| c.to_lowercase().contains("fetch"))
}

// README phrases that map to a CV keyword
const README_KEYWORDS: [(&[&str], &str); 5] = [
    (&["Bubble Tea"], "Bubble Tea"),
    (&["TUI"], "TUI"),
    (&["CLI"], "CLI"),
    (&["AI agent"], "AI Integration"),
    (&["open source", "MIT"], "Open Source"),
];

fn has_topic(data: &RepoData, topic: &str) -> bool {
    data.repo.topics.iter().any(|t| t == topic)
}

/// Suggests highlight sentences, in rule order
pub fn suggest_highlights(data: &RepoData) -> Vec<String> {
    HIGHLIGHT_RULES
        .iter()
        .filter(|rule| (rule.applies)(data))
        .map(|rule| rule.sentence.to_string())
        .collect()
}

/// Suggests CV keywords: language, capitalized topics, then README markers
pub fn suggest_keywords(data: &RepoData) -> Vec<String> {
    let mut keywords = Vec::new();

    if let Some(language) = data.repo.language.as_deref().filter(|l| !l.is_empty()) {
        keywords.push(language.to_string());
    }

    keywords.extend(data.repo.topics.iter().map(|t| capitalize(t)));

    for (needles, keyword) in README_KEYWORDS {
        if needles.iter().any(|n| data.readme.contains(n)) {
            keywords.push(keyword.to_string());
        }
    }

    dedup_and_cap(keywords, MAX_KEYWORDS)
}

/// Upper-cases the first character, leaves the rest alone
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A project entry in the shape the CV's JSON file uses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvProjectEntry {
    pub name: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub keywords: Vec<String>,
    pub start_date: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl CvProjectEntry {
    pub fn suggest(data: &RepoData, highlights: Vec<String>, keywords: Vec<String>) -> Self {
        CvProjectEntry {
            name: capitalize(&data.repo.name),
            description: data.repo.description.clone().unwrap_or_default(),
            highlights,
            keywords,
            // "2024-03-01T10:00:00Z" -> "2024-03"
            start_date: data.repo.created_at.chars().take(7).collect(),
            url: data.repo.html_url.clone(),
            kind: CV_PROJECT_TYPE.to_string(),
        }
    }
}

/// Everything suggested for one repo
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestions {
    pub highlights: Vec<String>,
    pub keywords: Vec<String>,
    pub cv_entry: CvProjectEntry,
}

impl Suggestions {
    pub fn from_repo_data(data: &RepoData) -> Self {
        let highlights = suggest_highlights(data);
        let keywords = suggest_keywords(data);
        let cv_entry = CvProjectEntry::suggest(data, highlights.clone(), keywords.clone());
        Suggestions {
            highlights,
            keywords,
            cv_entry,
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why named functions in HIGHLIGHT_RULES instead of closures?
//    - A const array needs a concrete type for every element
//    - Plain `fn` items coerce to the `fn(&RepoData) -> bool` pointer type;
//      closures each have their own anonymous type
//
// 2. Why #[serde(rename = "type")] on `kind`?
//    - `type` is a keyword in Rust, so the field can't be named that
//    - The CV file still expects the JSON key "type"
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{Commit, GitHubRepo};

    fn repo(topics: &[&str], language: Option<&str>) -> GitHubRepo {
        GitHubRepo {
            name: "ghosted".to_string(),
            description: Some("Track job applications from the terminal".to_string()),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            language: language.map(str::to_string),
            html_url: "https://github.com/celloopa/ghosted".to_string(),
            created_at: "2024-03-01T10:00:00Z".to_string(),
            updated_at: "2024-06-01T10:00:00Z".to_string(),
            pushed_at: "2024-06-01T10:00:00Z".to_string(),
        }
    }

    fn sample_data() -> RepoData {
        let readme = "# Ghosted\n\nA TUI and CLI for AI agent workflows. MIT licensed.\n\n## Features\n- Vim-style navigation\n- JSON output\n\nBuilt with **Bubble Tea and Lip Gloss**.\n";
        let commits = vec![
            Commit::new("1", "Compile resumes to PDF with smart names", "2024-06-01"),
            Commit::new("2", "Merge branch 'feature/fetch'", "2024-05-30"),
            Commit::new("3", "Fetch postings from Greenhouse", "2024-05-29"),
        ];
        RepoData::new(repo(&["go", "tui"], Some("Go")), readme.to_string(), commits)
    }

    #[test]
    fn test_highlights_follow_rule_order() {
        let highlights = suggest_highlights(&sample_data());
        assert_eq!(highlights.len(), 5);
        assert!(highlights[0].starts_with("Full-featured Terminal User Interface"));
        assert!(highlights[4].starts_with("Job board integration"));
    }

    #[test]
    fn test_no_highlights_for_plain_repo() {
        let data = RepoData::new(repo(&[], None), String::new(), Vec::new());
        assert!(suggest_highlights(&data).is_empty());
    }

    #[test]
    fn test_keywords() {
        let keywords = suggest_keywords(&sample_data());
        assert_eq!(
            keywords,
            vec![
                "Go",
                "Tui",
                "Bubble Tea",
                "TUI",
                "CLI",
                "AI Integration",
                "Open Source"
            ]
        );
    }

    #[test]
    fn test_keywords_are_deduplicated_and_capped() {
        let topics = ["cli", "go", "rust", "web", "api", "db", "auth", "ui", "x"];
        let data = RepoData::new(repo(&topics, Some("Go")), String::new(), Vec::new());
        let keywords = suggest_keywords(&data);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "Go");
        assert_eq!(keywords[1], "Cli");
        // "go" capitalizes to "Go", already present
        assert_eq!(keywords[2], "Rust");
    }

    #[test]
    fn test_cv_entry() {
        let data = sample_data();
        let suggestions = Suggestions::from_repo_data(&data);
        let entry = &suggestions.cv_entry;
        assert_eq!(entry.name, "Ghosted");
        assert_eq!(entry.start_date, "2024-03");
        assert_eq!(entry.kind, "application");

        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["startDate"], "2024-03");
        assert_eq!(json["type"], "application");
        assert_eq!(json["url"], "https://github.com/celloopa/ghosted");
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let first = sample_data();
        let second = sample_data();
        assert_eq!(first.features, second.features);
        assert_eq!(
            Suggestions::from_repo_data(&first),
            Suggestions::from_repo_data(&second)
        );
        assert_eq!(
            first.features,
            vec!["Vim-style navigation", "JSON output", "Bubble Tea and Lip Gloss"]
        );
        assert_eq!(
            first.recent_changes,
            vec![
                "Compile resumes to PDF with smart names",
                "Fetch postings from Greenhouse"
            ]
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("ghosted"), "Ghosted");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }
}
