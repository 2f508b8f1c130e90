// src/extract/changes.rs
// =============================================================================
// Turns a commit list into a short "recent changes" list.
//
// Only the newest 10 commits are looked at. For each one we keep the first
// line of the message, unless it is a merge commit or too short to say
// anything ("fix", "wip", "typo").
// =============================================================================

use crate::github::Commit;

/// How many commits (newest first) are considered
pub const MAX_COMMITS_CONSIDERED: usize = 10;

/// Summary lines shorter than this are treated as noise
const MIN_SUMMARY_CHARS: usize = 10;

pub fn extract_recent_changes(commits: &[Commit]) -> Vec<String> {
    commits
        .iter()
        .take(MAX_COMMITS_CONSIDERED)
        .map(Commit::summary_line)
        .filter(|line| !line.starts_with("Merge"))
        .filter(|line| line.trim().chars().count() >= MIN_SUMMARY_CHARS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commits(messages: &[&str]) -> Vec<Commit> {
        messages
            .iter()
            .enumerate()
            .map(|(i, msg)| Commit::new(&format!("sha{}", i), msg, "2024-05-01T00:00:00Z"))
            .collect()
    }

    #[test]
    fn test_filters_merge_and_short_commits() {
        let input = commits(&[
            "Merge branch 'x'",
            "fix",
            "Improve caching behavior",
            "wip",
            "typo",
            "Merge pull request #4 from a/b",
            "lint",
            "bump",
            "ok",
            "docs",
        ]);
        assert_eq!(extract_recent_changes(&input), vec!["Improve caching behavior"]);
    }

    #[test]
    fn test_only_first_ten_commits_are_used() {
        let mut messages = vec!["Short"; 10];
        messages.push("This one is the eleventh commit");
        assert!(extract_recent_changes(&commits(&messages)).is_empty());
    }

    #[test]
    fn test_keeps_first_line_and_order_without_dedup() {
        let input = commits(&[
            "Add PDF compilation\n\nDetails follow",
            "Fetch postings from Lever",
            "Fetch postings from Lever",
        ]);
        assert_eq!(
            extract_recent_changes(&input),
            vec![
                "Add PDF compilation",
                "Fetch postings from Lever",
                "Fetch postings from Lever"
            ]
        );
    }

    #[test]
    fn test_length_is_measured_after_trimming() {
        let input = commits(&["   short   ", "exactly10c"]);
        assert_eq!(extract_recent_changes(&input), vec!["exactly10c"]);
    }

    #[test]
    fn test_empty_commit_list() {
        assert!(extract_recent_changes(&[]).is_empty());
    }
}
