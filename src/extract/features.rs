// src/extract/features.rs
// =============================================================================
// This module guesses a project's feature list from its README.
//
// It is a heuristic, not a markdown parser. Three passes:
// 1. Find sections under headings like "## Features" or "## Capabilities",
//    plus "**Title**\ndescription" blocks, and take their bullet lines.
// 2. Take every bold run (**...**) that looks like a sentence: more than 10
//    and fewer than 100 characters, and no colon (colons mean "Label: value").
// 3. Merge, drop exact duplicates (first one wins), keep at most 20.
//
// It never fails: text that matches nothing just yields an empty list.
//
// Rust concepts:
// - LazyLock: compile each regex once, on first use
// - HashSet: remember what we've already kept while preserving order in a Vec
// =============================================================================

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Upper bound on how many phrases we return
pub const MAX_FEATURES: usize = 20;

// Headings that introduce a feature section. Each pattern matches the
// heading line including its newline; the section body is found separately
// because the regex crate has no lookahead.
static SECTION_HEADINGS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)## Features?\n",
        r"(?i)## Core Features?\n",
        r"(?i)## Key Features?\n",
        r"(?i)## Capabilities\n",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("heading pattern is valid"))
    .collect()
});

// "**Title**\nOne line of description"
static BOLD_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*\n([^*\n]+)").expect("bold block pattern is valid"));

static BOLD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold run pattern is valid"));

// Extracts feature phrases from README text
//
// Parameters:
//   readme: the raw README markdown (may be empty)
//
// Returns: at most MAX_FEATURES phrases, in first-seen order, no duplicates
//
// Example input:
//   "## Features\n- Fast search\n- Offline mode\n"
//
// Example output:
//   vec!["Fast search", "Offline mode"]
pub fn extract_features(readme: &str) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();

    for heading in SECTION_HEADINGS.iter() {
        for section in find_sections(readme, heading) {
            candidates.extend(bullet_items(section));
        }
    }

    for block in BOLD_BLOCK.find_iter(readme) {
        candidates.extend(bullet_items(block.as_str()));
    }

    for caps in BOLD_RUN.captures_iter(readme) {
        let inner = &caps[1];
        if is_feature_sentence(inner) {
            candidates.push(inner.to_string());
        }
    }

    dedup_and_cap(candidates, MAX_FEATURES)
}

// Finds every section introduced by `heading`
//
// A section body starts right after the heading line and stops at the next
// "\n##" or at a final newline at the very end of the text, whichever comes
// first. A heading with neither after it has no section. Searching resumes
// where the previous body ended, so sections never overlap.
fn find_sections<'a>(text: &'a str, heading: &Regex) -> Vec<&'a str> {
    let mut sections = Vec::new();
    let mut pos = 0;

    while let Some(m) = heading.find_at(text, pos) {
        let body_start = m.end();
        let Some(body_end) = section_end(text, body_start) else {
            break;
        };
        sections.push(&text[body_start..body_end]);
        pos = body_end;
    }

    sections
}

fn section_end(text: &str, from: usize) -> Option<usize> {
    if let Some(offset) = text[from..].find("\n##") {
        return Some(from + offset);
    }

    // A trailing newline closes the last section of the file
    if text.ends_with('\n') && text.len() > from {
        return Some(text.len() - 1);
    }

    None
}

// Returns the text of every "- item" / "* item" line in `section`
//
// Leading indentation is allowed; the marker must be followed by whitespace
// so "**bold**" lines are not mistaken for bullets.
fn bullet_items(section: &str) -> Vec<String> {
    section
        .split('\n')
        .filter_map(|line| {
            let line = line.trim_start();
            let rest = line.strip_prefix('-').or_else(|| line.strip_prefix('*'))?;
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            let item = rest.trim();
            (!item.is_empty()).then(|| item.to_string())
        })
        .collect()
}

fn is_feature_sentence(text: &str) -> bool {
    let len = text.trim().chars().count();
    len > 10 && len < 100 && !text.contains(':')
}

/// Drops exact duplicates (first occurrence wins) and keeps at most `max`
pub(crate) fn dedup_and_cap(items: Vec<String>, max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .take(max)
        .collect()
}
