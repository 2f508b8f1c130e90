// src/extract/mod.rs
// =============================================================================
// Heuristics that pull human-reviewable facts out of fetched text.
//
// Submodules:
// - features: guesses feature bullet points from README markdown
// - changes: summarizes recent commit messages
//
// Both are pure functions: text in, strings out, no errors.
// =============================================================================

mod changes;
mod features;

pub use changes::{extract_recent_changes, MAX_COMMITS_CONSIDERED};
pub use features::{extract_features, MAX_FEATURES};

pub(crate) use features::dedup_and_cap;
