// src/frontmatter/mod.rs
// =============================================================================
// Splits a content file into its front matter fields and its body.
//
// Content files look like this:
//
//   ---
//   title: Ghosted
//   techStack:
//     - Go
//     - Bubble Tea
//   ---
//   Body text...
//
// This is deliberately NOT a YAML parser. It understands exactly three line
// shapes (see `LineShape`) and silently ignores everything else. It never
// fails: a file without a proper header comes back as "no fields, whole text
// is the body".
// =============================================================================

mod parser;

pub use parser::{split_structured, FieldValue, FrontMatter};
