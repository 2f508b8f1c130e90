// src/frontmatter/parser.rs
// =============================================================================
// The front matter splitter and its line-by-line state machine.
//
// Header lines are classified into one of three shapes, tried in order:
//   a. "name:"          -> opens a list field
//   b. "  - item"       -> appends to the open list field
//   c. "name: value"    -> scalar field
// Anything else (blank lines, comments, nested maps) is dropped.
//
// The parser is always in one of two states: Idle, or Accumulating items
// for a list field. Opening a field or assigning a scalar first finalizes
// whatever list was open.
// =============================================================================

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

const OPENING_DELIMITER: &str = "---\n";
const CLOSING_DELIMITER: &str = "\n---\n";

static FIELD_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+):\s*$").expect("field open pattern is valid"));

static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+-\s+(.+)$").expect("list item pattern is valid"));

static FIELD_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+):\s*(.+)$").expect("field value pattern is valid"));

/// A front matter value: either one line of text or a list of lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            FieldValue::Scalar(_) => None,
        }
    }
}

/// Result of splitting a content file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    pub fields: BTreeMap<String, FieldValue>,
    pub body: String,
}

impl FrontMatter {
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn scalar(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_scalar)
    }

    pub fn list(&self, field: &str) -> Option<&[String]> {
        self.get(field).and_then(FieldValue::as_list)
    }

    /// True when at least one field was recognized
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

// Splits `text` into front matter fields and body
//
// The text must start with a "---" line, and the header must be closed by
// a later "---" line followed by a newline. Otherwise the whole text is the
// body and there are no fields.
pub fn split_structured(text: &str) -> FrontMatter {
    let Some((header, body)) = split_delimiters(text) else {
        return FrontMatter {
            fields: BTreeMap::new(),
            body: text.to_string(),
        };
    };

    let mut parser = HeaderParser::default();
    for line in header.split('\n') {
        parser.feed(line);
    }

    FrontMatter {
        fields: parser.finish(),
        body: body.to_string(),
    }
}

fn split_delimiters(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix(OPENING_DELIMITER)?;
    let close = rest.find(CLOSING_DELIMITER)?;
    Some((&rest[..close], &rest[close + CLOSING_DELIMITER.len()..]))
}

#[derive(Debug, PartialEq, Eq)]
enum LineShape<'a> {
    FieldOpen(&'a str),
    ListItem(&'a str),
    FieldValue(&'a str, &'a str),
    Other,
}

impl<'a> LineShape<'a> {
    fn classify(line: &'a str) -> Self {
        if let Some(caps) = FIELD_OPEN.captures(line) {
            if let Some(name) = caps.get(1) {
                return LineShape::FieldOpen(name.as_str());
            }
        }
        if let Some(caps) = LIST_ITEM.captures(line) {
            if let Some(item) = caps.get(1) {
                return LineShape::ListItem(item.as_str());
            }
        }
        if let Some(caps) = FIELD_VALUE.captures(line) {
            if let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) {
                return LineShape::FieldValue(name.as_str(), value.as_str());
            }
        }
        LineShape::Other
    }
}

#[derive(Debug, Default)]
enum ParseState {
    #[default]
    Idle,
    Accumulating { field: String, items: Vec<String> },
}

#[derive(Debug, Default)]
struct HeaderParser {
    state: ParseState,
    fields: BTreeMap<String, FieldValue>,
}

impl HeaderParser {
    fn feed(&mut self, line: &str) {
        match LineShape::classify(line) {
            LineShape::FieldOpen(name) => {
                self.close_list();
                self.state = ParseState::Accumulating {
                    field: name.to_string(),
                    items: Vec::new(),
                };
            }
            LineShape::ListItem(item) => {
                // Items with no open list are dropped
                if let ParseState::Accumulating { items, .. } = &mut self.state {
                    items.push(item.to_string());
                }
            }
            LineShape::FieldValue(name, value) => {
                self.close_list();
                self.fields
                    .insert(name.to_string(), FieldValue::Scalar(value.to_string()));
            }
            LineShape::Other => {}
        }
    }

    /// Assigns the open list (if any) to its field and returns to Idle
    fn close_list(&mut self) {
        if let ParseState::Accumulating { field, items } = std::mem::take(&mut self.state) {
            self.fields.insert(field, FieldValue::List(items));
        }
    }

    fn finish(mut self) -> BTreeMap<String, FieldValue> {
        self.close_list();
        self.fields
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does std::mem::take do?
//    - Moves the value out of a &mut place and leaves Default::default()
//    - Here it swaps the state for Idle while we own the old state
//    - That lets us move `field` and `items` into the map without cloning
//
// 2. What is `let ... else`?
//    - "Bind this pattern, or run the else block (which must return/break)"
//    - Keeps the happy path unindented
//
// 3. Why LazyLock for the regexes?
//    - Compiling a regex is expensive; LazyLock compiles each one once,
//      the first time it is used, and shares it afterwards
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> FieldValue {
        FieldValue::List(items.iter().map(|s| s.to_string()).collect())
    }

    fn scalar(s: &str) -> FieldValue {
        FieldValue::Scalar(s.to_string())
    }

    #[test]
    fn test_scalar_and_list_fields() {
        let fm = split_structured("---\nname: Alpha\ntags:\n  - x\n  - y\n---\nBody text");
        assert_eq!(fm.get("name"), Some(&scalar("Alpha")));
        assert_eq!(fm.get("tags"), Some(&list(&["x", "y"])));
        assert_eq!(fm.fields.len(), 2);
        assert_eq!(fm.body, "Body text");
    }

    #[test]
    fn test_missing_opening_delimiter_returns_input() {
        let text = "name: Alpha\n---\nBody";
        let fm = split_structured(text);
        assert!(!fm.has_fields());
        assert_eq!(fm.body, text);
    }

    #[test]
    fn test_missing_closing_delimiter_returns_input() {
        let text = "---\nname: Alpha\nno closing line";
        let fm = split_structured(text);
        assert!(fm.fields.is_empty());
        assert_eq!(fm.body, text);

        // The closing line must end with a newline
        let text = "---\nname: Alpha\n---";
        assert_eq!(split_structured(text).body, text);
    }

    #[test]
    fn test_empty_body_is_allowed() {
        let fm = split_structured("---\ntitle: Empty\n---\n");
        assert_eq!(fm.scalar("title"), Some("Empty"));
        assert_eq!(fm.body, "");
    }

    #[test]
    fn test_body_is_verbatim_after_first_closing_line() {
        let fm = split_structured("---\na: 1\n---\nline one\n---\nline two\n");
        assert_eq!(fm.scalar("a"), Some("1"));
        assert_eq!(fm.body, "line one\n---\nline two\n");
    }

    #[test]
    fn test_new_field_finalizes_open_list() {
        let fm = split_structured("---\nfirst:\n  - a\nsecond:\n  - b\n  - c\n---\n");
        assert_eq!(fm.list("first"), Some(&["a".to_string()][..]));
        assert_eq!(fm.get("second"), Some(&list(&["b", "c"])));
    }

    #[test]
    fn test_scalar_overwrites_list_with_same_name() {
        let fm = split_structured("---\ntags:\n  - x\ntags: plain\n---\n");
        assert_eq!(fm.get("tags"), Some(&scalar("plain")));
    }

    #[test]
    fn test_list_item_without_open_field_is_dropped() {
        let fm = split_structured("---\n  - orphan\ntitle: T\n  - also orphan\n---\n");
        assert_eq!(fm.fields.len(), 1);
        assert_eq!(fm.scalar("title"), Some("T"));
    }

    #[test]
    fn test_field_open_without_items_is_empty_list() {
        let fm = split_structured("---\nhighlights:\ntitle: T\n---\n");
        assert_eq!(fm.get("highlights"), Some(&list(&[])));
    }

    #[test]
    fn test_unrecognized_lines_are_ignored() {
        let text = "---\n# a comment\n\nmedia:\n  - layout: full\n    items: []\nnot a field line\ntitle: Keep me\n---\nBody";
        let fm = split_structured(text);
        assert_eq!(fm.scalar("title"), Some("Keep me"));
        assert_eq!(fm.get("media"), Some(&list(&["layout: full"])));
        assert_eq!(fm.fields.len(), 2);
    }

    #[test]
    fn test_value_keeps_quotes_and_colons() {
        let fm = split_structured("---\nurl: https://example.com\ntitle: \"Quoted\"\n---\n");
        assert_eq!(fm.scalar("url"), Some("https://example.com"));
        assert_eq!(fm.scalar("title"), Some("\"Quoted\""));
    }

    #[test]
    fn test_classify_line_shapes() {
        assert_eq!(LineShape::classify("tags:"), LineShape::FieldOpen("tags"));
        assert_eq!(LineShape::classify("tags:   "), LineShape::FieldOpen("tags"));
        assert_eq!(LineShape::classify("  - x"), LineShape::ListItem("x"));
        assert_eq!(
            LineShape::classify("order: 3"),
            LineShape::FieldValue("order", "3")
        );
        assert_eq!(LineShape::classify("- x"), LineShape::Other);
        assert_eq!(LineShape::classify("bad key: v"), LineShape::Other);
    }

    #[test]
    fn test_splitting_is_deterministic() {
        let text = "---\nname: Alpha\ntags:\n  - x\n---\nBody";
        assert_eq!(split_structured(text), split_structured(text));
    }
}
