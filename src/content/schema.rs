// src/content/schema.rs
// =============================================================================
// Schemas for the site's content collections: projects, visuals, blog posts.
//
// Content files carry their metadata as front matter, which our splitter
// returns as plain strings and string lists. Building a typed entry means
// coercing those strings:
// - booleans must be "true" or "false"
// - orders must be integers
// - dates must be YYYY-MM-DD (or a full RFC 3339 timestamp)
// - url/github must be absolute URLs
// - enum fields must be one of the listed values
// Values wrapped in matching quotes are unquoted first.
//
// Every problem in a file is collected, not just the first one, so a single
// `validate` run shows everything that needs fixing.
//
// Media galleries are nested structures the front matter dialect cannot
// express; they are declared here for completeness and left as None.
//
// Rust concepts:
// - FromStr: parsing a string into an enum with `.parse()`
// - thiserror: one error enum with a message per variant
// - Lifetimes: FieldReader borrows the front matter instead of copying it
// =============================================================================

use crate::frontmatter::{FieldValue, FrontMatter};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One problem with one field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("missing required field `{0}`")]
    Missing(String),

    #[error("field `{field}` should be a {expected}")]
    WrongShape {
        field: String,
        expected: &'static str,
    },

    #[error("field `{field}` has invalid value `{value}`: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// All problems found in one content file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_errors(.0))]
pub struct SchemaErrors(pub Vec<SchemaError>);

fn join_errors(errors: &[SchemaError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryLayout {
    Full,
    Two,
    Three,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaGallery {
    pub layout: GalleryLayout,
    pub items: Vec<MediaItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualCategory {
    Packaging,
    Graphic,
    Motion,
    Video,
    Photography,
}

impl VisualCategory {
    const ALL: [(&'static str, VisualCategory); 5] = [
        ("packaging", VisualCategory::Packaging),
        ("graphic", VisualCategory::Graphic),
        ("motion", VisualCategory::Motion),
        ("video", VisualCategory::Video),
        ("photography", VisualCategory::Photography),
    ];
}

impl FromStr for VisualCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VisualCategory::ALL
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, category)| *category)
            .ok_or_else(|| {
                let names: Vec<&str> = VisualCategory::ALL.iter().map(|(n, _)| *n).collect();
                format!("expected one of {}", names.join(", "))
            })
    }
}

/// An entry of the `projects` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub url: Option<String>,
    pub github: Option<String>,
    pub tech_stack: Vec<String>,
    pub role: String,
    pub highlights: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i64,
    pub media: Option<Vec<MediaGallery>>,
}

/// An entry of the `visuals` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visual {
    pub title: String,
    pub description: String,
    pub category: VisualCategory,
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i64,
    pub media: Option<Vec<MediaGallery>>,
}

/// An entry of the `blog` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub description: String,
    pub publish_date: NaiveDate,
    pub updated_date: Option<NaiveDate>,
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub draft: bool,
}

impl Project {
    pub fn from_front_matter(fm: &FrontMatter) -> Result<Self, SchemaErrors> {
        let mut r = FieldReader::new(fm);
        let project = Project {
            title: r.required_string("title"),
            description: r.required_string("description"),
            image: r.optional_string("image"),
            url: r.optional_url("url"),
            github: r.optional_url("github"),
            tech_stack: r.required_list("techStack"),
            role: r.required_string("role"),
            highlights: r.required_list("highlights"),
            featured: r.bool_or("featured", false),
            order: r.integer_or("order", 0),
            media: None,
        };
        r.finish(project)
    }
}

impl Visual {
    pub fn from_front_matter(fm: &FrontMatter) -> Result<Self, SchemaErrors> {
        let mut r = FieldReader::new(fm);
        let title = r.required_string("title");
        let description = r.required_string("description");
        let category = r.required_parsed::<VisualCategory>("category");
        let image = r.optional_string("image");
        let tags = r.optional_list("tags");
        let featured = r.bool_or("featured", false);
        let order = r.integer_or("order", 0);

        let Some(category) = category else {
            return Err(r.into_errors());
        };
        r.finish(Visual {
            title,
            description,
            category,
            image,
            tags,
            featured,
            order,
            media: None,
        })
    }
}

impl BlogPost {
    pub fn from_front_matter(fm: &FrontMatter) -> Result<Self, SchemaErrors> {
        let mut r = FieldReader::new(fm);
        let title = r.required_string("title");
        let description = r.required_string("description");
        let publish_date = r.required_date("publishDate");
        let updated_date = r.optional_date("updatedDate");
        let image = r.optional_string("image");
        let tags = r.optional_list("tags");
        let draft = r.bool_or("draft", false);

        let Some(publish_date) = publish_date else {
            return Err(r.into_errors());
        };
        r.finish(BlogPost {
            title,
            description,
            publish_date,
            updated_date,
            image,
            tags,
            draft,
        })
    }
}

/// Which collection a content file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Projects,
    Visuals,
    Blog,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Projects, Collection::Visuals, Collection::Blog];

    /// Directory name under the content root
    pub fn dir_name(self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Visuals => "visuals",
            Collection::Blog => "blog",
        }
    }

    pub fn parse_entry(self, fm: &FrontMatter) -> Result<ContentEntry, SchemaErrors> {
        match self {
            Collection::Projects => Project::from_front_matter(fm).map(ContentEntry::Project),
            Collection::Visuals => Visual::from_front_matter(fm).map(ContentEntry::Visual),
            Collection::Blog => BlogPost::from_front_matter(fm).map(ContentEntry::BlogPost),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContentEntry {
    Project(Project),
    Visual(Visual),
    BlogPost(BlogPost),
}

impl ContentEntry {
    pub fn title(&self) -> &str {
        match self {
            ContentEntry::Project(p) => &p.title,
            ContentEntry::Visual(v) => &v.title,
            ContentEntry::BlogPost(b) => &b.title,
        }
    }
}

// Reads typed values out of front matter, collecting errors as it goes.
// Accessors return a placeholder on error so construction can continue;
// `finish` discards the value if anything went wrong.
struct FieldReader<'a> {
    fm: &'a FrontMatter,
    errors: Vec<SchemaError>,
}

impl<'a> FieldReader<'a> {
    fn new(fm: &'a FrontMatter) -> Self {
        FieldReader {
            fm,
            errors: Vec::new(),
        }
    }

    fn scalar(&mut self, field: &str) -> Option<String> {
        match self.fm.get(field)? {
            FieldValue::Scalar(s) => Some(unquote(s).to_string()),
            FieldValue::List(_) => {
                self.errors.push(SchemaError::WrongShape {
                    field: field.to_string(),
                    expected: "single value",
                });
                None
            }
        }
    }

    fn list(&mut self, field: &str) -> Option<Vec<String>> {
        match self.fm.get(field)? {
            FieldValue::List(items) => Some(items.iter().map(|i| unquote(i).to_string()).collect()),
            FieldValue::Scalar(_) => {
                self.errors.push(SchemaError::WrongShape {
                    field: field.to_string(),
                    expected: "list",
                });
                None
            }
        }
    }

    fn invalid(&mut self, field: &str, value: &str, reason: impl Into<String>) {
        self.errors.push(SchemaError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        });
    }

    fn required_string(&mut self, field: &str) -> String {
        if self.fm.get(field).is_none() {
            self.errors.push(SchemaError::Missing(field.to_string()));
        }
        self.scalar(field).unwrap_or_default()
    }

    fn optional_string(&mut self, field: &str) -> Option<String> {
        self.scalar(field)
    }

    fn optional_url(&mut self, field: &str) -> Option<String> {
        let value = self.scalar(field)?;
        match url::Url::parse(&value) {
            Ok(_) => Some(value),
            Err(e) => {
                self.invalid(field, &value, e.to_string());
                None
            }
        }
    }

    fn required_list(&mut self, field: &str) -> Vec<String> {
        if self.fm.get(field).is_none() {
            self.errors.push(SchemaError::Missing(field.to_string()));
        }
        self.list(field).unwrap_or_default()
    }

    fn optional_list(&mut self, field: &str) -> Option<Vec<String>> {
        self.list(field)
    }

    fn bool_or(&mut self, field: &str, default: bool) -> bool {
        let Some(value) = self.scalar(field) else {
            return default;
        };
        match value.as_str() {
            "true" => true,
            "false" => false,
            _ => {
                self.invalid(field, &value, "expected true or false");
                default
            }
        }
    }

    fn integer_or(&mut self, field: &str, default: i64) -> i64 {
        let Some(value) = self.scalar(field) else {
            return default;
        };
        match value.parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                self.invalid(field, &value, "expected an integer");
                default
            }
        }
    }

    fn required_parsed<T: FromStr<Err = String>>(&mut self, field: &str) -> Option<T> {
        if self.fm.get(field).is_none() {
            self.errors.push(SchemaError::Missing(field.to_string()));
            return None;
        }
        let value = self.scalar(field)?;
        match value.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(reason) => {
                self.invalid(field, &value, reason);
                None
            }
        }
    }

    fn optional_date(&mut self, field: &str) -> Option<NaiveDate> {
        let value = self.scalar(field)?;
        match parse_date(&value) {
            Some(date) => Some(date),
            None => {
                self.invalid(field, &value, "expected a YYYY-MM-DD date");
                None
            }
        }
    }

    fn required_date(&mut self, field: &str) -> Option<NaiveDate> {
        if self.fm.get(field).is_none() {
            self.errors.push(SchemaError::Missing(field.to_string()));
            return None;
        }
        self.optional_date(field)
    }

    fn into_errors(self) -> SchemaErrors {
        SchemaErrors(self.errors)
    }

    fn finish<T>(self, value: T) -> Result<T, SchemaErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.into_errors())
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

fn unquote(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why collect errors instead of returning at the first one?
//    - `?` stops at the first failure, which is right for I/O
//    - For validation the user wants the full list in one go
//    - FieldReader pushes each problem into a Vec and `finish` checks
//      it once at the end
//
// 2. What does FieldReader<'a> mean?
//    - The struct holds a reference (&'a FrontMatter)
//    - 'a tells the compiler the reader can't outlive the front matter
//
// 3. Why implement FromStr for VisualCategory?
//    - It plugs into the standard `"photo".parse::<VisualCategory>()`
//    - Its Err is a plain String listing the allowed values
// -----------------------------------------------------------------------------
