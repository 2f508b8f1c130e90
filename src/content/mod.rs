// src/content/mod.rs
// =============================================================================
// The site's local content: schemas, lookup and validation.
//
// Submodules:
// - schema: typed entries for projects, visuals and blog posts
// - locate: finds the project file that references a repo URL
// - validate: checks every content file against its schema
// =============================================================================

mod locate;
mod schema;
mod validate;

pub use locate::{find_project_document, list_content_files};
pub use schema::{
    BlogPost, Collection, ContentEntry, GalleryLayout, MediaGallery, MediaItem, Project,
    SchemaError, SchemaErrors, Visual, VisualCategory,
};
pub use validate::{validate_content_dir, validate_file, FileOutcome, FileReport, FileReportJson};
