#![deny(missing_docs)]

//! # Schema Extraction
//!
//! Turning a declared route type into a generic schema tree is delegated to a
//! [`SchemaExtractor`]. The orchestrator never looks at how the tree is made.
//!
//! - **rust_source**: reads Rust struct declarations.
//! - **document**: reads schema trees already produced by another tool.

pub mod attributes;
pub mod document;
pub mod rust_source;

use crate::error::AppResult;
use crate::schema::SchemaNode;
use std::path::Path;

pub use document::DocumentExtractor;
pub use rust_source::RustSourceExtractor;

/// Produces the schema tree of the type named `export_name` declared in `file`.
pub trait SchemaExtractor {
    /// Extracts the tree. Failures should be reported as `AppError::Extraction`.
    fn extract(&self, file: &Path, export_name: &str) -> AppResult<SchemaNode>;

    /// Scan globs used when the configuration does not name any.
    fn default_patterns(&self) -> &'static [&'static str];
}

impl<T: SchemaExtractor + ?Sized> SchemaExtractor for Box<T> {
    fn extract(&self, file: &Path, export_name: &str) -> AppResult<SchemaNode> {
        (**self).extract(file, export_name)
    }

    fn default_patterns(&self) -> &'static [&'static str] {
        (**self).default_patterns()
    }
}
