#![deny(missing_docs)]

//! # fs-api Core
//!
//! Turns a directory of route declarations into one OpenAPI document. Each
//! file yields one URL path (from its location) and one operation per
//! top-level key of its declared route type.
//!
//! ```no_run
//! use fsapi_core::{Parser, ParserConfig, RustSourceExtractor};
//! use std::path::Path;
//!
//! let parser = Parser::new(ParserConfig::default(), RustSourceExtractor)?;
//! let outcome = parser.parse(Path::new("api"))?;
//! println!("{}", serde_json::to_string_pretty(&outcome.document).unwrap());
//! # Ok::<(), fsapi_core::AppError>(())
//! ```

/// Shared error types.
pub mod error;

/// Run configuration.
pub mod config;

/// Delimiter template parsing.
pub mod template;

/// File path -> URL path mapping.
pub mod paths;

/// Component name derivation.
pub mod naming;

/// Generic schema tree.
pub mod schema;

/// OpenAPI document model and operation building.
pub mod oas;

/// Base document merging.
pub mod merge;

/// Pluggable schema extractors.
pub mod extract;

/// Directory scanning orchestration.
pub mod parser;

pub use config::{BaseConfig, ParserConfig, DEFAULT_EXPORT_NAME};
pub use error::{AppError, AppResult};
pub use extract::{DocumentExtractor, RustSourceExtractor, SchemaExtractor};
pub use merge::{deep_merge, load_base_document};
pub use naming::{class_name, content_type_label, id_name};
pub use oas::{ComponentRegistry, OpenApiDocument, OperationBuilder};
pub use parser::{FileFailure, ParseOutcome, Parser};
pub use paths::PathNormalizer;
pub use schema::{SchemaNode, SchemaType};
pub use template::{resolve_template, Delimiters};
