#![deny(missing_docs)]

//! # OpenAPI Generation Module
//!
//! - **document**: Output model definitions.
//! - **registry**: Component schema storage.
//! - **operations**: Schema tree -> operation translation.

pub mod document;
pub mod operations;
pub mod registry;

pub use document::{
    Components, Header, Info, MediaType, OpenApiDocument, Operation, Parameter,
    ParameterLocation, PathItem, RequestBody, Response, SchemaRef,
};
pub use operations::OperationBuilder;
pub use registry::ComponentRegistry;
