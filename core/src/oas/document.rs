#![deny(missing_docs)]

//! # OpenAPI Document Model
//!
//! The subset of OpenAPI 3.0 the generator emits. Maps are ordered so the
//! output follows the scan order and the declaration order of each schema.
//! Optional collections are skipped when empty, never emitted as `{}`/`[]`.

use crate::schema::SchemaNode;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// OpenAPI version written to every generated document.
pub const OPENAPI_VERSION: &str = "3.0.3";

/// Version given to the generated `info` block.
pub const DEFAULT_INFO_VERSION: &str = "0.0.1";

/// Description given to the generated `info` block.
pub const DEFAULT_INFO_DESCRIPTION: &str = "Auto generated by fs-api";

/// Root document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version.
    pub openapi: String,
    /// API metadata.
    pub info: Info,
    /// URL path template -> path item.
    pub paths: IndexMap<String, PathItem>,
    /// Reusable components.
    pub components: Components,
}

impl OpenApiDocument {
    /// Creates an empty document titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info {
                title: title.into(),
                version: DEFAULT_INFO_VERSION.to_string(),
                description: Some(DEFAULT_INFO_DESCRIPTION.to_string()),
            },
            paths: IndexMap::new(),
            components: Components::default(),
        }
    }
}

/// API metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title.
    pub title: String,
    /// Document version.
    pub version: String,
    /// API description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Lowercase HTTP method -> operation.
pub type PathItem = IndexMap<String, Operation>;

/// Reusable components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Named schema fragments.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, SchemaNode>,
}

/// A reference to a component schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRef {
    /// e.g. `#/components/schemas/GetRouteJSONResBody`
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl SchemaRef {
    /// Reference to the component schema called `name`.
    pub fn component(name: &str) -> Self {
        Self {
            reference: format!("#/components/schemas/{}", name),
        }
    }
}

/// One HTTP method handler under one path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Query and header parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// The request body, if any content type was declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Status code -> response.
    pub responses: IndexMap<String, Response>,
}

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// `?name=value`
    Query,
    /// Request header.
    Header,
}

/// A request parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Location.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Whether the parent schema lists this parameter as required.
    pub required: bool,
    /// Always `{type: string}`.
    pub schema: SchemaNode,
}

/// A request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Content type -> media type.
    pub content: IndexMap<String, MediaType>,
}

/// Content description for one content type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// Component reference to the body shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}

/// A response for one status code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Always empty; required by OpenAPI.
    pub description: String,
    /// Response headers.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, Header>,
    /// Content type -> media type.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
}

/// A response header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Always `{type: string}`.
    pub schema: SchemaNode,
    /// Whether the parent schema lists this header as required.
    pub required: bool,
}
