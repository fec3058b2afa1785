#![deny(missing_docs)]

//! # Operation Builder
//!
//! Converts the schema tree of one route file into OpenAPI operations.
//!
//! The expected tree shape, per method:
//!
//! ```text
//! <method>
//!   request
//!     search   { <query param>... }
//!     headers  { <header param>... }
//!     content  { <content type> { body? } ... }
//!   responses
//!     <status>
//!       headers { <header>... }
//!       content { <content type> { body? } ... }
//! ```
//!
//! Every level is optional. Bodies are registered as component schemas.

use crate::naming::{content_type_label, id_name};
use crate::oas::document::{
    Header, MediaType, Operation, Parameter, ParameterLocation, PathItem, RequestBody, Response,
};
use crate::oas::registry::ComponentRegistry;
use crate::schema::SchemaNode;
use indexmap::IndexMap;

const REQUEST_BODY_GROUP: &str = "ReqBody";
const RESPONSE_BODY_GROUP: &str = "ResBody";

/// Builds the operations of one route file.
pub struct OperationBuilder<'r, 'a> {
    registry: &'r mut ComponentRegistry<'a>,
    path: &'r str,
    skip_file_name: bool,
}

impl<'r, 'a> OperationBuilder<'r, 'a> {
    /// Creates a builder for the normalized URL path `path`.
    ///
    /// `skip_file_name` is applied to `path` again when naming components, so
    /// `/files` names its bodies `Get...` rather than `GetFiles...`.
    pub fn new(
        registry: &'r mut ComponentRegistry<'a>,
        path: &'r str,
        skip_file_name: bool,
    ) -> Self {
        Self {
            registry,
            path,
            skip_file_name,
        }
    }

    /// Builds one operation per top-level property of `root`, keyed by the
    /// lowercased method name.
    pub fn build_path_item(&mut self, root: &SchemaNode) -> PathItem {
        let mut item = PathItem::new();
        for (method, node) in root.properties_iter() {
            let method = method.to_lowercase();
            let operation = self.build_operation(&method, node);
            item.insert(method, operation);
        }
        item
    }

    /// Builds the operation for `method` from its schema node.
    pub fn build_operation(&mut self, method: &str, node: &SchemaNode) -> Operation {
        let mut operation = Operation::default();

        if let Some(request) = node.property("request") {
            if let Some(search) = request.property("search") {
                operation
                    .parameters
                    .extend(string_parameters(search, ParameterLocation::Query));
            }
            if let Some(headers) = request.property("headers") {
                operation
                    .parameters
                    .extend(string_parameters(headers, ParameterLocation::Header));
            }
            if let Some(contents) = request.property("content") {
                // Single slot: the last content type replaces the earlier ones.
                for (content_type, content) in contents.properties_iter() {
                    let media = self.media_type(method, content_type, content, REQUEST_BODY_GROUP);
                    let mut slot = IndexMap::new();
                    slot.insert(content_type.clone(), media);
                    operation.request_body = Some(RequestBody { content: slot });
                }
            }
        }

        if let Some(responses) = node.property("responses") {
            for (status, status_node) in responses.properties_iter() {
                let response = self.build_response(method, status_node);
                operation.responses.insert(status.clone(), response);
            }
        }

        operation
    }

    fn build_response(&mut self, method: &str, node: &SchemaNode) -> Response {
        let mut response = Response::default();

        if let Some(headers) = node.property("headers") {
            for (name, _) in headers.properties_iter() {
                response.headers.insert(
                    name.clone(),
                    Header {
                        schema: SchemaNode::of_type("string"),
                        required: headers.requires(name),
                    },
                );
            }
        }

        if let Some(contents) = node.property("content") {
            for (content_type, content) in contents.properties_iter() {
                let media = self.media_type(method, content_type, content, RESPONSE_BODY_GROUP);
                response.content.insert(content_type.clone(), media);
            }
        }

        response
    }

    fn media_type(
        &mut self,
        method: &str,
        content_type: &str,
        content: &SchemaNode,
        group: &str,
    ) -> MediaType {
        let schema = content.property("body").map(|body| {
            let name = id_name(
                method,
                self.path,
                self.skip_file_name,
                &[content_type_label(content_type), group],
            );
            self.registry.register(&name, body.clone())
        });
        MediaType { schema }
    }
}

/// One string-typed parameter per property of `node`.
fn string_parameters(
    node: &SchemaNode,
    location: ParameterLocation,
) -> impl Iterator<Item = Parameter> + '_ {
    node.properties_iter().map(move |(name, _)| Parameter {
        name: name.clone(),
        location,
        required: node.requires(name),
        schema: SchemaNode::of_type("string"),
    })
}
