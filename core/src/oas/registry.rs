#![deny(missing_docs)]

//! # Component Registry
//!
//! Stores body shapes under `components.schemas` and hands back `$ref` handles.
//! Names are not checked for collisions: registering a name twice keeps the
//! second schema.

use crate::oas::document::{Components, SchemaRef};
use crate::schema::SchemaNode;
use tracing::debug;

/// Write access to the `components` section of a document.
pub struct ComponentRegistry<'a> {
    components: &'a mut Components,
}

impl<'a> ComponentRegistry<'a> {
    /// Wraps the components of the document being built.
    pub fn new(components: &'a mut Components) -> Self {
        Self { components }
    }

    /// Stores `schema` as `name` and returns a reference to it.
    pub fn register(&mut self, name: &str, schema: SchemaNode) -> SchemaRef {
        if self
            .components
            .schemas
            .insert(name.to_string(), schema)
            .is_some()
        {
            debug!(component = name, "component schema overwritten");
        }
        SchemaRef::component(name)
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.components.schemas.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.components.schemas.is_empty()
    }
}
