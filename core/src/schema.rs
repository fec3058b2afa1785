#![deny(missing_docs)]

//! # Generic Schema Tree
//!
//! The shape description an extractor produces for a declared route type.
//! It is a JSON Schema subset: `required` lives on the parent object and lists
//! the names of its mandatory properties.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The `type` keyword: a single type name or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// e.g. `"string"`
    Single(String),
    /// e.g. `["string", "null"]`
    Multiple(Vec<String>),
}

/// One node of a generic schema tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// Reference to another schema.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// JSON type(s) of the value.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    /// Human readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Child properties, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaNode>>,
    /// Element schema of an array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
    /// Names of the mandatory properties of this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Allowed values.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<serde_json::Value>>,
    /// Any other keyword (`format`, `additionalProperties`, `anyOf`, ...).
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl SchemaNode {
    /// A node with only its `type` set.
    pub fn of_type(name: &str) -> Self {
        Self {
            schema_type: Some(SchemaType::Single(name.to_string())),
            ..Default::default()
        }
    }

    /// Looks up a direct child property.
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties.as_ref()?.get(name)
    }

    /// Follows a chain of property names.
    ///
    /// e.g. `node.descend(&["request", "search"])`
    pub fn descend(&self, names: &[&str]) -> Option<&SchemaNode> {
        names
            .iter()
            .try_fold(self, |node, name| node.property(name))
    }

    /// Iterates over the child properties in declaration order.
    pub fn properties_iter(&self) -> impl Iterator<Item = (&String, &SchemaNode)> {
        self.properties.iter().flat_map(|p| p.iter())
    }

    /// Whether this node lists `name` as a required property.
    pub fn requires(&self, name: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|r| r.iter().any(|n| n == name))
    }
}
