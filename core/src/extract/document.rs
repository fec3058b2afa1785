//! # Schema Document Extractor
//!
//! Reads schema trees that another tool has already written to disk, as JSON
//! or YAML. The route type is looked up under `definitions` or `$defs`; a
//! document with neither is taken to be the route type itself.
//!
//! Local references (`#/definitions/X`, `#/$defs/X`) are inlined so component
//! schemas never point at definitions missing from the output document.

use crate::error::{AppError, AppResult};
use crate::extract::SchemaExtractor;
use crate::schema::SchemaNode;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const DEFINITION_KEYS: [&str; 2] = ["definitions", "$defs"];

/// Extracts schema trees from `.json`, `.yaml` and `.yml` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentExtractor;

impl SchemaExtractor for DocumentExtractor {
    fn extract(&self, file: &Path, export_name: &str) -> AppResult<SchemaNode> {
        let content =
            fs::read_to_string(file).map_err(|e| AppError::extraction(file, e.to_string()))?;

        let is_yaml = file
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == "yaml" || e == "yml");

        let document: Value = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| AppError::extraction(file, e.to_string()))?
        } else {
            serde_json::from_str(&content)
                .map_err(|e| AppError::extraction(file, e.to_string()))?
        };

        select_schema(&document, export_name).map_err(|e| AppError::extraction(file, e))
    }

    fn default_patterns(&self) -> &'static [&'static str] {
        &["**/*.json", "**/*.yaml", "**/*.yml"]
    }
}

/// Picks the definition named `name` out of `document` and inlines local refs.
pub fn select_schema(document: &Value, name: &str) -> Result<SchemaNode, String> {
    let definitions = collect_definitions(document);

    let has_definitions = DEFINITION_KEYS.iter().any(|k| document.get(k).is_some());
    let root = if has_definitions {
        definitions
            .get(name)
            .ok_or_else(|| format!("Definition '{}' not found", name))?
    } else {
        document
    };

    let inlined = inline_refs(root, &definitions, &mut Vec::new())?;
    if !inlined.is_object() {
        return Err(format!("Definition '{}' is not a schema object", name));
    }
    serde_json::from_value(inlined).map_err(|e| format!("Invalid schema '{}': {}", name, e))
}

fn collect_definitions(document: &Value) -> Map<String, Value> {
    let mut out = Map::new();
    for key in DEFINITION_KEYS {
        if let Some(Value::Object(defs)) = document.get(key) {
            for (name, def) in defs {
                out.insert(name.clone(), def.clone());
            }
        }
    }
    out
}

fn local_definition(reference: &str) -> Option<&str> {
    DEFINITION_KEYS.iter().find_map(|key| {
        reference
            .strip_prefix("#/")
            .and_then(|r| r.strip_prefix(key))
            .and_then(|r| r.strip_prefix('/'))
    })
}

fn inline_refs(
    value: &Value,
    definitions: &Map<String, Value>,
    stack: &mut Vec<String>,
) -> Result<Value, String> {
    match value {
        Value::Object(map) => {
            if let Some(name) = map
                .get("$ref")
                .and_then(Value::as_str)
                .and_then(local_definition)
            {
                if stack.iter().any(|s| s == name) {
                    return Err(format!("Recursive reference '{}' is not supported", name));
                }
                let target = definitions
                    .get(name)
                    .ok_or_else(|| format!("Unresolved reference '{}'", name))?;
                stack.push(name.to_string());
                let resolved = inline_refs(target, definitions, stack);
                stack.pop();
                return resolved;
            }

            let mut out = Map::new();
            for (key, child) in map {
                out.insert(key.clone(), inline_refs(child, definitions, stack)?);
            }
            Ok(Value::Object(out))
        }
        Value::Array(items) => items
            .iter()
            .map(|item| inline_refs(item, definitions, stack))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Ok(other.clone()),
    }
}
