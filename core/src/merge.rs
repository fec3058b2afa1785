//! # Document Merging
//!
//! Deep merge of a user supplied base document over the generated one, and
//! loading of base documents from disk.

use crate::config::BaseConfig;
use crate::error::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Merges `overlay` into `base`. The overlay wins every conflict.
///
/// - Two maps are merged key by key, recursively. Keys only in `base` keep
///   their position, keys only in `overlay` are appended.
/// - In every other case (scalars, `null`, sequences, a sequence against a
///   map) the overlay replaces the base outright. Sequences are never
///   concatenated.
///
/// Unlike a Lodash-style merge, a sequence meeting a map never has its
/// indices merged in as keys.
///
/// # Examples
/// ```
/// use fsapi_core::merge::deep_merge;
/// use serde_json::json;
///
/// let merged = deep_merge(json!({"arr": [1, 2], "a": 1}), json!({"arr": [3]}));
/// assert_eq!(merged, json!({"arr": [3], "a": 1}));
/// ```
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => {
                        let current = existing.take();
                        *existing = deep_merge(current, value);
                    }
                    None => {
                        base.insert(key, value);
                    }
                }
            }
            Value::Object(base)
        }
        (_, overlay) => overlay,
    }
}

/// Reads a base document from a JSON or YAML file.
///
/// The format is picked from the extension: `.yaml`/`.yml` is YAML, anything
/// else JSON. The top-level value must be a mapping.
pub fn load_base_document(path: &Path) -> AppResult<Value> {
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == "yaml" || e == "yml");

    let content = fs::read_to_string(path).map_err(|e| {
        AppError::BaseConfigRead(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let value: Value = if is_yaml {
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::BaseConfigRead(format!("Failed to read schema file:\n{}", e)))?
    } else {
        serde_json::from_str(&content)
            .map_err(|e| AppError::BaseConfigRead(format!("Failed to read schema file:\n{}", e)))?
    };

    ensure_object(value, &path.display().to_string())
}

/// Resolves a configured base document to a value.
///
/// Inline values must be mappings too, a bare array or scalar would replace
/// the whole generated document.
pub fn resolve_base_config(base: &BaseConfig) -> AppResult<Value> {
    match base {
        BaseConfig::File(path) => load_base_document(path),
        BaseConfig::Inline(value) => ensure_object(value.clone(), "inline base config"),
    }
}

fn ensure_object(value: Value, source: &str) -> AppResult<Value> {
    if !value.is_object() {
        return Err(AppError::BaseConfigRead(format!(
            "Schema is not an object: {}",
            source
        )));
    }
    Ok(value)
}
