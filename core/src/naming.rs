#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for deriving component schema names from HTTP methods,
//! URL paths and content types.

use crate::paths::reduce_path;

/// Turns an arbitrary string into an identifier fragment.
///
/// Strips every non ASCII-alphanumeric character and upper-cases the character
/// that starts the result or follows a stripped run. Every other character is
/// kept as is, so `envId` stays `EnvId` rather than becoming `Envid`.
pub fn class_name(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut boundary = true;
    for c in source.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(if boundary { c.to_ascii_uppercase() } else { c });
            boundary = false;
        } else {
            boundary = true;
        }
    }
    out
}

/// Maps a MIME type onto the short label used in component names.
///
/// Unknown types pass through unchanged.
pub fn content_type_label(content_type: &str) -> &str {
    match content_type {
        "application/json" => "JSON",
        "application/xml" => "XML",
        "text/plain" => "Text",
        "application/octet-stream" => "OctetStream",
        "application/x-www-form-urlencoded" => "FormUrlEncoded",
        "multipart/form-data" => "FormData",
        other => other,
    }
}

/// Derives a component name from the method, the URL path and extra labels.
///
/// e.g. `get /route [JSON, ResBody]` -> `GetRouteJSONResBody`
pub fn id_name(method: &str, path: &str, skip_file_name: bool, groups: &[&str]) -> String {
    let source = reduce_path(path, skip_file_name);

    let mut name = class_name(method);
    for segment in source.trim_start_matches('/').split('/') {
        name.push_str(&class_name(segment));
    }
    for group in groups {
        name.push_str(&class_name(group));
    }
    name
}
