#![deny(missing_docs)]

//! # Path Normalization
//!
//! Maps a source file location, relative to the scan root, onto the canonical
//! URL path template it serves.
//!
//! e.g. `{envId}/env.rs` -> `/{envid}/env`

use crate::config::{ParserConfig, ResolvedTemplates};
use crate::error::{AppError, AppResult};
use crate::template::Delimiters;
use regex::Regex;

/// Removes the extension of the last path segment.
pub fn cut_extension(path: &str) -> &str {
    let segment_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[segment_start..].rfind('.') {
        Some(dot) => &path[..segment_start + dot],
        None => path,
    }
}

/// Returns the directory part of a `/` separated path, `"."` when there is none.
pub fn dir_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(i) => &path[..i],
        None => ".",
    }
}

/// Drops either the file name or just its extension.
pub fn reduce_path(path: &str, skip_file_name: bool) -> &str {
    if skip_file_name {
        dir_name(path)
    } else {
        cut_extension(path)
    }
}

/// Joins `path` onto `/`, collapsing empty and `.` segments and resolving `..`.
///
/// `..` never climbs above the root and trailing separators are dropped.
pub fn canonicalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    format!("/{}", segments.join("/"))
}

fn span_regex(d: Delimiters) -> AppResult<Regex> {
    let pattern = format!(
        "{}(.*?){}",
        regex::escape(&d.open.to_string()),
        regex::escape(&d.close.to_string())
    );
    Regex::new(&pattern)
        .map_err(|e| AppError::General(format!("Failed to compile template pattern: {}", e)))
}

/// Converts relative file paths into URL path templates.
///
/// Built once per run from a validated configuration.
#[derive(Debug, Clone)]
pub struct PathNormalizer {
    path_vars: Regex,
    shadow: Option<Regex>,
    skip_file_name: bool,
    map_index_to_root: bool,
}

impl PathNormalizer {
    /// Creates a normalizer from already resolved templates.
    pub fn new(
        templates: ResolvedTemplates,
        skip_file_name: bool,
        map_index_to_root: bool,
    ) -> AppResult<Self> {
        Ok(Self {
            path_vars: span_regex(templates.path_vars)?,
            shadow: templates.shadow.map(span_regex).transpose()?,
            skip_file_name,
            map_index_to_root,
        })
    }

    /// Resolves the templates of `config` and creates a normalizer.
    pub fn from_config(config: &ParserConfig) -> AppResult<Self> {
        Self::new(
            config.resolve_templates()?,
            config.skip_file_name,
            config.map_index_to_root,
        )
    }

    /// Normalizes a path relative to the scan root.
    ///
    /// Both `/` and `\` are accepted as separators.
    pub fn normalize(&self, relative: &str) -> String {
        let lowered = relative.to_lowercase().replace('\\', "/");
        let reduced = reduce_path(&lowered, self.skip_file_name);

        let with_vars = self.path_vars.replace_all(reduced, "{${1}}");

        let visible = match &self.shadow {
            Some(shadow) => shadow.replace_all(&with_vars, "").into_owned(),
            None => with_vars.into_owned(),
        };

        let path = canonicalize(&visible);

        if self.map_index_to_root {
            if let Some(parent) = path.strip_suffix("/index") {
                return if parent.is_empty() {
                    "/".to_string()
                } else {
                    parent.to_string()
                };
            }
        }

        path
    }
}
