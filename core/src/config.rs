#![deny(missing_docs)]

//! # Parser Configuration
//!
//! The full set of knobs for one generation run. A `ParserConfig` is plain data;
//! it is validated once, when a [`crate::parser::Parser`] is built from it.

use crate::error::{AppError, AppResult};
use crate::template::{resolve_template, Delimiters, DEFAULT_PATH_VARS_TEMPLATE};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use std::path::PathBuf;

/// Name of the declared type looked up in every file unless overridden.
pub const DEFAULT_EXPORT_NAME: &str = "Schema";

/// Where the user base document comes from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BaseConfig {
    /// A JSON or YAML file on disk.
    File(PathBuf),
    /// A partial document supplied in memory.
    Inline(serde_json::Value),
}

/// Options controlling path inference, extraction and merging.
///
/// Every field has a default, so `ParserConfig::default()` is a valid config:
///
/// | field                | default                        |
/// |----------------------|--------------------------------|
/// | `export_name`        | `"Schema"`                     |
/// | `path_vars_template` | `None` (`{var}`)               |
/// | `shadow_template`    | `None` (no shadow directories) |
/// | `scan_patterns`      | empty (extractor defaults)     |
/// | `base_config`        | `None`                         |
/// | `skip_file_name`     | `false`                        |
/// | `map_index_to_root`  | `true`                         |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserConfig {
    /// Name of the declared type describing a route.
    pub export_name: String,
    /// Delimiters marking path variables, e.g. `[var]`.
    pub path_vars_template: Option<String>,
    /// Delimiters marking shadow directories, e.g. `(group)`.
    ///
    /// Shadow segments are erased from the generated URL path.
    pub shadow_template: Option<String>,
    /// Globs, relative to the scan root, selecting the files to parse.
    pub scan_patterns: Vec<String>,
    /// Document deep-merged over the generated one.
    pub base_config: Option<BaseConfig>,
    /// Leave the file name out of the paths.
    pub skip_file_name: bool,
    /// Map `index` files to their directory path.
    pub map_index_to_root: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            export_name: DEFAULT_EXPORT_NAME.to_string(),
            path_vars_template: None,
            shadow_template: None,
            scan_patterns: Vec::new(),
            base_config: None,
            skip_file_name: false,
            map_index_to_root: true,
        }
    }
}

/// Delimiter pairs resolved from a [`ParserConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTemplates {
    /// Path variable delimiters.
    pub path_vars: Delimiters,
    /// Shadow directory delimiters, when enabled.
    pub shadow: Option<Delimiters>,
}

impl ParserConfig {
    /// Resolves both delimiter templates.
    ///
    /// Fails with `TemplateParse` when a template is shorter than two characters.
    pub fn resolve_templates(&self) -> AppResult<ResolvedTemplates> {
        let path_vars =
            resolve_template(self.path_vars_template.as_deref(), DEFAULT_PATH_VARS_TEMPLATE)?;

        let shadow = match self.shadow_template.as_deref() {
            Some(t) if !t.is_empty() => Some(resolve_template(Some(t), "")?),
            _ => None,
        };

        Ok(ResolvedTemplates { path_vars, shadow })
    }

    /// Compiles the scan globs, using `defaults` when none are configured.
    pub fn compile_scan_patterns(&self, defaults: &[&str]) -> AppResult<GlobSet> {
        let patterns: Vec<&str> = if self.scan_patterns.is_empty() {
            defaults.to_vec()
        } else {
            self.scan_patterns.iter().map(String::as_str).collect()
        };

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| AppError::InvalidScanPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            builder.add(glob);
        }

        builder.build().map_err(|e| AppError::InvalidScanPattern {
            pattern: self.scan_patterns.join(", "),
            message: e.to_string(),
        })
    }
}
