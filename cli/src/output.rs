#![deny(missing_docs)]

//! # Output
//!
//! Serializes the generated document to disk as JSON or YAML.

use fsapi_core::{AppError, AppResult};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Serialization format of the written document.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON, four-space indent.
    Json,
    /// YAML.
    #[value(alias = "yml")]
    Yaml,
}

impl OutputFormat {
    /// File written when no output path is given.
    pub fn default_file_name(self) -> &'static str {
        match self {
            OutputFormat::Json => "api.json",
            OutputFormat::Yaml => "api.yaml",
        }
    }
}

/// Renders `document` in `format`.
pub fn render(document: &Value, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => {
            let mut buf = Vec::new();
            let mut serializer =
                serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
            document
                .serialize(&mut serializer)
                .map_err(|e| AppError::General(format!("Failed to serialize JSON: {}", e)))?;
            buf.push(b'\n');
            String::from_utf8(buf).map_err(|e| AppError::General(e.to_string()))
        }
        OutputFormat::Yaml => serde_yaml::to_string(document)
            .map_err(|e| AppError::General(format!("Failed to serialize YAML: {}", e))),
    }
}

/// Writes `document` to `out`, creating missing parent directories.
pub fn write_document(document: &Value, out: &Path, format: OutputFormat) -> AppResult<()> {
    let text = render(document, format)?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(out, text)?;
    Ok(())
}
