#![deny(missing_docs)]

//! # Route Directory Parser
//!
//! Walks a route directory and assembles the OpenAPI document:
//!
//! 1. every file matching the scan globs is extracted, translated and written
//!    under its normalized path;
//! 2. a file that fails is logged, recorded and skipped, the rest still run;
//! 3. the base config is deep-merged over the result.

use crate::config::ParserConfig;
use crate::error::{AppError, AppResult};
use crate::extract::SchemaExtractor;
use crate::merge::{deep_merge, resolve_base_config};
use crate::oas::{ComponentRegistry, OpenApiDocument, OperationBuilder};
use crate::paths::PathNormalizer;
use globset::GlobSet;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// A file that could not be turned into operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// The file that was skipped.
    pub file: PathBuf,
    /// Why it was skipped.
    pub message: String,
}

/// Result of a parse run.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The merged document.
    pub document: serde_json::Value,
    /// Number of files whose operations made it into the document.
    pub parsed_files: usize,
    /// Files skipped because of an error, in scan order.
    pub failures: Vec<FileFailure>,
}

/// Generates an OpenAPI document from a route directory.
pub struct Parser<E> {
    config: ParserConfig,
    normalizer: PathNormalizer,
    scan: GlobSet,
    extractor: E,
}

impl<E: SchemaExtractor> Parser<E> {
    /// Validates `config` and prepares a parser using `extractor`.
    ///
    /// Fails on malformed delimiter templates or scan globs.
    pub fn new(config: ParserConfig, extractor: E) -> AppResult<Self> {
        let normalizer = PathNormalizer::from_config(&config)?;
        let scan = config.compile_scan_patterns(extractor.default_patterns())?;
        Ok(Self {
            config,
            normalizer,
            scan,
            extractor,
        })
    }

    /// Parses every matching file under `root`.
    ///
    /// Only a missing root, an unreadable base config or a serialization
    /// failure abort the run. Per-file errors end up in
    /// [`ParseOutcome::failures`].
    pub fn parse(&self, root: &Path) -> AppResult<ParseOutcome> {
        if !root.is_dir() {
            return Err(AppError::InvalidRootDirectory(root.display().to_string()));
        }

        let mut document = OpenApiDocument::new(directory_title(root));
        let mut failures = Vec::new();
        let mut parsed_files = 0;

        for file in self.scan_files(root) {
            match self.parse_file(root, &file, &mut document) {
                Ok(()) => parsed_files += 1,
                Err(e) => {
                    error!(file = %file.display(), "Error parsing file: {}", e);
                    failures.push(FileFailure {
                        file,
                        message: e.to_string(),
                    });
                }
            }
        }

        let generated = serde_json::to_value(&document)
            .map_err(|e| AppError::General(format!("Failed to serialize document: {}", e)))?;

        let document = match &self.config.base_config {
            Some(base) => deep_merge(generated, resolve_base_config(base)?),
            None => generated,
        };

        info!(
            parsed = parsed_files,
            skipped = failures.len(),
            "Parsed route directory {}",
            root.display()
        );

        Ok(ParseOutcome {
            document,
            parsed_files,
            failures,
        })
    }

    /// Files under `root` matching the scan globs, in file-name order.
    fn scan_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if self.scan.is_match(relative_path(root, entry.path())) {
                files.push(entry.into_path());
            }
        }

        files
    }

    fn parse_file(&self, root: &Path, file: &Path, document: &mut OpenApiDocument) -> AppResult<()> {
        let path = self.normalizer.normalize(&relative_path(root, file));
        debug!(file = %file.display(), path = %path, "Parsing route file");

        let tree = self.extractor.extract(file, &self.config.export_name)?;

        let operations = {
            let mut registry = ComponentRegistry::new(&mut document.components);
            OperationBuilder::new(&mut registry, &path, self.config.skip_file_name)
                .build_path_item(&tree)
        };

        let item = document.paths.entry(path).or_default();
        item.extend(operations);
        Ok(())
    }
}

/// `file` relative to `root`, with `/` separators.
fn relative_path(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// The name of the root directory, used as the document title.
fn directory_title(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| resolved.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaNode;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    /// Reads each file as a JSON schema tree; files containing `fail` error out.
    struct JsonExtractor;

    impl SchemaExtractor for JsonExtractor {
        fn extract(&self, file: &Path, _export_name: &str) -> AppResult<SchemaNode> {
            let content = fs::read_to_string(file)?;
            if content.contains("fail") {
                return Err(AppError::extraction(file, "boom"));
            }
            serde_json::from_str(&content).map_err(|e| AppError::extraction(file, e.to_string()))
        }

        fn default_patterns(&self) -> &'static [&'static str] {
            &["**/*.json"]
        }
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_root_must_be_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.json");
        fs::write(&file, "{}").unwrap();

        let parser = Parser::new(ParserConfig::default(), JsonExtractor).unwrap();
        assert!(matches!(
            parser.parse(&file),
            Err(AppError::InvalidRootDirectory(_))
        ));
        assert!(matches!(
            parser.parse(&dir.path().join("missing")),
            Err(AppError::InvalidRootDirectory(_))
        ));
    }

    #[test]
    fn test_bad_template_fails_at_construction() {
        let config = ParserConfig {
            shadow_template: Some("(".into()),
            ..Default::default()
        };
        assert!(matches!(
            Parser::new(config, JsonExtractor),
            Err(AppError::TemplateParse(_))
        ));
    }

    #[test]
    fn test_failures_are_isolated() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a.json", r#"{"properties": {"get": {}}}"#);
        write(dir.path(), "b.json", "fail");
        write(dir.path(), "c/d.json", r#"{"properties": {"delete": {}}}"#);
        write(dir.path(), "notes.txt", "ignored");

        let parser = Parser::new(ParserConfig::default(), JsonExtractor).unwrap();
        let outcome = parser.parse(dir.path()).unwrap();

        assert_eq!(outcome.parsed_files, 2);
        assert_eq!(outcome.failures.len(), 1);
        assert!(outcome.failures[0].file.ends_with("b.json"));

        let paths = outcome.document["paths"].as_object().unwrap();
        let keys: Vec<_> = paths.keys().cloned().collect();
        assert_eq!(keys, vec!["/a", "/c/d"]);
        assert_eq!(paths["/a"], json!({"get": {"responses": {}}}));
    }

    #[test]
    fn test_scan_patterns_are_relative_to_root() {
        let dir = tempdir().unwrap();
        write(dir.path(), "v1/a.json", r#"{"properties": {"get": {}}}"#);
        write(dir.path(), "v2/b.json", r#"{"properties": {"get": {}}}"#);

        let config = ParserConfig {
            scan_patterns: vec!["v1/**".into()],
            ..Default::default()
        };
        let outcome = Parser::new(config, JsonExtractor)
            .unwrap()
            .parse(dir.path())
            .unwrap();

        let paths = outcome.document["paths"].as_object().unwrap();
        assert!(paths.contains_key("/v1/a"));
        assert!(!paths.contains_key("/v2/b"));
    }

    #[test]
    fn test_files_sharing_a_path_merge_methods() {
        let dir = tempdir().unwrap();
        write(dir.path(), "users.json", r#"{"properties": {"get": {}}}"#);
        write(dir.path(), "users/index.json", r#"{"properties": {"post": {}}}"#);

        let outcome = Parser::new(ParserConfig::default(), JsonExtractor)
            .unwrap()
            .parse(dir.path())
            .unwrap();

        // `users/` sorts before `users.json`.
        let users = outcome.document["paths"]["/users"].as_object().unwrap();
        let methods: Vec<_> = users.keys().cloned().collect();
        assert_eq!(methods, vec!["post", "get"]);
    }

    #[test]
    fn test_inline_base_config_wins() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a.json", r#"{"properties": {"get": {}}}"#);

        let config = ParserConfig {
            base_config: Some(crate::config::BaseConfig::Inline(json!({
                "info": { "title": "Custom", "version": "2.0.0" },
                "servers": [{ "url": "https://api.example.com" }]
            }))),
            ..Default::default()
        };
        let outcome = Parser::new(config, JsonExtractor)
            .unwrap()
            .parse(dir.path())
            .unwrap();

        let doc = &outcome.document;
        assert_eq!(doc["info"]["title"], "Custom");
        assert_eq!(doc["info"]["version"], "2.0.0");
        assert_eq!(doc["info"]["description"], "Auto generated by fs-api");
        assert_eq!(doc["servers"][0]["url"], "https://api.example.com");
        assert!(doc["paths"]["/a"]["get"].is_object());
    }

    #[test]
    fn test_unreadable_base_config_is_fatal() {
        let dir = tempdir().unwrap();
        let config = ParserConfig {
            base_config: Some(crate::config::BaseConfig::File(
                dir.path().join("missing.yaml"),
            )),
            ..Default::default()
        };
        let result = Parser::new(config, JsonExtractor)
            .unwrap()
            .parse(dir.path());
        assert!(matches!(result, Err(AppError::BaseConfigRead(_))));
    }

    #[test]
    fn test_non_object_inline_base_config_is_fatal() {
        let dir = tempdir().unwrap();
        let config = ParserConfig {
            base_config: Some(crate::config::BaseConfig::Inline(json!([1]))),
            ..Default::default()
        };
        let result = Parser::new(config, JsonExtractor)
            .unwrap()
            .parse(dir.path());
        assert!(matches!(result, Err(AppError::BaseConfigRead(_))));
    }

    #[test]
    fn test_title_is_directory_name() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("my-api");
        fs::create_dir(&root).unwrap();

        let outcome = Parser::new(ParserConfig::default(), JsonExtractor)
            .unwrap()
            .parse(&root)
            .unwrap();
        assert_eq!(outcome.document["info"]["title"], "my-api");
        assert_eq!(outcome.document["openapi"], "3.0.3");
    }
}
