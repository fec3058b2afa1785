#![deny(missing_docs)]

//! # Generate Command
//!
//! Scans a route directory, writes the resulting OpenAPI document and
//! optionally runs client generation on it.

use crate::codegen::{orval_config, run_orval, CommandExecutor};
use crate::output::{write_document, OutputFormat};
use fsapi_core::{
    AppResult, BaseConfig, DocumentExtractor, ParseOutcome, Parser, ParserConfig,
    RustSourceExtractor, DEFAULT_EXPORT_NAME,
};
use std::path::{Path, PathBuf};

/// How route declarations are read.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorKind {
    /// Rust structs in `.rs` files.
    Rust,
    /// JSON Schema documents in `.json`/`.yaml` files.
    Document,
}

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Route directory to scan.
    #[clap(short, long, env = "FS_API_PATH", default_value = ".")]
    pub path: PathBuf,

    /// Output file. Defaults to `api.json`, or `api.yaml` for YAML output.
    #[clap(short, long, env = "FS_API_OUT")]
    pub out: Option<PathBuf>,

    /// Delimiters marking directories left out of URL paths, e.g. `(name)`.
    #[clap(long, env = "FS_API_SHADOW")]
    pub shadow: Option<String>,

    /// Name of the route type declared in every file.
    #[clap(long, env = "FS_API_EXPORT_NAME", default_value = DEFAULT_EXPORT_NAME)]
    pub export_name: String,

    /// Delimiters marking path variables, e.g. `[id]`. Defaults to `{var}`.
    #[clap(long, env = "FS_API_PATH_VARS")]
    pub path_vars: Option<String>,

    /// Leave the file name out of URL paths.
    #[clap(long, env = "FS_API_SKIP_FILE_NAME")]
    pub skip_file_name: bool,

    /// Glob patterns selecting route files, relative to the route directory.
    #[clap(short, long, env = "FS_API_SCAN", num_args = 1..)]
    pub scan: Vec<String>,

    /// JSON or YAML document merged over the generated one.
    #[clap(long, env = "FS_API_BASE_CONFIG")]
    pub base_config: Option<PathBuf>,

    /// Output format.
    #[clap(long, value_enum, env = "FS_API_FORMAT", default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Route declaration reader.
    #[clap(long, value_enum, env = "FS_API_EXTRACTOR", default_value_t = ExtractorKind::Rust)]
    pub extractor: ExtractorKind,

    /// Keep `index` files as `/index` instead of mapping them to their directory.
    #[clap(long, env = "FS_API_DISABLE_INDEX_MAPPING")]
    pub disable_index_mapping: bool,

    /// Run `orval` on the written document.
    #[clap(long, env = "FS_API_ORVAL")]
    pub orval: bool,

    /// orval config file. Implies `--orval`.
    #[clap(long, env = "FS_API_ORVAL_CONFIG")]
    pub orval_config: Option<PathBuf>,
}

impl GenerateArgs {
    /// The core configuration described by these arguments.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            export_name: self.export_name.clone(),
            path_vars_template: self.path_vars.clone(),
            shadow_template: self.shadow.clone(),
            scan_patterns: self.scan.clone(),
            base_config: self.base_config.clone().map(BaseConfig::File),
            skip_file_name: self.skip_file_name,
            map_index_to_root: !self.disable_index_mapping,
        }
    }

    /// Where the document is written.
    pub fn output_path(&self) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.default_file_name()))
    }
}

/// Executes the generate command.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `executor` - Runs `orval` when client generation is requested.
pub fn execute(args: &GenerateArgs, executor: &impl CommandExecutor) -> AppResult<()> {
    let outcome = parse(&args.path, args.parser_config(), args.extractor)?;

    let out = args.output_path();
    write_document(&outcome.document, &out, args.format)?;

    println!("🍀 Generated {} from {}", out.display(), args.path.display());
    if !outcome.failures.is_empty() {
        println!(
            "Skipped {} file(s) with errors, see the log above.",
            outcome.failures.len()
        );
    }

    if let Some(config) = orval_config(args.orval, args.orval_config.as_deref()) {
        run_orval(&config, executor)?;
    }

    Ok(())
}

fn parse(root: &Path, config: ParserConfig, extractor: ExtractorKind) -> AppResult<ParseOutcome> {
    match extractor {
        ExtractorKind::Rust => Parser::new(config, RustSourceExtractor)?.parse(root),
        ExtractorKind::Document => Parser::new(config, DocumentExtractor)?.parse(root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsapi_core::AppError;
    use std::cell::Cell;
    use std::fs;
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;
    use tempfile::tempdir;

    const ROUTE: &str = r#"
        pub struct Schema { get: Get }
        pub struct Get { responses: Responses }
        pub struct Responses {
            #[serde(rename = "200")]
            ok: Ok200,
        }
        pub struct Ok200 { content: Content }
        pub struct Content {
            #[serde(rename = "application/json")]
            json: Json,
        }
        pub struct Json { body: Vec<String> }
    "#;

    struct CountingExecutor {
        calls: Cell<usize>,
        code: i32,
    }

    impl CountingExecutor {
        fn new(code: i32) -> Self {
            Self {
                calls: Cell::new(0),
                code,
            }
        }
    }

    impl CommandExecutor for CountingExecutor {
        fn execute(&self, _program: &str, _args: &[&str]) -> AppResult<ExitStatus> {
            self.calls.set(self.calls.get() + 1);
            Ok(ExitStatus::from_raw(self.code << 8))
        }
    }

    fn args(root: &Path, out: &Path) -> GenerateArgs {
        GenerateArgs {
            path: root.to_path_buf(),
            out: Some(out.to_path_buf()),
            shadow: None,
            export_name: DEFAULT_EXPORT_NAME.to_string(),
            path_vars: None,
            skip_file_name: false,
            scan: Vec::new(),
            base_config: None,
            format: OutputFormat::Json,
            extractor: ExtractorKind::Rust,
            disable_index_mapping: false,
            orval: false,
            orval_config: None,
        }
    }

    fn route_dir() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("api/users")).unwrap();
        fs::write(dir.path().join("api/users/list.rs"), ROUTE).unwrap();
        fs::write(dir.path().join("api/broken.rs"), "struct Nothing;").unwrap();
        dir
    }

    #[test]
    fn test_parser_config_mapping() {
        let mut a = args(Path::new("api"), Path::new("out.json"));
        a.shadow = Some("()".into());
        a.disable_index_mapping = true;
        a.base_config = Some(PathBuf::from("base.yaml"));
        a.scan = vec!["**/*.rs".into()];

        let config = a.parser_config();
        assert_eq!(config.shadow_template.as_deref(), Some("()"));
        assert!(!config.map_index_to_root);
        assert_eq!(config.scan_patterns, vec!["**/*.rs"]);
        assert!(matches!(config.base_config, Some(BaseConfig::File(ref p)) if p == Path::new("base.yaml")));
    }

    #[test]
    fn test_default_output_follows_format() {
        let mut a = args(Path::new("."), Path::new("x"));
        a.out = None;
        assert_eq!(a.output_path(), PathBuf::from("api.json"));
        a.format = OutputFormat::Yaml;
        assert_eq!(a.output_path(), PathBuf::from("api.yaml"));
    }

    #[test]
    fn test_execute_writes_document() {
        let dir = route_dir();
        let out = dir.path().join("out/api.json");
        let executor = CountingExecutor::new(0);

        execute(&args(&dir.path().join("api"), &out), &executor).unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert!(doc["paths"]["/users/list"]["get"].is_object());
        assert!(doc["components"]["schemas"]["GetUsersListJSONResBody"].is_object());
        assert_eq!(executor.calls.get(), 0);
    }

    #[test]
    fn test_execute_yaml_and_orval() {
        let dir = route_dir();
        let out = dir.path().join("api.yaml");
        let executor = CountingExecutor::new(0);

        let mut a = args(&dir.path().join("api"), &out);
        a.format = OutputFormat::Yaml;
        a.orval = true;
        execute(&a, &executor).unwrap();

        let doc: serde_json::Value =
            serde_yaml::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(doc["openapi"], "3.0.3");
        assert_eq!(executor.calls.get(), 1);
    }

    #[test]
    fn test_execute_orval_failure_is_fatal() {
        let dir = route_dir();
        let out = dir.path().join("api.json");
        let executor = CountingExecutor::new(3);

        let mut a = args(&dir.path().join("api"), &out);
        a.orval_config = Some(PathBuf::from("orval.config.ts"));

        let result = execute(&a, &executor);
        assert!(matches!(result, Err(AppError::ExternalProcess { code: 3, .. })));
        // The document is written before orval runs.
        assert!(out.exists());
    }

    #[test]
    fn test_execute_missing_root() {
        let dir = tempdir().unwrap();
        let executor = CountingExecutor::new(0);
        let result = execute(
            &args(&dir.path().join("missing"), &dir.path().join("api.json")),
            &executor,
        );
        assert!(matches!(result, Err(AppError::InvalidRootDirectory(_))));
    }
}
