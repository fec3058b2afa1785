//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Only `Extraction` is recoverable: the orchestrator catches it per file and
//! keeps going. Every other variant aborts a run.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The scan root does not exist or is not a directory.
    #[from(ignore)]
    #[display("Invalid api directory (not a directory): {_0}")]
    InvalidRootDirectory(String),

    /// The base document could not be read or parsed.
    #[from(ignore)]
    #[display("Failed to read base config: {_0}")]
    BaseConfigRead(String),

    /// A delimiter template is shorter than two characters.
    #[from(ignore)]
    #[display("Failed to parse template: {_0}")]
    TemplateParse(String),

    /// A scan glob could not be compiled.
    #[from(ignore)]
    #[display("Invalid scan pattern '{pattern}': {message}")]
    InvalidScanPattern {
        /// The offending glob.
        pattern: String,
        /// Reason reported by the glob compiler.
        message: String,
    },

    /// The schema extractor failed for one file.
    #[from(ignore)]
    #[display("Error parsing interface {file}:\n{message}")]
    Extraction {
        /// The file being extracted.
        file: String,
        /// What went wrong.
        message: String,
    },

    /// A chained external command exited unsuccessfully.
    ///
    /// `code` is `-1` when the process was terminated by a signal.
    #[from(ignore)]
    #[display("Command '{command}' failed with code {code}")]
    ExternalProcess {
        /// The command line that was run.
        command: String,
        /// Process exit code.
        code: i32,
    },

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

impl AppError {
    /// Builds an `Extraction` error for `file`.
    pub fn extraction(file: &std::path::Path, message: impl Into<String>) -> Self {
        AppError::Extraction {
            file: file.display().to_string(),
            message: message.into(),
        }
    }
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
