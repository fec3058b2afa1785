#![deny(missing_docs)]

//! # Client Code Generation
//!
//! Hands the written document to `orval` for client generation.
//!
//! The process runner is a trait so tests can check the command line without
//! `npx` installed.

use fsapi_core::{AppError, AppResult};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::info;

/// Config file used by `--orval` when no `--orval-config` is given.
pub const DEFAULT_ORVAL_CONFIG: &str = "orval.config.js";

/// Interface for running an external program.
pub trait CommandExecutor {
    /// Runs `program` with `args`, inheriting stdio, and returns its exit status.
    fn execute(&self, program: &str, args: &[&str]) -> AppResult<ExitStatus>;
}

/// Standard executor using `std::process::Command`.
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn execute(&self, program: &str, args: &[&str]) -> AppResult<ExitStatus> {
        let status = Command::new(program).args(args).status()?;
        Ok(status)
    }
}

/// The orval config to use, if client generation was requested.
pub fn orval_config(enabled: bool, config: Option<&Path>) -> Option<PathBuf> {
    match config {
        Some(path) => Some(path.to_path_buf()),
        None if enabled => Some(PathBuf::from(DEFAULT_ORVAL_CONFIG)),
        None => None,
    }
}

/// Runs `npx orval generate --config <config>`.
///
/// A non-zero exit becomes [`AppError::ExternalProcess`]; a process killed by
/// a signal reports code `-1`.
pub fn run_orval<E: CommandExecutor>(config: &Path, executor: &E) -> AppResult<()> {
    let config = config.to_string_lossy();
    let args = ["orval", "generate", "--config", config.as_ref()];
    let command = format!("npx {}", args.join(" "));

    info!("Running {}", command);
    let status = executor.execute("npx", &args)?;

    if !status.success() {
        return Err(AppError::ExternalProcess {
            command,
            code: status.code().unwrap_or(-1),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::os::unix::process::ExitStatusExt;

    struct MockExecutor {
        last_command: RefCell<Option<(String, Vec<String>)>>,
        status: ExitStatus,
    }

    impl MockExecutor {
        fn new(status: ExitStatus) -> Self {
            Self {
                last_command: RefCell::new(None),
                status,
            }
        }
    }

    impl CommandExecutor for MockExecutor {
        fn execute(&self, program: &str, args: &[&str]) -> AppResult<ExitStatus> {
            self.last_command.borrow_mut().replace((
                program.to_string(),
                args.iter().map(|s| s.to_string()).collect(),
            ));
            Ok(self.status)
        }
    }

    #[test]
    fn test_run_orval_command_line() {
        let executor = MockExecutor::new(ExitStatus::from_raw(0));
        run_orval(Path::new("client/orval.config.ts"), &executor).unwrap();

        let (program, args) = executor.last_command.take().unwrap();
        assert_eq!(program, "npx");
        assert_eq!(
            args,
            vec!["orval", "generate", "--config", "client/orval.config.ts"]
        );
    }

    #[test]
    fn test_run_orval_failure_carries_exit_code() {
        // Raw wait status: exit code 2.
        let executor = MockExecutor::new(ExitStatus::from_raw(2 << 8));
        match run_orval(Path::new(DEFAULT_ORVAL_CONFIG), &executor) {
            Err(AppError::ExternalProcess { command, code }) => {
                assert_eq!(command, "npx orval generate --config orval.config.js");
                assert_eq!(code, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_run_orval_killed_by_signal() {
        // Raw wait status: terminated by SIGKILL.
        let executor = MockExecutor::new(ExitStatus::from_raw(9));
        assert!(matches!(
            run_orval(Path::new(DEFAULT_ORVAL_CONFIG), &executor),
            Err(AppError::ExternalProcess { code: -1, .. })
        ));
    }

    #[test]
    fn test_orval_config_selection() {
        assert_eq!(orval_config(false, None), None);
        assert_eq!(
            orval_config(true, None),
            Some(PathBuf::from(DEFAULT_ORVAL_CONFIG))
        );
        assert_eq!(
            orval_config(false, Some(Path::new("custom.js"))),
            Some(PathBuf::from("custom.js"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_executor_runs_program() {
        let status = ShellExecutor.execute("true", &[]).unwrap();
        assert!(status.success());

        let status = ShellExecutor.execute("false", &[]).unwrap();
        assert_eq!(status.code(), Some(1));
    }
}
