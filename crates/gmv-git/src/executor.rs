//! Command execution through the platform shell
//!
//! [`LocalCommandExecutor`] is the seam between the runner's retry logic and
//! the operating system. [`ShellExecutor`] is the real implementation; tests
//! substitute a scripted one.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use gmv_core::prelude::*;
use gmv_core::ShellDialect;

/// Exit status and captured output of one finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RawOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Runs an assembled command line in a working directory.
#[trait_variant::make(CommandExecutor: Send)]
pub trait LocalCommandExecutor {
    /// Run `command_line` to completion. `Err` means the process could not be
    /// started at all; a non-zero exit is reported through [`RawOutput`].
    async fn execute(&self, command_line: &str, cwd: &Path) -> std::io::Result<RawOutput>;
}

/// Executes command lines with `sh -c` or `cmd /C`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor {
    dialect: ShellDialect,
}

impl ShellExecutor {
    pub fn new(dialect: ShellDialect) -> Self {
        Self { dialect }
    }
}

impl LocalCommandExecutor for ShellExecutor {
    async fn execute(&self, command_line: &str, cwd: &Path) -> std::io::Result<RawOutput> {
        let mut command = Command::new(self.dialect.shell_program());
        command.arg(self.dialect.shell_flag());

        // cmd.exe does its own parsing; re-quoting the line would break it.
        #[cfg(windows)]
        command.raw_arg(command_line);
        #[cfg(not(windows))]
        command.arg(command_line);

        let output = command
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await?;

        trace!(
            "`{}` exited with {:?} in {}",
            command_line,
            output.status.code(),
            cwd.display()
        );

        Ok(RawOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
