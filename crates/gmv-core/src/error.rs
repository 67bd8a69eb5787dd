//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Git Process Errors
    // ─────────────────────────────────────────────────────────────
    #[error("'{program}' is not usable: {reason}")]
    GitNotFound { program: String, reason: String },

    #[error("Failed to spawn git process: {reason}")]
    ProcessSpawn { reason: String },

    /// Non-zero exit. The message mirrors what a shell reports: the command
    /// line followed by whatever the process wrote to stderr.
    #[error("Command failed: {command}\n{stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    // ─────────────────────────────────────────────────────────────
    // Workspace Errors
    // ─────────────────────────────────────────────────────────────
    #[error("\"{}\" is not a file in the workspace folder.", path.display())]
    OutsideWorkspace { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Editor Host Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Editor host error: {message}")]
    Host { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn git_not_found(program: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::GitNotFound {
            program: program.into(),
            reason: reason.into(),
        }
    }

    pub fn process_spawn(reason: impl Into<String>) -> Self {
        Self::ProcessSpawn {
            reason: reason.into(),
        }
    }

    pub fn command_failed(
        command: impl Into<String>,
        code: Option<i32>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    pub fn outside_workspace(path: impl Into<PathBuf>) -> Self {
        Self::OutsideWorkspace { path: path.into() }
    }

    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Captured stderr of a failed command, if this error came from one.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Error::CommandFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }

    /// Check if this error should stop the program before any work is done
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::GitNotFound { .. } | Error::ProcessSpawn { .. } | Error::Config { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_message_includes_stderr() {
        let err = Error::command_failed(
            "git mv 'a.txt' 'b.txt'",
            Some(128),
            "fatal: not under version control, source=a.txt",
        );
        let msg = err.to_string();
        assert!(msg.starts_with("Command failed: git mv 'a.txt' 'b.txt'"));
        assert!(msg.contains("not under version control"));
        assert_eq!(
            err.stderr(),
            Some("fatal: not under version control, source=a.txt")
        );
    }

    #[test]
    fn test_outside_workspace_message() {
        let err = Error::outside_workspace("/tmp/elsewhere.txt");
        assert_eq!(
            err.to_string(),
            "\"/tmp/elsewhere.txt\" is not a file in the workspace folder."
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.stderr().is_none());
    }

    #[test]
    fn test_git_not_found_names_program_and_reason() {
        let err = Error::git_not_found("/opt/git", "found but did not report a version");
        assert_eq!(
            err.to_string(),
            "'/opt/git' is not usable: found but did not report a version"
        );
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::git_not_found("git", "not found on PATH").is_fatal());
        assert!(Error::process_spawn("permission denied").is_fatal());
        assert!(!Error::host("tab is gone").is_fatal());
        assert!(!Error::command_failed("git mv", Some(1), "").is_fatal());
    }
}
