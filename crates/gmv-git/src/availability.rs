//! Git availability checking
//!
//! Looks the configured git program up on PATH and asks it for its version
//! before any move is attempted, so a missing git is reported as such rather
//! than as a failed shell command.

use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

use gmv_core::prelude::*;

/// Result of probing for a git executable
#[derive(Debug, Clone, Default)]
pub struct GitAvailability {
    /// Resolved path of the executable, if found
    pub path: Option<PathBuf>,

    /// `git --version` output, e.g. "git version 2.43.0"
    pub version: Option<String>,
}

impl GitAvailability {
    /// Probe for `program` (a name on PATH or a path)
    pub async fn check(program: &str) -> Self {
        let path = match which::which(program) {
            Ok(path) => path,
            Err(e) => {
                debug!("{} not found on PATH: {}", program, e);
                return Self::default();
            }
        };

        let version = Command::new(&path)
            .arg("--version")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .inspect_err(|e| debug!("{} --version failed: {}", path.display(), e))
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string());

        Self {
            path: Some(path),
            version,
        }
    }

    pub fn is_available(&self) -> bool {
        self.path.is_some() && self.version.is_some()
    }

    /// Convert into an error naming `program` when git cannot be used
    pub fn require(self, program: &str) -> Result<Self> {
        match self.unavailable_message() {
            None => Ok(self),
            Some(reason) => Err(Error::git_not_found(program, reason)),
        }
    }

    /// Get user-friendly message when git is unavailable
    pub fn unavailable_message(&self) -> Option<&'static str> {
        match (&self.path, &self.version) {
            (Some(_), Some(_)) => None,
            (Some(_), None) => Some("git was found but did not report a version."),
            (None, _) => Some("git not found. Install git or set [git].program in .gmv/config.toml."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unavailable() {
        let availability = GitAvailability::default();
        assert!(!availability.is_available());
        assert!(availability.unavailable_message().is_some());
    }

    #[test]
    fn test_found_without_version() {
        let availability = GitAvailability {
            path: Some(PathBuf::from("/usr/bin/git")),
            version: None,
        };
        assert!(!availability.is_available());
        assert!(availability
            .unavailable_message()
            .unwrap()
            .contains("did not report a version"));
    }

    #[test]
    fn test_available_no_message() {
        let availability = GitAvailability {
            path: Some(PathBuf::from("/usr/bin/git")),
            version: Some("git version 2.43.0".to_string()),
        };
        assert!(availability.is_available());
        assert!(availability.unavailable_message().is_none());
        assert!(availability.require("git").is_ok());
    }

    #[tokio::test]
    async fn test_missing_program() {
        let availability = GitAvailability::check("gmv-no-such-git-binary").await;
        assert!(!availability.is_available());
        let err = availability.require("gmv-no-such-git-binary").unwrap_err();
        assert!(matches!(err, Error::GitNotFound { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_require_carries_reason() {
        let err = GitAvailability::default().require("git").unwrap_err();
        assert!(err.to_string().contains("Install git"), "{}", err);

        let err = GitAvailability {
            path: Some(PathBuf::from("/opt/git")),
            version: None,
        }
        .require("/opt/git")
        .unwrap_err();
        assert!(err.to_string().contains("did not report a version"), "{}", err);
    }
}
