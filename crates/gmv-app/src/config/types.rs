//! Configuration types for git-mv-tabs
//!
//! Defines:
//! - `Settings` - Workspace settings
//! - `GitSettings` - Git program and index-lock retry
//! - `DialogSettings` - Save-dialog wording

use std::time::Duration;

use serde::{Deserialize, Serialize};

use gmv_git::{GitRunner, RetryPolicy, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY};

/// Workspace settings from `.gmv/config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub git: GitSettings,

    #[serde(default)]
    pub dialog: DialogSettings,
}

/// Git execution settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitSettings {
    /// Git executable, looked up on PATH unless it is a path
    #[serde(default = "default_program")]
    pub program: String,

    /// Total attempts while `.git/index.lock` is held
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed delay between attempts, in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            program: default_program(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl GitSettings {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.retry_delay_ms))
    }

    /// A runner for the configured program and retry policy.
    pub fn runner(&self) -> GitRunner {
        GitRunner::new()
            .program(self.program.clone())
            .retry_policy(self.retry_policy())
    }
}

fn default_program() -> String {
    "git".to_string()
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY.as_millis() as u64
}

/// Save-dialog settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DialogSettings {
    /// Label of the dialog's confirm button
    #[serde(default = "default_save_label")]
    pub save_label: String,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            save_label: default_save_label(),
        }
    }
}

fn default_save_label() -> String {
    "Move Here (git mv)".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_keep_historical_constants() {
        let settings = Settings::default();
        assert_eq!(settings.git.program, "git");
        assert_eq!(settings.git.max_attempts, 8);
        assert_eq!(settings.git.retry_delay_ms, 400);
        assert_eq!(settings.dialog.save_label, "Move Here (git mv)");
    }

    #[test]
    fn test_retry_policy_from_settings() {
        let git = GitSettings {
            program: "git".to_string(),
            max_attempts: 3,
            retry_delay_ms: 25,
        };
        assert_eq!(
            git.retry_policy(),
            RetryPolicy::new(3, Duration::from_millis(25))
        );
        assert_eq!(git.runner().policy(), git.retry_policy());
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let settings: Settings = toml::from_str("[git]\nmax_attempts = 2\n").unwrap();
        assert_eq!(settings.git.max_attempts, 2);
        assert_eq!(settings.git.retry_delay_ms, 400);
        assert_eq!(settings.git.program, "git");
    }
}
