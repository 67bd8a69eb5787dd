//! Git command runner with index-lock retry
//!
//! Runs one [`GitRequest`] through a [`LocalCommandExecutor`]. When git fails
//! because another process holds `.git/index.lock`, the runner waits a fixed
//! interval and tries again, up to [`RetryPolicy::max_attempts`] attempts in
//! total. Every other failure is returned after the first attempt.

use std::time::Duration;

use gmv_core::prelude::*;
use gmv_core::ShellDialect;

use crate::executor::{LocalCommandExecutor, ShellExecutor};
use crate::index_lock::is_index_locked;
use crate::request::GitRequest;

/// Default total attempts when the index is locked
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

/// Default wait between attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(400);

/// Fixed-delay retry settings. No backoff, no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero is treated as one.
    pub max_attempts: u32,
    /// Wait between a locked attempt and the next one.
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY)
    }
}

/// Outcome of running a git command.
///
/// Only `error` decides success. `stdout`/`stderr` come from the last attempt.
#[derive(Debug)]
pub struct GitOutput {
    pub error: Option<Error>,
    pub stdout: String,
    pub stderr: String,
    /// Attempts made, including the successful or final failing one.
    pub attempts: u32,
}

impl GitOutput {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// True when the last attempt failed on the index lock.
    pub fn is_index_locked(&self) -> bool {
        self.error
            .as_ref()
            .and_then(Error::stderr)
            .is_some_and(is_index_locked)
    }
}

/// Runs git subcommands in a working directory.
#[derive(Debug, Clone)]
pub struct GitRunner<E = ShellExecutor> {
    program: String,
    dialect: ShellDialect,
    policy: RetryPolicy,
    executor: E,
}

impl GitRunner<ShellExecutor> {
    /// `git` from PATH, the platform shell and the default retry policy.
    pub fn new() -> Self {
        let dialect = ShellDialect::current();
        Self::with_executor(ShellExecutor::new(dialect)).dialect(dialect)
    }
}

impl Default for GitRunner<ShellExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: LocalCommandExecutor> GitRunner<E> {
    pub fn with_executor(executor: E) -> Self {
        Self {
            program: "git".to_string(),
            dialect: ShellDialect::current(),
            policy: RetryPolicy::default(),
            executor,
        }
    }

    /// Use a different git executable (name on PATH or full path).
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Quote arguments for `dialect` instead of the current platform's.
    pub fn dialect(mut self, dialect: ShellDialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// The command line `request` will run as.
    pub fn command_line(&self, request: &GitRequest) -> String {
        request.command_line(&self.program, self.dialect)
    }

    /// Run `request`, retrying while the repository index is locked.
    pub async fn run(&self, request: &GitRequest) -> GitOutput {
        let command_line = self.command_line(request);
        let max_attempts = self.policy.attempts();
        debug!("Running `{}` in {}", command_line, request.cwd().display());

        let mut attempt = 1;
        loop {
            let output = self.run_once(&command_line, request, attempt).await;

            if attempt < max_attempts && output.is_index_locked() {
                debug!(
                    ".git/index.lock exists (attempt {}/{}), retrying in {:?}",
                    attempt, max_attempts, self.policy.delay
                );
                tokio::time::sleep(self.policy.delay).await;
                attempt += 1;
                continue;
            }

            match &output.error {
                None => info!("`{}` succeeded", command_line),
                Some(err) => warn!("`{}` failed after {} attempt(s): {}", command_line, attempt, err),
            }
            return output;
        }
    }

    async fn run_once(&self, command_line: &str, request: &GitRequest, attempt: u32) -> GitOutput {
        trace!("Attempt {}: {}", attempt, command_line);

        match self.executor.execute(command_line, request.cwd()).await {
            Ok(raw) if raw.success => GitOutput {
                error: None,
                stdout: raw.stdout,
                stderr: raw.stderr,
                attempts: attempt,
            },
            Ok(raw) => GitOutput {
                error: Some(Error::command_failed(command_line, raw.code, raw.stderr.clone())),
                stdout: raw.stdout,
                stderr: raw.stderr,
                attempts: attempt,
            },
            Err(e) => GitOutput {
                error: Some(Error::process_spawn(e.to_string())),
                stdout: String::new(),
                stderr: String::new(),
                attempts: attempt,
            },
        }
    }
}
