//! # gmv-git - Git Command Runner
//!
//! Builds git command lines, runs them through the platform shell and retries
//! while another process holds the repository's index lock.
//!
//! Depends on [`gmv_core`] for error handling, quoting and path resolution.
//!
//! ## Public API
//!
//! ### Requests
//! - [`GitRequest`] - Subcommand, options, files and working directory
//!
//! ### Running
//! - [`GitRunner`] - Runs a request with fixed-delay index-lock retry
//! - [`RetryPolicy`] - Attempt cap and delay (defaults: 8 attempts, 400 ms)
//! - [`GitOutput`] - Error (if any) plus captured output of the last attempt
//!
//! ### Execution Seam
//! - [`LocalCommandExecutor`] / [`CommandExecutor`] - Run one command line
//! - [`ShellExecutor`] - `sh -c` / `cmd /C` implementation
//!
//! ### Utilities
//! - [`is_index_locked()`] - Recognise git's index-lock error text
//! - [`GitAvailability`] - Locate git on PATH

pub mod availability;
pub mod executor;
pub mod index_lock;
pub mod request;
pub mod runner;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use availability::GitAvailability;
pub use executor::{CommandExecutor, LocalCommandExecutor, RawOutput, ShellExecutor};
pub use index_lock::is_index_locked;
pub use request::GitRequest;
pub use runner::{GitOutput, GitRunner, RetryPolicy, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY};
