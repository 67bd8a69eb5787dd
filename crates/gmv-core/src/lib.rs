//! # gmv-core - Core Types
//!
//! Foundation crate for git-mv-tabs. Provides error handling, logging setup,
//! shell quoting and workspace path resolution.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ### Shell Quoting (`shell`)
//! - [`ShellDialect`] - POSIX or Windows quoting rules, chosen per target
//!
//! ### Workspace Paths (`paths`)
//! - [`find_workspace_folder()`] - Root containing a file
//! - [`relative_to()`] - Absolute path rewritten relative to a directory
//! - [`workspace_relative()`] - Path relative to its workspace root
//! - [`relative_inside()`] - Path strictly below a root
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use gmv_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod paths;
pub mod shell;

/// Prelude for common imports used throughout all git-mv-tabs crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use paths::{
    find_workspace_folder, normalize_root, relative_inside, relative_to, workspace_relative,
};
pub use shell::ShellDialect;
