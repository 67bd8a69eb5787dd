//! Detection of git index-lock contention
//!
//! When another git process holds the index, git refuses to run with:
//!
//! ```text
//! fatal: Unable to create '/path/to/repo/.git/index.lock': File exists.
//! ```
//!
//! That exact text is the only signal git gives, so the pattern below is a
//! compatibility point with git's message format.

use regex::Regex;
use std::sync::LazyLock;

static INDEX_LOCKED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^fatal: Unable to create.+\.git[/\\]index\.lock': File exists")
        .expect("index lock regex pattern is valid")
});

/// True when `stderr` carries git's index-lock error.
pub fn is_index_locked(stderr: &str) -> bool {
    INDEX_LOCKED_PATTERN.is_match(stderr)
}
