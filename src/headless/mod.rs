//! Headless mode - run the move command from a terminal
//!
//! There is no editor here: the "active document" is the source argument, the
//! save dialog is answered with the destination argument and there are no
//! tabs to reconcile. Results go to the terminal as text, or as NDJSON events
//! with `--json`.
//!
//! # Example Output
//!
//! ```json
//! {"event":"move_started","source":"/ws/a.txt","destination":"/ws/b.txt","timestamp":1704700001000}
//! {"event":"moved","old":"a.txt","new":"b.txt","tabs_migrated":0,"timestamp":1704700001050}
//! ```

pub mod host;
pub mod runner;

use std::io::{self, Write};
use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use gmv_app::MoveOutcome;

pub use host::HeadlessHost;
pub use runner::{run_headless, run_with_runner, HeadlessOptions};

/// Events emitted with `--json`
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A move was requested
    MoveStarted {
        source: String,
        destination: String,
        timestamp: i64,
    },

    /// A notification the editor would have shown to the user
    Notification { message: String, timestamp: i64 },

    /// The file moved
    Moved {
        old: String,
        new: String,
        tabs_migrated: usize,
        timestamp: i64,
    },

    /// `git mv` failed
    MoveFailed {
        old: String,
        new: String,
        message: String,
        timestamp: i64,
    },

    /// Source or destination outside every workspace root
    OutsideWorkspace { path: String, timestamp: i64 },

    /// Nothing was moved (no source, or no destination chosen)
    Skipped { reason: String, timestamp: i64 },

    /// The command could not run at all
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn move_started(source: &Path, destination: &Path) -> Self {
        Self::MoveStarted {
            source: source.display().to_string(),
            destination: destination.display().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn notification(message: &str) -> Self {
        Self::Notification {
            message: message.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    pub fn from_outcome(outcome: &MoveOutcome) -> Self {
        let timestamp = Self::now();
        match outcome {
            MoveOutcome::Moved {
                old,
                new,
                tabs_migrated,
            } => Self::Moved {
                old: old.display().to_string(),
                new: new.display().to_string(),
                tabs_migrated: *tabs_migrated,
                timestamp,
            },
            MoveOutcome::Failed { old, new, message } => Self::MoveFailed {
                old: old.display().to_string(),
                new: new.display().to_string(),
                message: message.clone(),
                timestamp,
            },
            MoveOutcome::OutsideWorkspace { path } => Self::OutsideWorkspace {
                path: path.display().to_string(),
                timestamp,
            },
            MoveOutcome::NoActiveEditor => Self::Skipped {
                reason: "no active editor".to_string(),
                timestamp,
            },
            MoveOutcome::Cancelled => Self::Skipped {
                reason: "no destination".to_string(),
                timestamp,
            },
        }
    }
}
