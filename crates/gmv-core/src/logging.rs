//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "gmv.log";

const DEFAULT_FILTER: &str = "git_mv_tabs=info,gmv_core=info,gmv_git=info,gmv_app=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/git-mv-tabs/logs/` so that stdout and
/// stderr stay free for the command's own output.
/// Log level is controlled by the `GMV_LOG` environment variable.
///
/// # Examples
/// ```bash
/// GMV_LOG=debug gmv src/a.rs src/b.rs
/// GMV_LOG=gmv_git=trace gmv src/a.rs src/b.rs
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via GMV_LOG
    let env_filter = EnvFilter::try_from_env("GMV_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| crate::Error::config(format!("logging already initialized: {}", e)))?;

    tracing::debug!("Logging to {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("git-mv-tabs").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_app_specific() {
        assert!(get_log_directory().ends_with("git-mv-tabs/logs"));
    }

    #[test]
    fn test_default_filter_parses() {
        let filter = EnvFilter::try_new(DEFAULT_FILTER).unwrap();
        assert!(filter.to_string().contains("gmv_git=info"));
    }

    #[test]
    fn test_default_filter_names_crate_targets() {
        let targets: Vec<&str> = DEFAULT_FILTER
            .split(',')
            .filter_map(|directive| directive.split_once('=').map(|(target, _)| target))
            .collect();
        assert_eq!(targets, ["git_mv_tabs", "gmv_core", "gmv_git", "gmv_app"]);
    }
}
