//! Configuration file parsing for git-mv-tabs
//!
//! Supports:
//! - `.gmv/config.toml` - Per-workspace settings

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, CONFIG_FILENAME, GMV_DIR};
pub use types::*;
