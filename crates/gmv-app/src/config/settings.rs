//! Settings parser for .gmv/config.toml

use super::types::Settings;
use gmv_core::prelude::*;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const GMV_DIR: &str = ".gmv";

/// Load settings from `.gmv/config.toml` in the workspace root.
///
/// A missing or unreadable file yields the defaults.
pub fn load_settings(workspace_root: &Path) -> Settings {
    let config_path = workspace_root.join(GMV_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.gmv/config.toml` with commented defaults. Existing files are kept.
pub fn init_config_dir(workspace_root: &Path) -> Result<()> {
    let gmv_dir = workspace_root.join(GMV_DIR);

    if !gmv_dir.exists() {
        std::fs::create_dir_all(&gmv_dir)
            .map_err(|e| Error::config(format!("Failed to create .gmv dir: {}", e)))?;
    }

    let config_path = gmv_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# git-mv-tabs configuration

[git]
program = "git"         # Executable name on PATH, or a full path
max_attempts = 8        # Total attempts while .git/index.lock is held
retry_delay_ms = 400    # Fixed wait between attempts

[dialog]
save_label = "Move Here (git mv)"
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
