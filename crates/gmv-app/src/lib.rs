//! gmv-app - Editor-facing side of git-mv-tabs
//!
//! Defines the editor host seam, the tab reconciler that follows a moved file
//! across tab groups, the "git mv with save dialog" command and workspace
//! configuration loading.

pub mod commands;
pub mod config;
pub mod host;
pub mod mv;
pub mod tabs;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Re-export primary types
pub use commands::{dispatch, Command, GIT_MV_WITH_SAVE_DIALOG};
pub use config::{load_settings, DialogSettings, GitSettings, Settings};
pub use host::{
    EditorHost, LocalEditorHost, SaveDialogOptions, ShowOptions, Tab, TabGroup, TabId, TabInput,
    TextDocument, ViewColumn,
};
pub use mv::{git_mv_with_save_dialog, MoveOutcome};
pub use tabs::{reconcile_tabs, ActiveTabSnapshot};
