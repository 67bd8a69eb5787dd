//! Editor host abstraction
//!
//! The editor owns documents, tab groups and focus. This crate only reads that
//! state and asks the host to change it, through [`LocalEditorHost`].
//!
//! Tab reads are snapshots: closing one tab may renumber or invalidate the
//! others, so callers must re-query [`LocalEditorHost::tab_groups`] after
//! every mutation instead of holding on to a previous result.

use std::path::{Path, PathBuf};

use gmv_core::prelude::*;

/// Editor column a tab group occupies (1-based, as editors number them)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewColumn(pub u32);

/// Host-assigned tab identity, valid until the next tab mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(pub u64);

/// What a tab displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabInput {
    /// A text document backed by a file
    Text { path: PathBuf },
    /// Anything else (diff views, settings, webviews...)
    Other { kind: String },
}

impl TabInput {
    pub fn text_path(&self) -> Option<&Path> {
        match self {
            TabInput::Text { path } => Some(path),
            TabInput::Other { .. } => None,
        }
    }
}

/// One open tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: TabId,
    pub input: TabInput,
    /// Unpinned tab the editor may reuse for the next opened file
    pub is_preview: bool,
    /// The visible tab of its group
    pub is_active: bool,
}

impl Tab {
    pub fn shows_text(&self, path: &Path) -> bool {
        self.input.text_path() == Some(path)
    }
}

/// A group of tabs sharing one view column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    pub view_column: ViewColumn,
    pub tabs: Vec<Tab>,
}

impl TabGroup {
    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.is_active)
    }
}

/// An opened text document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    pub path: PathBuf,
}

/// How to display a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowOptions {
    pub view_column: ViewColumn,
    pub preview: bool,
    /// Keep input focus where it is
    pub preserve_focus: bool,
}

/// Save-dialog prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDialogOptions {
    pub default_path: PathBuf,
    pub save_label: String,
    pub title: String,
}

/// Operations this crate needs from the editor.
///
/// Implement [`LocalEditorHost`]; [`EditorHost`] is the `Send` variant for
/// hosts driven from spawned tasks.
#[trait_variant::make(EditorHost: Send)]
pub trait LocalEditorHost {
    /// Document of the focused text editor, if any
    async fn active_text_document(&self) -> Option<TextDocument>;

    /// Workspace roots, in the editor's order
    async fn workspace_folders(&self) -> Vec<PathBuf>;

    /// Ask the user for a destination. `None` when dismissed.
    async fn show_save_dialog(&self, options: SaveDialogOptions) -> Option<PathBuf>;

    /// Blocking error notification
    async fn show_error_message(&self, message: &str);

    /// Current tab groups across all windows
    async fn tab_groups(&self) -> Vec<TabGroup>;

    /// Close a tab. Invalidates previously returned [`TabId`]s.
    async fn close_tab(&self, tab: TabId) -> Result<()>;

    /// Open (or get) the document at `path`
    async fn open_text_document(&self, path: &Path) -> Result<TextDocument>;

    /// Display a document in a column
    async fn show_text_document(&self, document: &TextDocument, options: ShowOptions)
        -> Result<()>;
}
