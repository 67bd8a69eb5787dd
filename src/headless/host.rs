//! Editor host backed by command-line arguments

use std::path::{Path, PathBuf};

use gmv_app::{LocalEditorHost, SaveDialogOptions, ShowOptions, TabGroup, TabId, TextDocument};
use gmv_core::prelude::*;

use super::HeadlessEvent;

/// A host with one "open" document and a pre-answered save dialog
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    source: PathBuf,
    destination: Option<PathBuf>,
    workspace_folders: Vec<PathBuf>,
    json: bool,
}

impl HeadlessHost {
    pub fn new(
        source: PathBuf,
        destination: Option<PathBuf>,
        workspace_folders: Vec<PathBuf>,
    ) -> Self {
        Self {
            source,
            destination,
            workspace_folders,
            json: false,
        }
    }

    /// Report notifications as NDJSON events instead of stderr lines.
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

impl LocalEditorHost for HeadlessHost {
    async fn active_text_document(&self) -> Option<TextDocument> {
        Some(TextDocument {
            path: self.source.clone(),
        })
    }

    async fn workspace_folders(&self) -> Vec<PathBuf> {
        self.workspace_folders.clone()
    }

    async fn show_save_dialog(&self, options: SaveDialogOptions) -> Option<PathBuf> {
        debug!("{} -> {:?}", options.title, self.destination);
        self.destination.clone()
    }

    async fn show_error_message(&self, message: &str) {
        if self.json {
            HeadlessEvent::notification(message).emit();
        } else {
            eprintln!("{}", message);
        }
    }

    async fn tab_groups(&self) -> Vec<TabGroup> {
        Vec::new()
    }

    async fn close_tab(&self, tab: TabId) -> Result<()> {
        Err(Error::host(format!(
            "tab {} does not exist: the headless host has no tabs",
            tab.0
        )))
    }

    async fn open_text_document(&self, path: &Path) -> Result<TextDocument> {
        Ok(TextDocument {
            path: path.to_path_buf(),
        })
    }

    async fn show_text_document(
        &self,
        _document: &TextDocument,
        _options: ShowOptions,
    ) -> Result<()> {
        Ok(())
    }
}
