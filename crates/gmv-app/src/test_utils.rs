//! Test utilities for editor-host code
//!
//! [`FakeHost`] is an in-memory [`LocalEditorHost`] that behaves like a
//! tabbed editor: showing a document activates or creates its tab, preview
//! tabs are reused, and closing a tab renumbers every remaining tab so stale
//! [`TabId`]s are rejected.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use gmv_core::prelude::*;

use crate::host::{
    LocalEditorHost, SaveDialogOptions, ShowOptions, Tab, TabGroup, TabId, TabInput,
    TextDocument, ViewColumn,
};

/// Tab description used to seed a [`FakeHost`]
#[derive(Debug, Clone)]
pub struct FakeTab {
    input: TabInput,
    preview: bool,
    active: bool,
}

impl FakeTab {
    pub fn text(path: impl Into<PathBuf>) -> Self {
        Self {
            input: TabInput::Text { path: path.into() },
            preview: false,
            active: false,
        }
    }

    pub fn other(kind: impl Into<String>) -> Self {
        Self {
            input: TabInput::Other { kind: kind.into() },
            preview: false,
            active: false,
        }
    }

    pub fn preview(mut self) -> Self {
        self.preview = true;
        self
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }
}

#[derive(Debug, Default)]
struct FakeState {
    groups: Vec<TabGroup>,
    next_id: u64,
    focused: Option<ViewColumn>,
    active_document: Option<PathBuf>,
    workspace_folders: Vec<PathBuf>,
    save_response: Option<PathBuf>,
    unopenable: Vec<PathBuf>,
    errors: Vec<String>,
    dialogs: Vec<SaveDialogOptions>,
    show_calls: Vec<(PathBuf, ShowOptions)>,
    close_calls: usize,
    tab_group_queries: usize,
}

impl FakeState {
    fn fresh_id(&mut self) -> TabId {
        self.next_id += 1;
        TabId(self.next_id)
    }

    /// Every close invalidates all outstanding tab ids.
    fn renumber(&mut self) {
        let mut next = self.next_id;
        for group in &mut self.groups {
            for tab in &mut group.tabs {
                next += 1;
                tab.id = TabId(next);
            }
        }
        self.next_id = next;
    }

    fn group_mut(&mut self, column: ViewColumn) -> &mut TabGroup {
        if let Some(index) = self.groups.iter().position(|g| g.view_column == column) {
            return &mut self.groups[index];
        }
        self.groups.push(TabGroup {
            view_column: column,
            tabs: Vec::new(),
        });
        self.groups.sort_by_key(|g| g.view_column);
        let index = self
            .groups
            .iter()
            .position(|g| g.view_column == column)
            .expect("group was just inserted");
        &mut self.groups[index]
    }
}

/// In-memory editor host for tests
#[derive(Debug, Default)]
pub struct FakeHost {
    state: Mutex<FakeState>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake host state poisoned")
    }

    // ─────────────────────────────────────────────────────────
    // Builders
    // ─────────────────────────────────────────────────────────

    /// Add a tab group in `column` holding `tabs`, in order.
    pub fn with_group(self, column: u32, tabs: Vec<FakeTab>) -> Self {
        {
            let mut state = self.state();
            let tabs = tabs
                .into_iter()
                .map(|tab| Tab {
                    id: state.fresh_id(),
                    input: tab.input,
                    is_preview: tab.preview,
                    is_active: tab.active,
                })
                .collect();
            state.groups.push(TabGroup {
                view_column: ViewColumn(column),
                tabs,
            });
            state.groups.sort_by_key(|g| g.view_column);
        }
        self
    }

    pub fn with_focus(self, column: u32) -> Self {
        self.state().focused = Some(ViewColumn(column));
        self
    }

    pub fn with_active_document(self, path: impl Into<PathBuf>) -> Self {
        self.state().active_document = Some(path.into());
        self
    }

    pub fn with_workspace_folder(self, path: impl Into<PathBuf>) -> Self {
        self.state().workspace_folders.push(path.into());
        self
    }

    /// What the save dialog returns; unset means the user dismisses it.
    pub fn with_save_response(self, path: impl Into<PathBuf>) -> Self {
        self.state().save_response = Some(path.into());
        self
    }

    pub fn with_unopenable(self, path: impl Into<PathBuf>) -> Self {
        self.state().unopenable.push(path.into());
        self
    }

    // ─────────────────────────────────────────────────────────
    // Inspection
    // ─────────────────────────────────────────────────────────

    pub fn group(&self, column: ViewColumn) -> Option<TabGroup> {
        self.state()
            .groups
            .iter()
            .find(|g| g.view_column == column)
            .cloned()
    }

    /// Text paths of a group's tabs, in tab order.
    pub fn group_paths(&self, column: ViewColumn) -> Vec<PathBuf> {
        self.group(column)
            .map(|g| {
                g.tabs
                    .iter()
                    .filter_map(|t| t.input.text_path().map(Path::to_path_buf))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn focused_column(&self) -> Option<ViewColumn> {
        self.state().focused
    }

    pub fn errors(&self) -> Vec<String> {
        self.state().errors.clone()
    }

    pub fn dialogs(&self) -> Vec<SaveDialogOptions> {
        self.state().dialogs.clone()
    }

    pub fn show_calls(&self) -> Vec<(PathBuf, ShowOptions)> {
        self.state().show_calls.clone()
    }

    pub fn close_calls(&self) -> usize {
        self.state().close_calls
    }

    pub fn tab_group_queries(&self) -> usize {
        self.state().tab_group_queries
    }
}

impl LocalEditorHost for FakeHost {
    async fn active_text_document(&self) -> Option<TextDocument> {
        self.state()
            .active_document
            .clone()
            .map(|path| TextDocument { path })
    }

    async fn workspace_folders(&self) -> Vec<PathBuf> {
        self.state().workspace_folders.clone()
    }

    async fn show_save_dialog(&self, options: SaveDialogOptions) -> Option<PathBuf> {
        let mut state = self.state();
        state.dialogs.push(options);
        state.save_response.clone()
    }

    async fn show_error_message(&self, message: &str) {
        self.state().errors.push(message.to_string());
    }

    async fn tab_groups(&self) -> Vec<TabGroup> {
        let mut state = self.state();
        state.tab_group_queries += 1;
        state.groups.clone()
    }

    async fn close_tab(&self, tab: TabId) -> Result<()> {
        let mut state = self.state();

        let location = state.groups.iter().enumerate().find_map(|(g, group)| {
            group
                .tabs
                .iter()
                .position(|t| t.id == tab)
                .map(|index| (g, index))
        });
        let Some((g, index)) = location else {
            return Err(Error::host(format!("tab {} is no longer valid", tab.0)));
        };

        let group = &mut state.groups[g];
        let closed = group.tabs.remove(index);
        if closed.is_active && !group.tabs.is_empty() {
            let next = index.min(group.tabs.len() - 1);
            group.tabs[next].is_active = true;
        }

        state.close_calls += 1;
        state.renumber();
        Ok(())
    }

    async fn open_text_document(&self, path: &Path) -> Result<TextDocument> {
        if self.state().unopenable.iter().any(|p| p == path) {
            return Err(Error::host(format!("cannot open {}", path.display())));
        }
        Ok(TextDocument {
            path: path.to_path_buf(),
        })
    }

    async fn show_text_document(
        &self,
        document: &TextDocument,
        options: ShowOptions,
    ) -> Result<()> {
        let mut state = self.state();
        state
            .show_calls
            .push((document.path.clone(), options));
        let id = state.fresh_id();
        let group = state.group_mut(options.view_column);

        let active_index = group.tabs.iter().position(|t| t.is_active);
        for tab in &mut group.tabs {
            tab.is_active = false;
        }

        let input = TabInput::Text {
            path: document.path.clone(),
        };
        if let Some(existing) = group.tabs.iter_mut().find(|t| t.input == input) {
            existing.is_active = true;
            if !options.preview {
                existing.is_preview = false;
            }
        } else if let Some(reused) = group
            .tabs
            .iter_mut()
            .find(|t| t.is_preview && options.preview)
        {
            reused.input = input;
            reused.id = id;
            reused.is_active = true;
        } else {
            let at = active_index.map_or(group.tabs.len(), |i| i + 1);
            group.tabs.insert(
                at,
                Tab {
                    id,
                    input,
                    is_preview: options.preview,
                    is_active: true,
                },
            );
        }

        if !options.preserve_focus {
            state.focused = Some(options.view_column);
            state.active_document = Some(document.path.clone());
        }
        Ok(())
    }
}
