//! Tab reconciliation after a file move
//!
//! Every tab still showing the old path is closed and the new path is opened
//! in its place: same view column, same preview/pinned state. If the group's
//! active tab was some other text document, that document is shown again
//! afterwards so the user's focus does not follow the migration.
//!
//! The tab list is re-read on every iteration. Closing a tab is asynchronous
//! on the host side and invalidates the bookkeeping behind the other tabs, so
//! a snapshot taken before a close cannot be used after it.

use std::path::Path;

use gmv_core::prelude::*;

use crate::host::{LocalEditorHost, ShowOptions, Tab, TabGroup, TextDocument, ViewColumn};

/// The active tab of a group, captured before one of its tabs is closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTabSnapshot {
    pub document: TextDocument,
    pub view_column: ViewColumn,
    pub is_preview: bool,
}

/// Replace every open tab on `old_path` with `new_path`.
///
/// Returns how many tabs were migrated. Host errors propagate as-is: the file
/// has already moved, so there is nothing to roll back.
pub async fn reconcile_tabs<H: LocalEditorHost>(
    host: &H,
    old_path: &Path,
    new_path: &Path,
) -> Result<usize> {
    let new_document = host.open_text_document(new_path).await?;
    let mut migrated = 0;

    loop {
        let groups = host.tab_groups().await;
        let Some((group, old_tab)) = find_old_tab(&groups, old_path) else {
            break;
        };

        let active = active_tab_snapshot(host, group).await?;

        host.close_tab(old_tab.id).await?;
        host.show_text_document(
            &new_document,
            ShowOptions {
                view_column: group.view_column,
                preview: old_tab.is_preview,
                preserve_focus: true,
            },
        )
        .await?;
        migrated += 1;
        debug!(
            "Reopened {} in column {} (preview: {})",
            new_path.display(),
            group.view_column.0,
            old_tab.is_preview
        );

        let Some(active) = active else {
            continue;
        };
        // The moved file was itself active: the reopen above already took its place.
        if active.document.path == old_path {
            continue;
        }

        host.show_text_document(
            &active.document,
            ShowOptions {
                view_column: active.view_column,
                preview: active.is_preview,
                preserve_focus: false,
            },
        )
        .await?;
    }

    info!(
        "Migrated {} tab(s) from {} to {}",
        migrated,
        old_path.display(),
        new_path.display()
    );
    Ok(migrated)
}

/// First tab, across all groups, showing `old_path` as a text document.
fn find_old_tab<'a>(groups: &'a [TabGroup], old_path: &Path) -> Option<(&'a TabGroup, &'a Tab)> {
    groups.iter().find_map(|group| {
        group
            .tabs
            .iter()
            .find(|tab| tab.shows_text(old_path))
            .map(|tab| (group, tab))
    })
}

/// Capture the group's active tab when it shows a text document.
async fn active_tab_snapshot<H: LocalEditorHost>(
    host: &H,
    group: &TabGroup,
) -> Result<Option<ActiveTabSnapshot>> {
    let Some(active) = group.active_tab() else {
        return Ok(None);
    };
    let Some(path) = active.input.text_path() else {
        return Ok(None);
    };

    let document = host.open_text_document(path).await?;
    Ok(Some(ActiveTabSnapshot {
        document,
        view_column: group.view_column,
        is_preview: active.is_preview,
    }))
}
