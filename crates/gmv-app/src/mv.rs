//! The "git mv with save dialog" command
//!
//! Moves the active editor's file with `git mv` to a destination picked in a
//! save dialog, then points the open tabs at the new path.

use std::path::PathBuf;

use gmv_core::prelude::*;
use gmv_core::{find_workspace_folder, relative_inside, workspace_relative};
use gmv_git::{GitRequest, GitRunner, LocalCommandExecutor};

use crate::config::DialogSettings;
use crate::host::{LocalEditorHost, SaveDialogOptions};
use crate::tabs::reconcile_tabs;

/// How a move command ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No text editor was focused; nothing to move
    NoActiveEditor,
    /// The source or destination is outside every workspace root
    OutsideWorkspace { path: PathBuf },
    /// The user dismissed the save dialog
    Cancelled,
    /// `git mv` failed; the user has been shown `message`
    Failed {
        old: PathBuf,
        new: PathBuf,
        message: String,
    },
    /// The file moved and `tabs_migrated` tabs now show the new path
    Moved {
        old: PathBuf,
        new: PathBuf,
        tabs_migrated: usize,
    },
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Run the command against the active editor.
///
/// Paths in the outcome are relative to the workspace root. `Err` is only
/// returned for host failures while re-opening tabs, after the move itself
/// has succeeded.
pub async fn git_mv_with_save_dialog<H, E>(
    host: &H,
    runner: &GitRunner<E>,
    dialog: &DialogSettings,
) -> Result<MoveOutcome>
where
    H: LocalEditorHost,
    E: LocalCommandExecutor,
{
    let Some(document) = host.active_text_document().await else {
        debug!("No active text editor");
        return Ok(MoveOutcome::NoActiveEditor);
    };
    let old_path = document.path;

    let roots = host.workspace_folders().await;
    let Some(root) = find_workspace_folder(&old_path, &roots) else {
        return reject_outside_workspace(host, old_path).await;
    };
    let Some(old_relative) = workspace_relative(&old_path, root) else {
        return reject_outside_workspace(host, old_path).await;
    };

    let Some(new_path) = host
        .show_save_dialog(SaveDialogOptions {
            default_path: old_path.clone(),
            save_label: dialog.save_label.clone(),
            title: format!("git mv \"{}\" to:", old_relative.display()),
        })
        .await
    else {
        debug!("Save dialog dismissed");
        return Ok(MoveOutcome::Cancelled);
    };

    // The root itself is not a destination git can move a file to.
    let Some(new_relative) = relative_inside(&new_path, root) else {
        return reject_outside_workspace(host, new_path).await;
    };

    info!(
        "git mv {} -> {} in {}",
        old_relative.display(),
        new_relative.display(),
        root.display()
    );
    let output = runner
        .run(&GitRequest::mv(root, &old_relative, &new_relative))
        .await;

    if let Some(err) = output.error {
        let message = format!(
            "git mv \"{}\" to \"{}\" failed: {}",
            old_relative.display(),
            new_relative.display(),
            err
        );
        host.show_error_message(&message).await;
        return Ok(MoveOutcome::Failed {
            old: old_relative,
            new: new_relative,
            message,
        });
    }

    let tabs_migrated = reconcile_tabs(host, &old_path, &new_path).await?;

    Ok(MoveOutcome::Moved {
        old: old_relative,
        new: new_relative,
        tabs_migrated,
    })
}

async fn reject_outside_workspace<H: LocalEditorHost>(
    host: &H,
    path: PathBuf,
) -> Result<MoveOutcome> {
    let message = Error::outside_workspace(path.clone()).to_string();
    warn!("{}", message);
    host.show_error_message(&message).await;
    Ok(MoveOutcome::OutsideWorkspace { path })
}
