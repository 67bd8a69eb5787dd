//! Command registry
//!
//! Editors invoke commands by string id; [`Command::from_id`] maps those ids
//! to handlers and [`dispatch`] runs them.

use gmv_core::prelude::*;
use gmv_git::{GitRunner, LocalCommandExecutor};

use crate::config::Settings;
use crate::host::LocalEditorHost;
use crate::mv::{git_mv_with_save_dialog, MoveOutcome};

/// Registered id of the move command
pub const GIT_MV_WITH_SAVE_DIALOG: &str = "git-mv-with-save-dialog.gitMvWithSaveDialog";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    GitMvWithSaveDialog,
}

impl Command {
    pub const ALL: &'static [Command] = &[Command::GitMvWithSaveDialog];

    pub fn id(&self) -> &'static str {
        match self {
            Command::GitMvWithSaveDialog => GIT_MV_WITH_SAVE_DIALOG,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|command| command.id() == id)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Run `command` against `host`.
pub async fn dispatch<H, E>(
    command: Command,
    host: &H,
    runner: &GitRunner<E>,
    settings: &Settings,
) -> Result<MoveOutcome>
where
    H: LocalEditorHost,
    E: LocalCommandExecutor,
{
    debug!("Dispatching {}", command);
    match command {
        Command::GitMvWithSaveDialog => {
            git_mv_with_save_dialog(host, runner, &settings.dialog).await
        }
    }
}
