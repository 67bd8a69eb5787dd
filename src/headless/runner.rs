//! Headless mode runner - one move, then exit

use std::path::{Path, PathBuf};

use gmv_app::{dispatch, load_settings, Command, MoveOutcome, Settings};
use gmv_core::prelude::*;
use gmv_core::{find_workspace_folder, normalize_root};
use gmv_git::{GitAvailability, GitRunner, LocalCommandExecutor};

use super::{HeadlessEvent, HeadlessHost};

/// What to move, and where the workspace is
#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub workspace_folders: Vec<PathBuf>,
    pub json: bool,
}

impl HeadlessOptions {
    /// Make every path absolute against `cwd`, with roots and parent
    /// directories canonical where they exist.
    ///
    /// With no workspace folders, `cwd` becomes the only one.
    pub fn resolve(mut self, cwd: &Path) -> Self {
        if self.workspace_folders.is_empty() {
            self.workspace_folders.push(cwd.to_path_buf());
        }
        self.workspace_folders = self
            .workspace_folders
            .iter()
            .map(|root| normalize_root(&absolute(cwd, root)))
            .collect();
        self.source = resolve_path(cwd, &self.source);
        self.destination = resolve_path(cwd, &self.destination);
        self
    }

    /// The root whose `.gmv/config.toml` applies: the one holding the source,
    /// else the first.
    pub fn settings_root(&self) -> Option<&Path> {
        find_workspace_folder(&self.source, &self.workspace_folders)
            .or_else(|| self.workspace_folders.first().map(PathBuf::as_path))
    }
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Canonicalise the parent only: a symlink is moved itself, not its target,
/// and the destination usually does not exist yet.
fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    let path = absolute(cwd, path);
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if parent.exists() => normalize_root(parent).join(name),
        _ => path,
    }
}

/// Run the move with the configured git, after checking git is usable.
pub async fn run_headless(options: &HeadlessOptions) -> Result<MoveOutcome> {
    info!(
        "git-mv-tabs headless: {} -> {}",
        options.source.display(),
        options.destination.display()
    );

    let settings = options
        .settings_root()
        .map(load_settings)
        .unwrap_or_default();

    let git = GitAvailability::check(&settings.git.program)
        .await
        .require(&settings.git.program)?;
    debug!(
        "Using {} ({})",
        git.path.as_deref().unwrap_or(Path::new("?")).display(),
        git.version.as_deref().unwrap_or("unknown version")
    );

    run_with_runner(options, &settings.git.runner(), &settings).await
}

/// Run the move through `runner` and report the outcome.
pub async fn run_with_runner<E: LocalCommandExecutor>(
    options: &HeadlessOptions,
    runner: &GitRunner<E>,
    settings: &Settings,
) -> Result<MoveOutcome> {
    let host = HeadlessHost::new(
        options.source.clone(),
        Some(options.destination.clone()),
        options.workspace_folders.clone(),
    )
    .json(options.json);

    if options.json {
        HeadlessEvent::move_started(&options.source, &options.destination).emit();
    }

    let outcome = dispatch(Command::GitMvWithSaveDialog, &host, runner, settings).await?;
    report(&outcome, options.json);
    Ok(outcome)
}

fn report(outcome: &MoveOutcome, json: bool) {
    if json {
        HeadlessEvent::from_outcome(outcome).emit();
        return;
    }
    // Failures were already printed as notifications.
    if let MoveOutcome::Moved { old, new, .. } = outcome {
        println!("Moved {} -> {}", old.display(), new.display());
    }
}
