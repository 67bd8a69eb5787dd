//! Integration tests against a real git repository
//!
//! Each test skips itself when git is not installed.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tempfile::TempDir;

use git_mv_tabs::{run_headless, HeadlessOptions};
use gmv_app::test_utils::{FakeHost, FakeTab};
use gmv_app::{git_mv_with_save_dialog, DialogSettings, MoveOutcome, ViewColumn};
use gmv_core::normalize_root;
use gmv_git::{GitRequest, GitRunner, RetryPolicy};

fn git_available() -> bool {
    if which::which("git").is_err() {
        eprintln!("git not found, skipping");
        return false;
    }
    true
}

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Repository with `a.txt` staged. Returns the tempdir and its canonical path.
fn create_repo() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = normalize_root(temp.path());
    git(&root, &["init", "--quiet"]);
    fs::write(root.join("a.txt"), "hello\n").unwrap();
    git(&root, &["add", "a.txt"]);
    (temp, root)
}

#[tokio::test]
async fn test_move_tracked_file_and_migrate_tab() {
    if !git_available() {
        return;
    }
    let (_temp, root) = create_repo();
    let host = FakeHost::new()
        .with_workspace_folder(&root)
        .with_active_document(root.join("a.txt"))
        .with_save_response(root.join("b.txt"))
        .with_group(1, vec![FakeTab::text(root.join("a.txt")).active()]);

    let outcome = git_mv_with_save_dialog(&host, &GitRunner::new(), &DialogSettings::default())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            old: PathBuf::from("a.txt"),
            new: PathBuf::from("b.txt"),
            tabs_migrated: 1,
        }
    );
    assert!(!root.join("a.txt").exists());
    assert!(root.join("b.txt").exists());
    assert!(git(&root, &["status", "--porcelain"]).contains("b.txt"));
    assert_eq!(host.group_paths(ViewColumn(1)), vec![root.join("b.txt")]);
    assert!(host.errors().is_empty());
}

#[tokio::test]
async fn test_file_names_with_spaces_and_quotes() {
    if !git_available() {
        return;
    }
    let (_temp, root) = create_repo();
    let source = root.join("it's a file.txt");
    fs::write(&source, "x\n").unwrap();
    git(&root, &["add", "--", "it's a file.txt"]);
    let host = FakeHost::new()
        .with_workspace_folder(&root)
        .with_active_document(&source)
        .with_save_response(root.join("renamed $HOME.txt"));

    let outcome = git_mv_with_save_dialog(&host, &GitRunner::new(), &DialogSettings::default())
        .await
        .unwrap();

    assert!(outcome.is_moved(), "{:?}", outcome);
    assert!(root.join("renamed $HOME.txt").exists());
}

#[tokio::test]
async fn test_untracked_file_reports_failure() {
    if !git_available() {
        return;
    }
    let (_temp, root) = create_repo();
    fs::write(root.join("untracked.txt"), "x\n").unwrap();
    let host = FakeHost::new()
        .with_workspace_folder(&root)
        .with_active_document(root.join("untracked.txt"))
        .with_save_response(root.join("moved.txt"))
        .with_group(1, vec![FakeTab::text(root.join("untracked.txt")).active()]);

    let outcome = git_mv_with_save_dialog(&host, &GitRunner::new(), &DialogSettings::default())
        .await
        .unwrap();

    let MoveOutcome::Failed { message, .. } = outcome else {
        panic!("expected failure, got {:?}", outcome);
    };
    assert!(message.starts_with("git mv \"untracked.txt\" to \"moved.txt\" failed: "));
    assert_eq!(host.errors(), vec![message]);
    assert!(root.join("untracked.txt").exists());
    // No reconciliation after a failed move
    assert_eq!(host.group_paths(ViewColumn(1)), vec![root.join("untracked.txt")]);
}

#[tokio::test]
async fn test_held_index_lock_exhausts_attempts() {
    if !git_available() {
        return;
    }
    let (_temp, root) = create_repo();
    fs::write(root.join(".git/index.lock"), "").unwrap();
    let runner = GitRunner::new().retry_policy(RetryPolicy::new(2, Duration::from_millis(10)));

    let output = runner.run(&GitRequest::mv(&root, "a.txt", "b.txt")).await;

    assert!(!output.is_success());
    assert!(output.is_index_locked());
    assert_eq!(output.attempts, 2);
    assert!(root.join("a.txt").exists());
}

#[tokio::test]
async fn test_index_lock_released_during_retry() {
    if !git_available() {
        return;
    }
    let (_temp, root) = create_repo();
    let lock = root.join(".git/index.lock");
    fs::write(&lock, "").unwrap();
    let runner = GitRunner::new().retry_policy(RetryPolicy::new(40, Duration::from_millis(50)));

    let release = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(150)).await;
        fs::remove_file(&lock).unwrap();
    });
    let output = runner.run(&GitRequest::mv(&root, "a.txt", "b.txt")).await;
    release.await.unwrap();

    assert!(output.is_success(), "{:?}", output.error);
    assert!(output.attempts > 1);
    assert!(root.join("b.txt").exists());
}

#[tokio::test]
async fn test_headless_run_with_config() {
    if !git_available() {
        return;
    }
    let (_temp, root) = create_repo();
    fs::create_dir(root.join(".gmv")).unwrap();
    fs::write(
        root.join(".gmv/config.toml"),
        "[git]\nmax_attempts = 1\nretry_delay_ms = 0\n",
    )
    .unwrap();
    fs::write(root.join(".git/index.lock"), "").unwrap();

    let options = HeadlessOptions {
        source: PathBuf::from("a.txt"),
        destination: PathBuf::from("b.txt"),
        workspace_folders: Vec::new(),
        json: true,
    }
    .resolve(&root);

    let outcome = run_headless(&options).await.unwrap();

    // One attempt only, so the lock is reported immediately
    let MoveOutcome::Failed { message, .. } = outcome else {
        panic!("expected failure, got {:?}", outcome);
    };
    assert!(message.contains("index.lock"));
}

#[tokio::test]
async fn test_headless_nested_source_from_subdirectory() {
    if !git_available() {
        return;
    }
    let (_temp, root) = create_repo();
    let cwd = root.join("src/deep");
    fs::create_dir_all(&cwd).unwrap();
    fs::write(cwd.join("n.txt"), "nested\n").unwrap();
    git(&root, &["add", "src/deep/n.txt"]);

    let options = HeadlessOptions {
        source: PathBuf::from("n.txt"),
        destination: PathBuf::from("m.txt"),
        workspace_folders: vec![PathBuf::from("../..")],
        json: false,
    }
    .resolve(&cwd);

    let outcome = run_headless(&options).await.unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            old: PathBuf::from("src/deep/n.txt"),
            new: PathBuf::from("src/deep/m.txt"),
            tabs_migrated: 0,
        }
    );
    assert!(!cwd.join("n.txt").exists());
    assert!(cwd.join("m.txt").exists());
}

#[tokio::test]
async fn test_destination_equal_to_root_is_rejected() {
    if !git_available() {
        return;
    }
    let (_temp, root) = create_repo();
    let host = FakeHost::new()
        .with_workspace_folder(&root)
        .with_active_document(root.join("a.txt"))
        .with_save_response(&root);

    let outcome = git_mv_with_save_dialog(&host, &GitRunner::new(), &DialogSettings::default())
        .await
        .unwrap();

    assert_eq!(outcome, MoveOutcome::OutsideWorkspace { path: root.clone() });
    assert_eq!(host.errors().len(), 1);
    assert!(root.join("a.txt").exists());
    assert!(git(&root, &["status", "--porcelain"]).contains("a.txt"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_headless_moves_symlink_not_target() {
    if !git_available() {
        return;
    }
    let (_temp, root) = create_repo();
    fs::create_dir(root.join("real")).unwrap();
    fs::write(root.join("real/target.txt"), "target\n").unwrap();
    std::os::unix::fs::symlink("real/target.txt", root.join("link.txt")).unwrap();
    git(&root, &["add", "real/target.txt", "link.txt"]);

    let options = HeadlessOptions {
        source: PathBuf::from("link.txt"),
        destination: PathBuf::from("moved.txt"),
        workspace_folders: Vec::new(),
        json: false,
    }
    .resolve(&root);

    let outcome = run_headless(&options).await.unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            old: PathBuf::from("link.txt"),
            new: PathBuf::from("moved.txt"),
            tabs_migrated: 0,
        }
    );
    let moved = fs::symlink_metadata(root.join("moved.txt")).unwrap();
    assert!(moved.file_type().is_symlink());
    assert!(root.join("real/target.txt").exists());
    assert!(fs::symlink_metadata(root.join("link.txt")).is_err());
}
