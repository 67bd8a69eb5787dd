//! Workspace containment and relative path resolution

use std::path::{Path, PathBuf};

/// Find the workspace root that contains `file_path`.
///
/// Containment is component-wise, so `/ws` does not claim `/ws-other/a.txt`.
/// The first matching root wins, in the order the host lists them.
pub fn find_workspace_folder<'a>(file_path: &Path, roots: &'a [PathBuf]) -> Option<&'a Path> {
    roots
        .iter()
        .map(PathBuf::as_path)
        .find(|root| file_path.starts_with(root))
}

/// `path` expressed relative to `base`.
///
/// Relative inputs are returned unchanged. Inputs that share no prefix with
/// `base` (another drive on Windows) are also returned unchanged.
pub fn relative_to(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        return path.to_path_buf();
    }
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

/// `path` relative to `root` when it lies strictly below it.
///
/// The root itself is not inside, so it yields `None`.
pub fn relative_inside(path: &Path, root: &Path) -> Option<PathBuf> {
    let relative = path.strip_prefix(root).ok()?;
    (!relative.as_os_str().is_empty()).then(|| relative.to_path_buf())
}

/// Path of `file_path` relative to the workspace root containing it.
///
/// Returns `None` when the file is outside `root`. A file that *is* the root
/// yields its file name, so there is always something to show the user.
pub fn workspace_relative(file_path: &Path, root: &Path) -> Option<PathBuf> {
    if !file_path.starts_with(root) {
        return None;
    }
    relative_inside(file_path, root).or_else(|| file_path.file_name().map(PathBuf::from))
}

/// Canonical form of a workspace root, without `\\?\` prefixes on Windows.
///
/// Falls back to the path as given when it cannot be resolved (e.g. it does
/// not exist yet).
pub fn normalize_root(root: &Path) -> PathBuf {
    dunce::canonicalize(root).unwrap_or_else(|e| {
        tracing::debug!("Could not canonicalize {}: {}", root.display(), e);
        root.to_path_buf()
    })
}
