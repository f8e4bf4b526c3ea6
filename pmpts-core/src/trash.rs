//! Trash-based soft deletion.
//!
//! Removed or superseded prompt files are never deleted outright; they are
//! moved into a `.trash` subdirectory of the root, renamed to
//! `{unix_timestamp}_{original_filename}` so entries stay unique and keep
//! their provenance. Trash entries are never cleaned up by this crate.

use crate::store::{StoreError, move_file};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the trash subdirectory inside a prompts root.
pub const TRASH_DIR: &str = ".trash";

/// The trash directory for a given root.
pub fn trash_dir(root: &Path) -> PathBuf {
    root.join(TRASH_DIR)
}

/// Moves `path` into the trash directory of `root`, creating the trash
/// directory if needed.
///
/// On failure the original file remains at its original location. Two
/// trashings of the same basename within the same second collide on the
/// trash name; the last one wins.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The path of the trashed file.
/// * `StoreError::Io` - If the move failed.
pub fn trash_file(root: &Path, path: &Path) -> Result<PathBuf, StoreError> {
    trash_file_tagged(root, path, "")
}

/// Like [`trash_file`], with `tag` appended to the trash name. Used by undo
/// to mark superseding copies (`.added`).
pub(crate) fn trash_file_tagged(
    root: &Path,
    path: &Path,
    tag: &str,
) -> Result<PathBuf, StoreError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| StoreError::NotFound(path.display().to_string()))?;

    let dir = trash_dir(root);
    fs::create_dir_all(&dir)?;

    let trashed = dir.join(format!("{}_{}{}", Utc::now().timestamp(), name, tag));
    move_file(path, &trashed)?;
    debug!(src = %path.display(), dest = %trashed.display(), "moved file to trash");
    Ok(trashed)
}
