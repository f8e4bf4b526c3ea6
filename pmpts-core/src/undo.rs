//! Reversal of the last recorded mutation.
//!
//! Undo is single-shot: the caller loads the persisted [`LastAction`],
//! passes it in by value, and persists the cleared slot only after a
//! successful reversal. A second undo therefore fails with
//! [`StoreError::NoAction`]. There is no redo.
//!
//! Rename entries are recorded but cannot be reversed; they fail with
//! [`StoreError::UnsupportedAction`] and are left in place.

use crate::action::LastAction;
use crate::store::{StoreError, move_file};
use crate::trash::trash_file_tagged;
use std::path::{Path, PathBuf};
use std::{env, fs};
use tracing::debug;

/// What an undo actually did, for the caller's reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// A removed prompt was restored from the trash to its original path.
    Restored { dest: PathBuf },
    /// The file overwritten by an add was restored; the added copy was kept
    /// in the trash under an `.added`-tagged name.
    RestoredOverwritten {
        dest: PathBuf,
        added_trash: PathBuf,
    },
    /// An added prompt was moved back to where it came from.
    MovedBack { dest: PathBuf, src: PathBuf },
    /// An added prompt could not go back to its source; it was moved into
    /// the current working directory instead.
    MovedToCwd { path: PathBuf },
}

/// Reverses the given action log entry.
///
/// # Arguments
///
/// * `last` - The persisted log entry, if any.
///
/// # Returns
///
/// * `Ok(UndoOutcome)` - What was done; the caller should now clear the slot.
/// * `StoreError::NoAction` - If the log is empty.
/// * `StoreError::NotFound` - If a file the entry refers to no longer exists.
/// * `StoreError::UnsupportedAction` - For rename entries.
/// * `StoreError::UnknownAction` - For unrecognized entries.
pub fn perform_undo(last: Option<LastAction>) -> Result<UndoOutcome, StoreError> {
    let Some(last) = last else {
        return Err(StoreError::NoAction);
    };
    match last {
        LastAction::Remove { dest, trashed } => undo_remove(dest, trashed),
        LastAction::Add {
            src,
            dest,
            overwritten_trash,
        } => undo_add(src, dest, overwritten_trash),
        LastAction::Rename { .. } => Err(StoreError::UnsupportedAction("rename")),
        LastAction::Unknown => Err(StoreError::UnknownAction),
    }
}

fn undo_remove(dest: PathBuf, trashed: PathBuf) -> Result<UndoOutcome, StoreError> {
    if !trashed.exists() {
        return Err(StoreError::NotFound(trashed.display().to_string()));
    }
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    move_file(&trashed, &dest)?;
    debug!(dest = %dest.display(), "restored removed prompt from trash");
    Ok(UndoOutcome::Restored { dest })
}

fn undo_add(
    src: PathBuf,
    dest: PathBuf,
    overwritten_trash: Option<PathBuf>,
) -> Result<UndoOutcome, StoreError> {
    if !dest.exists() {
        return Err(StoreError::NotFound(dest.display().to_string()));
    }

    // The add replaced an existing prompt: put the added copy in the trash
    // and bring the overwritten one back.
    if let Some(trashed) = overwritten_trash.filter(|t| t.exists()) {
        let root = dest
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let added_trash = trash_file_tagged(&root, &dest, ".added")?;
        move_file(&trashed, &dest)?;
        return Ok(UndoOutcome::RestoredOverwritten { dest, added_trash });
    }

    if restore_to_source(&dest, &src) {
        debug!(src = %src.display(), "moved added prompt back to its source");
        return Ok(UndoOutcome::MovedBack { dest, src });
    }

    let name = dest
        .file_name()
        .ok_or_else(|| StoreError::NotFound(dest.display().to_string()))?;
    let fallback = env::current_dir()?.join(name);
    move_file(&dest, &fallback)?;
    Ok(UndoOutcome::MovedToCwd { path: fallback })
}

fn restore_to_source(dest: &Path, src: &Path) -> bool {
    if let Some(parent) = src.parent() {
        if !parent.as_os_str().is_empty() && fs::create_dir_all(parent).is_err() {
            return false;
        }
    }
    move_file(dest, src).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::StaticConfirm;
    use crate::store::PromptStore;
    use crate::trash::trash_dir;
    use tempfile::TempDir;

    fn store(temp_dir: &TempDir) -> PromptStore {
        let store = PromptStore::new(temp_dir.path().join("prompts"));
        store.ensure_root().unwrap();
        store
    }

    #[test]
    fn test_undo_empty_log() {
        let result = perform_undo(None);
        assert!(matches!(result.unwrap_err(), StoreError::NoAction));
    }

    #[test]
    fn test_undo_remove_restores_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        let path = store.root.join("notes.prompt.md");
        fs::write(&path, "exact bytes \u{1F680}").unwrap();

        let action = store
            .remove_prompt("notes", true, &StaticConfirm(true))
            .unwrap();
        assert!(!path.exists());

        let outcome = perform_undo(Some(action)).unwrap();

        assert_eq!(outcome, UndoOutcome::Restored { dest: path.clone() });
        assert_eq!(fs::read_to_string(&path).unwrap(), "exact bytes \u{1F680}");
    }

    #[test]
    fn test_undo_remove_missing_trash_entry() {
        let temp_dir = TempDir::new().unwrap();
        let action = LastAction::Remove {
            dest: temp_dir.path().join("notes.prompt.md"),
            trashed: temp_dir.path().join(".trash/1_notes.prompt.md"),
        };

        let result = perform_undo(Some(action));
        assert!(matches!(result.unwrap_err(), StoreError::NotFound(_)));
    }

    #[test]
    fn test_undo_add_moves_back_to_source() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        let src = temp_dir.path().join("incoming").join("notes");
        fs::create_dir_all(src.parent().unwrap()).unwrap();
        fs::write(&src, "draft").unwrap();

        let action = store.add_file(&src, false, &StaticConfirm(true)).unwrap();
        let dest = store.root.join("notes.prompt.md");
        assert!(dest.exists());

        let outcome = perform_undo(Some(action)).unwrap();

        assert_eq!(
            outcome,
            UndoOutcome::MovedBack {
                dest: dest.clone(),
                src: src.clone(),
            }
        );
        assert!(!dest.exists());
        assert_eq!(fs::read_to_string(&src).unwrap(), "draft");
    }

    #[test]
    fn test_undo_add_recreates_source_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        let src_dir = temp_dir.path().join("incoming");
        let src = src_dir.join("notes");
        fs::create_dir_all(&src_dir).unwrap();
        fs::write(&src, "draft").unwrap();

        let action = store.add_file(&src, false, &StaticConfirm(true)).unwrap();
        fs::remove_dir_all(&src_dir).unwrap();

        perform_undo(Some(action)).unwrap();
        assert_eq!(fs::read_to_string(&src).unwrap(), "draft");
    }

    #[test]
    fn test_undo_add_restores_overwritten_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        let dest = store.root.join("notes.prompt.md");
        fs::write(&dest, "original").unwrap();
        let src = temp_dir.path().join("notes");
        fs::write(&src, "replacement").unwrap();

        let action = store.add_file(&src, true, &StaticConfirm(true)).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "replacement");

        let outcome = perform_undo(Some(action)).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "original");
        let added_trash = match outcome {
            UndoOutcome::RestoredOverwritten { added_trash, .. } => added_trash,
            other => panic!("expected RestoredOverwritten, got {other:?}"),
        };
        assert!(
            added_trash
                .file_name()
                .unwrap()
                .to_str()
                .unwrap()
                .ends_with("notes.prompt.md.added")
        );
        assert_eq!(fs::read_to_string(&added_trash).unwrap(), "replacement");
        assert!(added_trash.starts_with(trash_dir(&store.root)));
    }

    #[test]
    fn test_undo_add_missing_destination() {
        let temp_dir = TempDir::new().unwrap();
        let action = LastAction::Add {
            src: temp_dir.path().join("notes"),
            dest: temp_dir.path().join("prompts").join("notes.prompt.md"),
            overwritten_trash: None,
        };

        let result = perform_undo(Some(action));
        assert!(matches!(result.unwrap_err(), StoreError::NotFound(_)));
    }

    #[test]
    fn test_undo_rename_unsupported() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        fs::write(store.root.join("a.prompt.md"), "alpha").unwrap();

        let action = store
            .rename_prompt("a", "b", false, &StaticConfirm(true))
            .unwrap();
        let result = perform_undo(Some(action));

        match result.unwrap_err() {
            StoreError::UnsupportedAction(kind) => assert_eq!(kind, "rename"),
            other => panic!("expected UnsupportedAction, got {other:?}"),
        }
        // The rename itself stands.
        assert!(store.root.join("b.prompt.md").exists());
    }

    #[test]
    fn test_undo_unknown_action() {
        let result = perform_undo(Some(LastAction::Unknown));
        assert!(matches!(result.unwrap_err(), StoreError::UnknownAction));
    }

    #[test]
    fn test_undo_is_single_shot() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        fs::write(store.root.join("notes.prompt.md"), "x").unwrap();

        let mut slot = Some(
            store
                .remove_prompt("notes", true, &StaticConfirm(true))
                .unwrap(),
        );

        perform_undo(slot.take()).unwrap();
        let second = perform_undo(slot.take());
        assert!(matches!(second.unwrap_err(), StoreError::NoAction));
    }
}
