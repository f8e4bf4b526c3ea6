//! Mutating operations on a prompt store.
//!
//! Each operation composes plain file moves with trash-store safety: a file
//! that would be overwritten or removed is first moved to the trash, and the
//! trashed path is recorded in the returned [`LastAction`] so the operation
//! can be undone. Callers are responsible for persisting the returned entry
//! (and for replacing whatever entry it supersedes).
//!
//! Overwrite and removal decisions go through a [`ConfirmPolicy`], so the
//! interactive prompt itself stays out of this crate.

use crate::action::LastAction;
use crate::store::{PromptStore, StoreError, move_file, suffixed};
use crate::trash::trash_file;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Decides yes/no questions on behalf of the user.
pub trait ConfirmPolicy {
    /// Answers a yes/no question. `false` aborts the asking operation.
    fn confirm(&self, question: &str) -> bool;
}

/// Policy with a fixed answer. Used by force flags and in tests.
pub struct StaticConfirm(pub bool);

impl ConfirmPolicy for StaticConfirm {
    fn confirm(&self, _question: &str) -> bool {
        self.0
    }
}

impl PromptStore {
    /// Moves `src` into the root as a prompt file.
    ///
    /// The destination name is the source basename with the prompt suffix
    /// appended if not already present. An existing destination is moved to
    /// the trash first (after confirmation, unless `overwrite` is set). If
    /// the final move fails, the trashed file is restored best-effort and
    /// the original error is returned.
    ///
    /// # Arguments
    ///
    /// * `src` - Path of the file to move into the root.
    /// * `overwrite` - Replace an existing destination without asking.
    /// * `confirm` - Policy consulted before replacing an existing destination.
    ///
    /// # Returns
    ///
    /// * `Ok(LastAction::Add)` - The log entry for this add.
    /// * `StoreError::NotFound` - If `src` does not exist.
    /// * `StoreError::Aborted` - If the user declined to overwrite.
    /// * `StoreError::Io` - If a move failed.
    pub fn add_file(
        &self,
        src: &Path,
        overwrite: bool,
        confirm: &dyn ConfirmPolicy,
    ) -> Result<LastAction, StoreError> {
        if !src.exists() {
            return Err(StoreError::NotFound(src.display().to_string()));
        }
        let base = src
            .file_name()
            .and_then(|n| n.to_str())
            .map(suffixed)
            .ok_or_else(|| StoreError::NotFound(src.display().to_string()))?;
        let dest = self.root.join(&base);

        let mut overwritten_trash = None;
        if dest.exists() {
            if !overwrite {
                let question = format!("{} already exists. Overwrite?", dest.display());
                if !confirm.confirm(&question) {
                    return Err(StoreError::Aborted);
                }
            }
            overwritten_trash = Some(trash_file(&self.root, &dest)?);
        }

        if let Err(err) = move_file(src, &dest) {
            restore_trashed(overwritten_trash.as_deref(), &dest);
            return Err(err.into());
        }

        Ok(LastAction::Add {
            src: src.to_path_buf(),
            dest,
            overwritten_trash,
        })
    }

    /// Removes a prompt by moving it to the trash. No destructive deletion
    /// ever happens here.
    ///
    /// # Arguments
    ///
    /// * `name` - Prompt name, with or without the suffix.
    /// * `yes` - Skip the confirmation question.
    /// * `confirm` - Policy consulted unless `yes` is set.
    ///
    /// # Returns
    ///
    /// * `Ok(LastAction::Remove)` - The log entry for this removal.
    /// * `StoreError::NotFound` - If no prompt with that name exists.
    /// * `StoreError::Aborted` - If the user declined.
    pub fn remove_prompt(
        &self,
        name: &str,
        yes: bool,
        confirm: &dyn ConfirmPolicy,
    ) -> Result<LastAction, StoreError> {
        let candidate = suffixed(name);
        let path = self.root.join(&candidate);
        if !path.exists() {
            return Err(StoreError::NotFound(candidate));
        }
        if !yes && !confirm.confirm(&format!("Remove {}?", path.display())) {
            return Err(StoreError::Aborted);
        }
        let trashed = trash_file(&self.root, &path)?;
        Ok(LastAction::Remove {
            dest: path,
            trashed,
        })
    }

    /// Renames a prompt. An existing target is moved to the trash first
    /// (after confirmation, unless `overwrite` is set), with the same
    /// rollback guarantee as [`PromptStore::add_file`].
    pub fn rename_prompt(
        &self,
        old: &str,
        new: &str,
        overwrite: bool,
        confirm: &dyn ConfirmPolicy,
    ) -> Result<LastAction, StoreError> {
        let old_candidate = suffixed(old);
        let new_candidate = suffixed(new);
        let old_path = self.root.join(&old_candidate);
        let new_path = self.root.join(&new_candidate);
        if !old_path.exists() {
            return Err(StoreError::NotFound(old_candidate));
        }

        let mut overwritten_trash = None;
        if new_path.exists() {
            if !overwrite {
                let question = format!("{} already exists. Overwrite?", new_path.display());
                if !confirm.confirm(&question) {
                    return Err(StoreError::Aborted);
                }
            }
            overwritten_trash = Some(trash_file(&self.root, &new_path)?);
        }

        if let Err(err) = move_file(&old_path, &new_path) {
            restore_trashed(overwritten_trash.as_deref(), &new_path);
            return Err(err.into());
        }

        Ok(LastAction::Rename {
            old: old_path,
            new: new_path,
            overwritten_trash,
        })
    }

    /// Copies a prompt to an output path, leaving the prompt in place.
    /// Copies are not recorded in the action log.
    pub fn copy_prompt(&self, name: &str, out: &Path) -> Result<PathBuf, StoreError> {
        let candidate = suffixed(name);
        let path = self.root.join(&candidate);
        if !path.exists() {
            return Err(StoreError::NotFound(candidate));
        }
        fs::copy(&path, out)?;
        Ok(out.to_path_buf())
    }
}

/// Best-effort restoration of a trashed file after a failed move. A
/// secondary failure here must never mask the primary error, so it is only
/// logged.
fn restore_trashed(trashed: Option<&Path>, dest: &Path) {
    let Some(trashed) = trashed.filter(|t| t.exists()) else {
        return;
    };
    if let Err(err) = move_file(trashed, dest) {
        warn!(
            trashed = %trashed.display(),
            dest = %dest.display(),
            error = %err,
            "failed to restore trashed file after failed move"
        );
    }
}
