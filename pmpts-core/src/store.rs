//! # Prompt Store
//!
//! This module owns the prompt root directory: resolving prompt names to
//! paths, creating the root on demand, listing the prompts it contains, and
//! the low-level move primitive every mutating operation is built on.
//!
//! Prompt files are identified by the [`SUFFIX`] filename ending and stored
//! flat, directly under the root. The root also holds a `.trash`
//! subdirectory managed by the [`crate::trash`] module; nothing in there is
//! ever listed as a prompt.
//!
//! # Examples
//!
//! ```rust
//! use pmpts_core::store::PromptStore;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp_dir = TempDir::new().unwrap();
//! let store = PromptStore::new(temp_dir.path());
//!
//! fs::write(temp_dir.path().join("greeting.prompt.md"), "Hello!").unwrap();
//!
//! let entries = store.entries().unwrap();
//! assert_eq!(entries[0].name, "greeting");
//! ```

use crate::prompt::PromptEntry;
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;
use walkdir::WalkDir;

/// Required filename ending for prompt files.
pub const SUFFIX: &str = ".prompt.md";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("aborted")]
    Aborted,
    #[error("invalid prompts root: {0}")]
    InvalidRoot(String),
    #[error("no action to undo")]
    NoAction,
    #[error("undo of {0} is not supported")]
    UnsupportedAction(&'static str),
    #[error("unknown last action")]
    UnknownAction,
}

/// Appends [`SUFFIX`] to `name` unless it is already present.
pub fn suffixed(name: &str) -> String {
    if name.ends_with(SUFFIX) {
        name.to_string()
    } else {
        format!("{name}{SUFFIX}")
    }
}

/// Moves a file, falling back to copy-and-delete when the rename crosses
/// filesystems. On failure the source is left in place.
pub fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(src, dst)?;
            fs::remove_file(src)
        }
        Err(err) => Err(err),
    }
}

/// A directory of prompt files.
pub struct PromptStore {
    /// The directory where prompt files are stored.
    pub root: PathBuf,
}

impl PromptStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the root directory if it does not exist yet.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the root exists or was created.
    /// * `StoreError::InvalidRoot` - If the path exists but is not a directory.
    pub fn ensure_root(&self) -> Result<(), StoreError> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        } else if !self.root.is_dir() {
            return Err(StoreError::InvalidRoot(self.root.display().to_string()));
        }
        Ok(())
    }

    /// Resolves a prompt name (with or without suffix) to its path in the root.
    pub fn prompt_path(&self, name: &str) -> PathBuf {
        self.root.join(suffixed(name))
    }

    /// Lists the prompt files stored directly under the root, sorted by
    /// file name. Files without the prompt suffix and the `.trash`
    /// subdirectory are skipped.
    pub fn entries(&self) -> Result<Vec<PromptEntry>, StoreError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let entries = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| PromptEntry::from_path(e.path()))
            .collect();
        Ok(entries)
    }

    /// Reads a prompt's content given its name.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The file content.
    /// * `StoreError::NotFound` - If no prompt with that name exists.
    pub fn read(&self, name: &str) -> Result<String, StoreError> {
        let candidate = suffixed(name);
        let path = self.root.join(&candidate);
        if !path.exists() {
            return Err(StoreError::NotFound(candidate));
        }
        Ok(fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_suffixed_appends() {
        assert_eq!(suffixed("notes"), "notes.prompt.md");
    }

    #[test]
    fn test_suffixed_keeps_existing_suffix() {
        assert_eq!(suffixed("notes.prompt.md"), "notes.prompt.md");
    }

    #[test]
    fn test_ensure_root_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("prompts");
        let store = PromptStore::new(&root);

        assert!(!root.exists());
        store.ensure_root().unwrap();
        assert!(root.is_dir());
    }

    #[test]
    fn test_ensure_root_rejects_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("not_a_directory");
        fs::write(&path, "some content").unwrap();

        let store = PromptStore::new(&path);
        let result = store.ensure_root();

        match result.unwrap_err() {
            StoreError::InvalidRoot(p) => assert!(p.contains("not_a_directory")),
            other => panic!("expected InvalidRoot, got {other:?}"),
        }
    }

    #[test]
    fn test_prompt_path_normalizes_name() {
        let store = PromptStore::new("/prompts");
        assert_eq!(
            store.prompt_path("notes"),
            PathBuf::from("/prompts/notes.prompt.md")
        );
        assert_eq!(
            store.prompt_path("notes.prompt.md"),
            PathBuf::from("/prompts/notes.prompt.md")
        );
    }

    #[test]
    fn test_entries_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        let store = PromptStore::new(temp_dir.path());

        fs::write(temp_dir.path().join("b.prompt.md"), "b").unwrap();
        fs::write(temp_dir.path().join("a.prompt.md"), "a").unwrap();
        fs::write(temp_dir.path().join("readme.md"), "not a prompt").unwrap();
        let trash = temp_dir.path().join(".trash");
        fs::create_dir(&trash).unwrap();
        fs::write(trash.join("123_old.prompt.md"), "trashed").unwrap();

        let entries = store.entries().unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_entries_missing_root_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = PromptStore::new(temp_dir.path().join("nowhere"));
        assert!(store.entries().unwrap().is_empty());
    }

    #[test]
    fn test_read_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let store = PromptStore::new(temp_dir.path());
        fs::write(temp_dir.path().join("greeting.prompt.md"), "Hello!").unwrap();

        assert_eq!(store.read("greeting").unwrap(), "Hello!");
        assert_eq!(store.read("greeting.prompt.md").unwrap(), "Hello!");
    }

    #[test]
    fn test_read_missing_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let store = PromptStore::new(temp_dir.path());

        match store.read("nope").unwrap_err() {
            StoreError::NotFound(name) => assert_eq!(name, "nope.prompt.md"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_move_file_renames() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("from.txt");
        let dst = temp_dir.path().join("to.txt");
        fs::write(&src, "payload").unwrap();

        move_file(&src, &dst).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "payload");
    }

    #[test]
    fn test_move_file_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("missing.txt");
        let dst = temp_dir.path().join("to.txt");

        assert!(move_file(&src, &dst).is_err());
        assert!(!dst.exists());
    }
}
