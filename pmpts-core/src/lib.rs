//! # pmpts Core
//!
//! This crate provides the core functionality for pmpts, a manager for
//! VS Code style prompt files (`*.prompt.md`).
//!
//! Prompts live as flat files in a single root directory. Every mutating
//! operation (add, remove, rename) is soft-destructive: files that would be
//! removed or overwritten are moved into a `.trash` subdirectory instead,
//! and each successful mutation produces a [`action::LastAction`] record
//! that the [`undo`] module can reverse.
//!
//! # Modules
//!
//! - [`store`] - The prompt root: path resolution, listing, the move primitive
//! - [`trash`] - Trash-based soft deletion
//! - [`action`] - The persisted record of the last mutating operation
//! - [`ops`] - Add, remove, rename and copy operations
//! - [`undo`] - Reversal of the last recorded mutation
//! - [`prompt`] - Prompt entries and frontmatter metadata
//!
//! # Examples
//!
//! ```rust
//! use pmpts_core::ops::StaticConfirm;
//! use pmpts_core::store::PromptStore;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let dir = TempDir::new().unwrap();
//! let root = dir.path().join("prompts");
//! let store = PromptStore::new(&root);
//! store.ensure_root().unwrap();
//!
//! // Move a file into the store; the prompt suffix is appended for us.
//! let src = dir.path().join("notes");
//! fs::write(&src, "remember the milk").unwrap();
//! let action = store.add_file(&src, false, &StaticConfirm(true)).unwrap();
//!
//! assert!(root.join("notes.prompt.md").exists());
//!
//! // The returned action is everything undo needs to reverse the add.
//! pmpts_core::undo::perform_undo(Some(action)).unwrap();
//! assert!(src.exists());
//! ```

pub mod action;
pub mod ops;
pub mod prompt;
pub mod store;
pub mod trash;
pub mod undo;
