//! The persisted record of the last mutating operation.
//!
//! The log holds at most one entry: each mutation overwrites it, a
//! successful undo consumes it. The CLI persists it as part of its settings
//! and passes it into [`crate::undo::perform_undo`] by value; there is no
//! ambient global state.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What the most recent mutating operation did, with enough detail to
/// reverse it.
///
/// Entries whose `action` tag is not recognized (hand-edited or written by a
/// newer version) deserialize to [`LastAction::Unknown`] instead of failing
/// the whole settings load; undo rejects them explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum LastAction {
    Add {
        src: PathBuf,
        dest: PathBuf,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        overwritten_trash: Option<PathBuf>,
    },
    Remove {
        dest: PathBuf,
        trashed: PathBuf,
    },
    Rename {
        old: PathBuf,
        new: PathBuf,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        overwritten_trash: Option<PathBuf>,
    },
    #[serde(other)]
    Unknown,
}
