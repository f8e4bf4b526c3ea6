//! Prompt entries and their frontmatter metadata.
//!
//! Prompt files may carry a YAML frontmatter block; its fields are free-form
//! and only used for display. A file with missing or malformed frontmatter
//! is still a valid prompt, it just has no metadata.

use crate::store::SUFFIX;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A prompt file found in the store.
#[derive(Debug, Clone)]
pub struct PromptEntry {
    /// Prompt name, without the suffix.
    pub name: String,
    /// File name, with the suffix.
    pub file_name: String,
    pub path: PathBuf,
    /// Frontmatter fields, stringified. Empty when the file has none.
    pub metadata: BTreeMap<String, String>,
}

impl PromptEntry {
    /// Builds an entry from a file path. Returns `None` when the file name
    /// does not carry the prompt suffix.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        let name = file_name.strip_suffix(SUFFIX)?.to_string();
        Some(Self {
            name,
            file_name,
            path: path.to_path_buf(),
            metadata: parse_frontmatter(path),
        })
    }
}

/// Parses the YAML frontmatter of a prompt file into a string map.
/// Any failure (unreadable file, no frontmatter, bad YAML) yields an empty
/// map.
pub fn parse_frontmatter(path: &Path) -> BTreeMap<String, String> {
    let Ok(text) = fs::read_to_string(path) else {
        return BTreeMap::new();
    };
    if !text.starts_with("---") {
        return BTreeMap::new();
    }
    let parsed: Result<(BTreeMap<String, serde_yaml_ng::Value>, String), _> =
        serde_frontmatter::deserialize(&text);
    match parsed {
        Ok((values, _)) => values
            .into_iter()
            .map(|(key, value)| (key, yaml_to_string(&value)))
            .collect(),
        Err(_) => BTreeMap::new(),
    }
}

fn yaml_to_string(value: &serde_yaml_ng::Value) -> String {
    use serde_yaml_ng::Value;
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => items
            .iter()
            .map(yaml_to_string)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_yaml_ng::to_string(other)
            .unwrap_or_default()
            .trim_end()
            .to_string(),
    }
}
