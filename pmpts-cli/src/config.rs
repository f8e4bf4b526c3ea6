use crate::constants::PMPTS_CLI;
use confy::ConfyError;
use pmpts_core::action::LastAction;
use serde::{Deserialize, Serialize};
use std::env::home_dir;
use std::path::PathBuf;

/// Persisted settings: the prompts root and the single action-log slot.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_action: Option<LastAction>,
}

impl Settings {
    /// The configured root, or the built-in default.
    pub fn root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(default_root)
    }
}

pub fn default_root() -> PathBuf {
    home_dir()
        .map(|p| p.join("pmpts").join("prompts"))
        .unwrap_or_else(|| PathBuf::from("pmpts/prompts"))
}

pub fn load() -> Result<Settings, ConfyError> {
    confy::load(PMPTS_CLI, None)
}

pub fn store(settings: &Settings) -> Result<(), ConfyError> {
    confy::store(PMPTS_CLI, None, settings)
}
