//! Settings for the `pathlib` binary, read from a TOML file.
//!
//! Lookup order: an explicit `--config` path (which must exist), then
//! `settings.toml` in the per-user project config directory. A missing
//! default file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::fs_op::DEFAULT_DIR_MODE;

pub const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Mode for `pathlib mkdir` when `--mode` is not given.
    pub dir_mode: u32,
    /// Default `tracing` filter directive, e.g. `"warn"` or `"pathlib=debug"`.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dir_mode: DEFAULT_DIR_MODE,
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid settings")
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Load from `explicit` if given, else from the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(p) = explicit {
            return Self::read_from(p);
        }
        match default_settings_path() {
            Some(p) if p.is_file() => Self::read_from(&p),
            _ => Ok(Self::default()),
        }
    }
}

/// `<config dir>/settings.toml`, or `None` when no home directory is known.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pathlib").map(|d| d.config_dir().join(SETTINGS_FILE))
}
