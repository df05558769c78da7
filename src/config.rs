//! Configuration for repeat generation
//!
//! The host settings object of the original plugin is modeled as an
//! explicit, statically-typed record loaded from a TOML file and validated
//! once at the start of a batch run. Unknown keys are rejected so a typo in
//! the file surfaces immediately instead of silently falling back to a
//! default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Recognized configuration options and their effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepeatConfig {
    /// Remove the completed original line after the next occurrence has
    /// been written. When false the original stays in place with only its
    /// completion time stripped.
    pub delete_completed_repeat: bool,

    /// Bound the batch scan to the active portion of a note: lines at or
    /// below the first "Done" or "Cancelled" heading are never considered.
    pub dont_look_for_repeats_in_done_or_archive: bool,
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self {
            delete_completed_repeat: false,
            dont_look_for_repeats_in_done_or_archive: false,
        }
    }
}

impl RepeatConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults; a present but malformed file is
    /// an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: RepeatConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
