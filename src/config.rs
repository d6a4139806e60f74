//! Application configuration
//!
//! Stored as TOML under the platform config directory
//! (`~/.config/folio/config.toml` on Linux). Missing files fall back to
//! defaults; `folio config migrate` adds fields introduced by newer
//! versions without touching existing settings.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;

/// User configuration for the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme name: "midnight", "classic", or "ocean"
    pub theme: String,
    /// Portfolio document used when `folio view` is run without a path
    pub portfolio_path: Option<PathBuf>,
    /// Event poll timeout in milliseconds (upper bound on frame latency)
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "midnight".to_string(),
            portfolio_path: None,
            tick_rate_ms: 33,
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("could not determine config directory")?;
        Ok(dir.join("folio").join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file is missing.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Write the config to its standard location, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Outcome of a config migration.
#[derive(Debug, Clone)]
pub struct MigrateResult {
    /// Migrated file content (existing entries preserved verbatim)
    pub content: String,
    /// Names of the fields that were added
    pub added_fields: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add any missing fields from the default config to `existing`.
///
/// Uses `toml_edit` so comments and formatting of the existing file are
/// preserved. Fields already present are never modified.
pub fn migrate_config(existing: &str) -> Result<MigrateResult> {
    let mut doc: DocumentMut = existing
        .parse()
        .context("existing config is not valid TOML")?;

    let defaults = toml::to_string_pretty(&Config::default())?;
    let default_doc: DocumentMut = defaults
        .parse()
        .context("default config failed to serialize")?;

    let mut added_fields = Vec::new();
    for (key, item) in default_doc.iter() {
        if !doc.contains_key(key) {
            doc.insert(key, item.clone());
            added_fields.push(key.to_string());
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
    })
}
