/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Configuration file handling for scripture-finder.
 */

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "scripture-finder.yml";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from `scripture-finder.yml`.
///
/// ```yaml
/// store: data/rcv.json
/// format: json
/// concurrent: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinderConfig {
    /// JSON verse corpus. Relative paths are resolved against the config file.
    pub store: Option<PathBuf>,
    pub format: OutputFormat,
    /// Dispatch verse lookups concurrently.
    pub concurrent: bool,
}

impl FinderConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to YAML null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read a config file, resolving a relative `store` against its directory.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        if let (Some(store), Some(dir)) = (&config.store, path.parent()) {
            if store.is_relative() {
                config.store = Some(dir.join(store));
            }
        }
        Ok(config)
    }

    /// Load the explicit config file, or the default one if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::read(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::read(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
