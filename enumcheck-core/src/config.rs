//! Configuration loading from enumcheck.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Main configuration structure for enumcheck.toml.
#[derive(Debug, Deserialize, Default)]
pub struct EnumcheckConfig {
    /// Fully-qualified path of the sentinel marker type.
    pub sentinel: Option<String>,
    /// Directory names to exclude from scanning.
    pub exclude: Option<Vec<String>>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from enumcheck.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<EnumcheckConfig>> {
    let path = root.join("enumcheck.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid enumcheck.toml")?;
    Ok(Some(cfg))
}
