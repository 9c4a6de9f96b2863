//! Configuration.
//!
//! Handles:
//! - Default output format
//! - Default casing discipline for parsing and validation
//! - Log level used when `RUST_LOG` is unset

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use armid::Casing;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the default config file path.
pub fn default_config_path() -> Result<PathBuf> {
    ProjectDirs::from("com", "armid", "armctl")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output format when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,

    /// Casing discipline when `--casing` is not given.
    #[serde(default)]
    pub casing: Casing,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            casing: Casing::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from `path`, or return default if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).with_context(|| format!("Failed to write config to {:?}", path))
    }
}
