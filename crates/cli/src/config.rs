// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration management.
//!
//! Defaults are stored in `~/.config/ado/config.toml` (override the path
//! with `ADO_CONFIG_FILE`) and merged with command-line arguments;
//! command-line values always take precedence. A missing config file is
//! not an error — every value can be supplied on the command line.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};
use crate::table::TableFormat;

const CONFIG_DIR_NAME: &str = "ado";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Per-user defaults for the CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Azure DevOps organization name.
    pub organization: Option<String>,
    /// Project name within the organization.
    pub project: Option<String>,
    /// Email of the user whose work items are listed by default.
    pub username: Option<String>,
    /// Default area path filter for `list` and default area for `new`.
    pub area_path: Option<String>,
    /// Default iteration path for `new`.
    pub iteration: Option<String>,
    /// Browser command used by `open`.
    pub browser: Option<String>,
    /// Enable colored output.
    #[serde(default)]
    pub color: bool,
    /// Default table format for `list`.
    pub table_format: Option<TableFormat>,
}

impl Config {
    /// Loads the config from the default (or overridden) location.
    ///
    /// A missing file yields `Config::default()`; a file that exists but
    /// fails to parse is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Loads the config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }

    /// Saves the config, creating the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Returns the config file path: `ADO_CONFIG_FILE` if set, otherwise
/// `<config dir>/ado/config.toml`.
pub fn config_path() -> PathBuf {
    if let Some(path) = env::config_file() {
        return path;
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Resolves a setting from a command-line value or the config default.
///
/// Errors before any network call when neither supplies a value.
pub fn require(cli: Option<String>, config: Option<&String>, key: &'static str) -> Result<String> {
    cli.or_else(|| config.cloned())
        .ok_or_else(|| ado_core::Error::MissingSetting { key }.into())
}

/// Resolves an optional setting: the command-line value wins.
pub fn prefer(cli: Option<String>, config: Option<&String>) -> Option<String> {
    cli.or_else(|| config.cloned())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
