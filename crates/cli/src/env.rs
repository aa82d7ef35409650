// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here with
//! typed accessor functions.

use std::path::PathBuf;

/// Environment variable names.
pub mod vars {
    /// Personal access token used for every remote call.
    pub const PAT_TOKEN: &str = "PAT_TOKEN";
    /// Overrides the default config file location.
    pub const ADO_CONFIG_FILE: &str = "ADO_CONFIG_FILE";
    pub const NO_COLOR: &str = "NO_COLOR";
    pub const COLOR: &str = "COLOR";
}

/// Returns the personal access token, if set to a non-empty value.
pub fn pat_token() -> Option<String> {
    std::env::var(vars::PAT_TOKEN)
        .ok()
        .filter(|token| !token.trim().is_empty())
}

/// Returns the config file override path, if set.
pub fn config_file() -> Option<PathBuf> {
    std::env::var(vars::ADO_CONFIG_FILE).ok().map(PathBuf::from)
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}
