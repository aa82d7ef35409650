// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the adors library.
///
/// The remote-interaction taxonomy (configuration, usage, transport,
/// not-found) lives in [`ado_core::Error`]; this enum adds the concerns
/// local to the CLI process.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] ado_core::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for adors operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
