// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ado-core operations.

use thiserror::Error;

/// All possible errors that can occur in ado-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("PAT_TOKEN must be set in the environment\n  hint: create a personal access token with work-item read/write scope")]
    MissingToken,

    #[error("missing setting: {key}\n  hint: pass it on the command line or add it to the config file")]
    MissingSetting { key: &'static str },

    #[error("maximum batch size of {max} exceeded: received {len} ids\n  hint: reduce the id list before requesting a chunk")]
    BatchTooLarge { len: usize, max: usize },

    #[error("no values found for work item chunk: {ids:?}\n  hint: check usage and work-item read permissions")]
    EmptyChunk { ids: Vec<u32> },

    #[error("no valid work item found for id {0}")]
    WorkItemNotFound(u32),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for ado-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
