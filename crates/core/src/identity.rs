// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identity records attached to work items and comments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user identity as reported by the remote system.
///
/// Azure DevOps returns a larger identity object; only the fields the CLI
/// displays are retained here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRef {
    /// Human-readable display name (e.g., "Alice Example").
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    /// Unique account name, usually an email address.
    #[serde(rename = "uniqueName", default)]
    pub unique_name: String,
}

impl fmt::Display for IdentityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unique_name.is_empty() {
            write!(f, "{}", self.display_name)
        } else {
            write!(f, "{}", self.unique_name)
        }
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
