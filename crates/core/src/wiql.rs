// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! WIQL query construction.
//!
//! Builds the fixed filter shape the `list` command submits to the query
//! endpoint: items assigned to one identity, optionally restricted to one
//! area path, excluding terminal states. No local validation is performed
//! on the assignee or area path; malformed values surface as a remote-side
//! error.

use serde::{Deserialize, Serialize};

use crate::item::WorkItemRef;

/// A structured query object suitable for direct submission to the query
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiqlQuery {
    pub query: String,
}

/// The query endpoint response: references matching the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiqlResult {
    #[serde(rename = "workItems", default)]
    pub work_items: Vec<WorkItemRef>,
}

impl WiqlResult {
    /// Returns the matched identifiers in response order.
    pub fn ids(&self) -> Vec<u32> {
        self.work_items.iter().map(|item| item.id).collect()
    }
}

/// Builds the work-item filter query.
///
/// Selects id/title/state where the assignee equals `assigned_to`, AND (if
/// supplied) the area path equals `area_path`, AND the state is neither
/// "Done" nor "Removed".
pub fn build_wiql(assigned_to: &str, area_path: Option<&str>) -> WiqlQuery {
    let mut query = String::from(
        "Select [System.Id], [System.Title], [System.State] From WorkItems Where",
    );

    query.push_str(&format!(" [System.AssignedTo] = \"{}\"", assigned_to));

    if let Some(path) = area_path {
        query.push_str(&format!(" AND [System.AreaPath] = \"{}\"", path));
    }

    query.push_str(" AND [System.State] <> \"Done\"");
    query.push_str(" AND [System.State] <> \"Removed\"");

    WiqlQuery { query }
}

#[cfg(test)]
#[path = "wiql_tests.rs"]
mod tests;
