// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-patch documents for the create/update endpoints.
//!
//! The remote system takes mutations as `application/json-patch+json`
//! documents: an ordered list of `add` operations against field paths, plus
//! an optional relation addition for parenting a new item.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::relation::RelationKind;

/// A single patch operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOp {
    pub op: String,
    pub path: String,
    pub value: Value,
}

/// An ordered patch document, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchDocument {
    ops: Vec<PatchOp>,
}

impl PatchDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field-set operation for a field reference name like
    /// `System.Title`.
    pub fn add_field(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.ops.push(PatchOp {
            op: "add".to_string(),
            path: format!("/fields/{}", field),
            value: value.into(),
        });
        self
    }

    /// Adds a relation to the target work item URL.
    pub fn add_relation(mut self, rel: RelationKind, url: &str) -> Self {
        self.ops.push(PatchOp {
            op: "add".to_string(),
            path: "/relations/-".to_string(),
            value: json!({
                "rel": rel.as_str(),
                "url": url,
            }),
        });
        self
    }

    /// Parents the item under `parent_url` via a reverse hierarchy link.
    pub fn add_parent(self, parent_url: &str) -> Self {
        self.add_relation(RelationKind::HierarchyReverse, parent_url)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Returns the operations in insertion order.
    pub fn ops(&self) -> &[PatchOp] {
        &self.ops
    }
}

#[cfg(test)]
#[path = "patch_tests.rs"]
mod tests;
