// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Relation links between work items.
//!
//! A relation is a typed, directed edge from one work item to another.
//! Only the two hierarchy link types carry meaning for tree reconstruction;
//! everything else (related links, attachments, hyperlinks) passes through
//! as [`RelationKind::Other`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire tag for a parent → child link.
const HIERARCHY_FORWARD: &str = "System.LinkTypes.Hierarchy-Forward";
/// Wire tag for a child → parent link.
const HIERARCHY_REVERSE: &str = "System.LinkTypes.Hierarchy-Reverse";

/// The type tag of a relation link.
///
/// The remote system defines an open set of link types, so unknown tags are
/// preserved verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationKind {
    /// Parent → child hierarchy edge.
    HierarchyForward,
    /// Child → parent hierarchy edge.
    HierarchyReverse,
    /// Any other link type (related, attachment, hyperlink, ...).
    Other(String),
}

impl RelationKind {
    /// Returns the wire tag for this relation kind.
    pub fn as_str(&self) -> &str {
        match self {
            RelationKind::HierarchyForward => HIERARCHY_FORWARD,
            RelationKind::HierarchyReverse => HIERARCHY_REVERSE,
            RelationKind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for RelationKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            HIERARCHY_FORWARD => RelationKind::HierarchyForward,
            HIERARCHY_REVERSE => RelationKind::HierarchyReverse,
            _ => RelationKind::Other(tag),
        }
    }
}

impl From<RelationKind> for String {
    fn from(kind: RelationKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A directed link from the owning work item to a target work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    /// The link type tag.
    pub rel: RelationKind,
    /// URL-shaped reference to the target work item.
    pub url: String,
}

impl Relation {
    /// Creates a new relation.
    pub fn new(rel: RelationKind, url: impl Into<String>) -> Self {
        Relation {
            rel,
            url: url.into(),
        }
    }

    /// Returns true if this is a parent → child hierarchy edge.
    pub fn is_forward_hierarchy(&self) -> bool {
        self.rel == RelationKind::HierarchyForward
    }
}

#[cfg(test)]
#[path = "relation_tests.rs"]
mod tests;
