// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Work item types as returned by the remote tracking system.
//!
//! Work items are owned by the remote system; this crate holds ephemeral
//! read copies constructed from one HTTP response and discarded at process
//! exit. Work-item type and state are kept as open strings: process
//! templates define arbitrary type and state names per project, so a closed
//! enum would misparse real data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::IdentityRef;
use crate::relation::Relation;

/// A `(reference, identifier)` pair as returned by the query endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemRef {
    /// Remote-assigned integer identifier.
    pub id: u32,
    /// URL-shaped reference resolvable to the work item.
    pub url: String,
}

/// The field block of a work item.
///
/// Fields live under reference names like `System.Title` on the wire; only
/// the fields the CLI reads are mapped. Everything is optional except the
/// title, type, and state, which every work item carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkItemFields {
    #[serde(rename = "System.WorkItemType", default)]
    pub work_item_type: String,

    #[serde(rename = "System.Title", default)]
    pub title: String,

    #[serde(rename = "System.State", default)]
    pub state: String,

    #[serde(rename = "System.AreaPath", default, skip_serializing_if = "Option::is_none")]
    pub area_path: Option<String>,

    #[serde(rename = "System.IterationPath", default, skip_serializing_if = "Option::is_none")]
    pub iteration_path: Option<String>,

    #[serde(rename = "System.AssignedTo", default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<IdentityRef>,

    /// HTML description body.
    #[serde(rename = "System.Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// HTML acceptance criteria body.
    #[serde(
        rename = "Microsoft.VSTS.Common.AcceptanceCriteria",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub acceptance_criteria: Option<String>,

    /// Semicolon-delimited tag list.
    #[serde(rename = "System.Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(rename = "System.CommentCount", default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<u32>,

    #[serde(rename = "System.CreatedDate", default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(rename = "System.ChangedDate", default, skip_serializing_if = "Option::is_none")]
    pub changed_date: Option<DateTime<Utc>>,
}

/// Resource links attached to a work item response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceLinks {
    #[serde(rename = "workItemComments", default, skip_serializing_if = "Option::is_none")]
    pub work_item_comments: Option<Href>,
}

/// A single `href` wrapper inside `_links`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Href {
    pub href: String,
}

/// A work item with full field and relation expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Remote-assigned integer identifier, unique per organization.
    pub id: u32,
    /// Canonical API URL of this work item.
    #[serde(default)]
    pub url: String,
    pub fields: WorkItemFields,
    /// Ordered relation links; absent on the wire when the item has none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<Relation>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ResourceLinks>,
}

impl WorkItem {
    /// Returns the tag list split out of the semicolon-delimited field.
    pub fn tag_list(&self) -> Vec<&str> {
        self.fields
            .tags
            .as_deref()
            .map(|tags| tags.split(';').map(str::trim).filter(|t| !t.is_empty()).collect())
            .unwrap_or_default()
    }

    /// Returns the comments endpoint URL, if the response carried one.
    pub fn comments_url(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|links| links.work_item_comments.as_ref())
            .map(|href| href.href.as_str())
    }

    /// Iterates the URLs of this item's forward-hierarchy children.
    pub fn child_urls(&self) -> impl Iterator<Item = &str> {
        self.relations
            .iter()
            .filter(|rel| rel.is_forward_hierarchy())
            .map(|rel| rel.url.as_str())
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
