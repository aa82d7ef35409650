// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Work item comments.
//!
//! Comments are fetched only when a single item is displayed and its
//! comment count is nonzero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::IdentityRef;

/// A single comment on a work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Revision number; higher revisions are newer.
    #[serde(default)]
    pub revision: u32,
    /// HTML comment body.
    #[serde(default)]
    pub text: String,
    /// Identity of the last author to revise the comment.
    #[serde(rename = "revisedBy", default, skip_serializing_if = "Option::is_none")]
    pub revised_by: Option<IdentityRef>,
    #[serde(rename = "revisedDate", default, skip_serializing_if = "Option::is_none")]
    pub revised_date: Option<DateTime<Utc>>,
}

/// The comments endpoint response: an ordered list plus its count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
