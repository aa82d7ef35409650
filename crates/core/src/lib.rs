// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ado-core: Shared library for the ado work-item CLI
//!
//! This crate provides the data model for Azure DevOps work items, the WIQL
//! query builder, the bounded batch-retrieval loop, and the parent/child
//! hierarchy reconstruction used by the `ado` CLI. Remote endpoints are
//! abstracted behind the [`WorkItemSource`] trait; the CLI crate supplies
//! the HTTP implementation.

pub mod batch;
pub mod comment;
pub mod error;
pub mod hierarchy;
pub mod identity;
pub mod item;
pub mod patch;
pub mod relation;
pub mod source;
pub mod wiql;

pub use batch::{fetch_chunk, fetch_details, BATCH_MAXIMUM};
pub use comment::{Comment, CommentList};
pub use error::{Error, Result};
pub use hierarchy::{reconstruct, ListMode, TreeRow, WorkItemIndex};
pub use identity::IdentityRef;
pub use item::{WorkItem, WorkItemFields, WorkItemRef};
pub use patch::{PatchDocument, PatchOp};
pub use relation::{Relation, RelationKind};
pub use source::WorkItemSource;
pub use wiql::{build_wiql, WiqlQuery, WiqlResult};
