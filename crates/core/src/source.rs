// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The seam between the core algorithms and the remote endpoints.

use crate::error::Result;
use crate::item::{WorkItem, WorkItemRef};
use crate::wiql::WiqlQuery;

/// Remote endpoints the core consumes.
///
/// Each method issues exactly one remote call, fully awaited before it
/// returns; there is no retry and no partial-result salvage. The CLI crate
/// provides the HTTP implementation; tests use scripted in-memory fakes.
pub trait WorkItemSource {
    /// Submits a query and returns the matching references.
    fn run_query(&self, wiql: &WiqlQuery) -> Result<Vec<WorkItemRef>>;

    /// Retrieves full details (fields + relations) for up to
    /// [`BATCH_MAXIMUM`](crate::batch::BATCH_MAXIMUM) identifiers in one
    /// call. Unresolvable identifiers are omitted from the response rather
    /// than failing the call, and the response order is whatever the remote
    /// system returns — callers must index by identifier, not position.
    fn fetch_batch(&self, ids: &[u32]) -> Result<Vec<WorkItem>>;
}
