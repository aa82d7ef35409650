// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded batch retrieval of work-item details.
//!
//! The batch endpoint accepts at most [`BATCH_MAXIMUM`] identifiers per
//! call, so arbitrary id lists are split into contiguous chunks and fetched
//! one chunk at a time. Two superficially similar conditions are kept
//! strictly apart:
//!
//! - an *empty input list* is a local no-op (warn, return empty, zero
//!   remote calls);
//! - a *zero-item response for a nonempty chunk* is a hard failure — it
//!   signals a usage or permission error, never a transient condition, so
//!   it aborts the whole operation instead of being retried or ignored.

use tracing::warn;

use crate::error::{Error, Result};
use crate::item::WorkItem;
use crate::source::WorkItemSource;

/// Maximum number of identifiers the batch endpoint accepts per call.
pub const BATCH_MAXIMUM: usize = 200;

/// Fetches one chunk of at most [`BATCH_MAXIMUM`] identifiers.
///
/// A chunk above the maximum is a programming-contract violation and is
/// rejected before any remote call. Within the response, order is whatever
/// the remote system returns; unresolvable identifiers are omitted per
/// chunk without erroring.
///
/// # Errors
///
/// [`Error::BatchTooLarge`] for an oversized chunk, [`Error::EmptyChunk`]
/// when a nonempty chunk resolves to zero items.
pub fn fetch_chunk<S: WorkItemSource + ?Sized>(source: &S, ids: &[u32]) -> Result<Vec<WorkItem>> {
    if ids.len() > BATCH_MAXIMUM {
        return Err(Error::BatchTooLarge {
            len: ids.len(),
            max: BATCH_MAXIMUM,
        });
    }

    let items = source.fetch_batch(ids)?;
    if !ids.is_empty() && items.is_empty() {
        return Err(Error::EmptyChunk { ids: ids.to_vec() });
    }
    Ok(items)
}

/// Fetches details for an arbitrary identifier list in bounded chunks.
///
/// The input is partitioned into `ceil(n / 200)` contiguous chunks
/// preserving input order; one remote call is issued per chunk and results
/// are concatenated in chunk order. An error in any chunk aborts the whole
/// operation — no partial data is returned.
pub fn fetch_details<S: WorkItemSource + ?Sized>(source: &S, ids: &[u32]) -> Result<Vec<WorkItem>> {
    if ids.is_empty() {
        warn!("fetch_details called on empty id list");
        return Ok(Vec::new());
    }

    let mut details = Vec::with_capacity(ids.len());
    for chunk in ids.chunks(BATCH_MAXIMUM) {
        details.extend(fetch_chunk(source, chunk)?);
    }
    Ok(details)
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
