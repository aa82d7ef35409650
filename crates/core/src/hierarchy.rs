// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parent/child tree reconstruction from a flat result set.
//!
//! The detail fetch returns work items flat; relations carry the structure.
//! [`WorkItemIndex`] keys the items by their URL reference and remembers
//! insertion order as the pending-root worklist. Reconstruction consumes
//! the index: each item is removed when emitted, which is the invariant
//! that guarantees every item appears exactly once even when it is
//! reachable through multiple relation paths.

use std::collections::{HashMap, VecDeque};

use crate::item::WorkItem;

/// Flat ordering or indented parent/child tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    #[default]
    Flat,
    Tree,
}

/// One output row: a work item at an indentation depth.
///
/// Depth is the item's distance from the root it was reached from; roots
/// are depth 0. The depth is data, not presentation — glyph prefixes are
/// the renderer's concern and never appear in structured output.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub depth: usize,
    pub item: WorkItem,
}

/// Work item details keyed by URL reference, scoped to one invocation.
///
/// Insertion order (the fetch-response order) doubles as the worklist of
/// pending roots, so traversal is deterministic within a run without
/// promising any particular sort.
#[derive(Debug, Default)]
pub struct WorkItemIndex {
    items: HashMap<String, WorkItem>,
    pending: VecDeque<String>,
}

impl WorkItemIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from a flat detail list, preserving its order.
    pub fn from_items(items: Vec<WorkItem>) -> Self {
        let mut index = Self::new();
        for item in items {
            index.insert(item);
        }
        index
    }

    /// Inserts an item keyed by its URL. Re-inserting a URL replaces the
    /// detail without duplicating the worklist entry.
    pub fn insert(&mut self, item: WorkItem) {
        let url = item.url.clone();
        if self.items.insert(url.clone(), item).is_none() {
            self.pending.push_back(url);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes and returns the item for `url`, if still present.
    fn take(&mut self, url: &str) -> Option<WorkItem> {
        self.items.remove(url)
    }

    /// Removes and returns the next still-present worklist entry.
    fn next_root(&mut self) -> Option<WorkItem> {
        while let Some(url) = self.pending.pop_front() {
            if let Some(item) = self.items.remove(&url) {
                return Some(item);
            }
            // Already consumed as somebody's child; skip.
        }
        None
    }
}

/// Drains the index into an ordered row list.
///
/// In [`ListMode::Tree`], each remaining item in worklist order becomes a
/// root row, followed pre-order by its forward-hierarchy descendants at
/// increasing depth. Relation targets no longer present in the index
/// (already consumed, or outside the fetched set) are silently skipped —
/// they are out-of-scope relatives, not errors. In [`ListMode::Flat`],
/// every item is a depth-0 row in worklist order.
///
/// The emitted row count always equals the number of items in the index.
pub fn reconstruct(mut index: WorkItemIndex, mode: ListMode) -> Vec<TreeRow> {
    let mut rows = Vec::with_capacity(index.len());

    while let Some(root) = index.next_root() {
        rows.push(TreeRow {
            depth: 0,
            item: root,
        });
        if mode == ListMode::Tree {
            let parent = rows.len() - 1;
            emit_children(&mut index, parent, &mut rows);
        }
    }

    rows
}

/// Recursively pulls the children of `rows[parent]` out of the index,
/// emitting each one level deeper than its parent.
fn emit_children(index: &mut WorkItemIndex, parent: usize, rows: &mut Vec<TreeRow>) {
    let depth = rows[parent].depth + 1;
    let child_urls: Vec<String> = rows[parent]
        .item
        .child_urls()
        .map(str::to_string)
        .collect();

    for url in child_urls {
        if let Some(child) = index.take(&url) {
            rows.push(TreeRow { depth, item: child });
            let child_row = rows.len() - 1;
            emit_children(index, child_row, rows);
        }
    }
}

#[cfg(test)]
#[path = "hierarchy_tests.rs"]
mod tests;
