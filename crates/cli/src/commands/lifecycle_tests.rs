// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn state_change_is_a_single_op() {
    let doc = update_document("Committed", None);

    assert_eq!(doc.len(), 1);
    assert_eq!(doc.ops()[0].path, "/fields/System.State");
    assert_eq!(doc.ops()[0].value, "Committed");
}

#[test]
fn comment_adds_a_history_op() {
    let doc = update_document("Done", Some("wrapped up"));

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.ops()[1].path, "/fields/System.History");
    assert_eq!(doc.ops()[1].value, "wrapped up");
}
