// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn clause_count(query: &str, needle: &str) -> usize {
    query.matches(needle).count()
}

#[test]
fn assignee_only_query_shape() {
    let wiql = build_wiql("alice@example.com", None);

    assert_eq!(clause_count(&wiql.query, "[System.AssignedTo]"), 1);
    assert_eq!(clause_count(&wiql.query, "[System.AreaPath]"), 0);
    assert!(wiql.query.contains("[System.AssignedTo] = \"alice@example.com\""));
}

#[test]
fn excludes_terminal_states() {
    let wiql = build_wiql("alice@example.com", None);

    assert!(wiql.query.contains("[System.State] <> \"Done\""));
    assert!(wiql.query.contains("[System.State] <> \"Removed\""));
}

#[test]
fn area_path_adds_exactly_one_clause() {
    let wiql = build_wiql("alice@example.com", Some("TeamA"));

    assert_eq!(clause_count(&wiql.query, "[System.AreaPath]"), 1);
    assert!(wiql.query.contains("[System.AreaPath] = \"TeamA\""));
}

#[test]
fn clauses_are_space_separated() {
    let wiql = build_wiql("alice@example.com", Some("TeamA"));
    // Every AND is surrounded by spaces; no clause runs into its neighbor.
    assert!(!wiql.query.contains("\"AND"));
    assert!(!wiql.query.contains("AND["));
}

#[test]
fn selects_id_title_state() {
    let wiql = build_wiql("alice@example.com", None);
    assert!(wiql
        .query
        .starts_with("Select [System.Id], [System.Title], [System.State] From WorkItems Where"));
}

#[test]
fn serializes_as_query_object() {
    let wiql = build_wiql("alice@example.com", None);
    let value = serde_json::to_value(&wiql).unwrap();
    assert!(value["query"].is_string());
    assert_eq!(value.as_object().unwrap().len(), 1);
}

#[test]
fn result_deserializes_work_items_key() {
    let result: WiqlResult = serde_json::from_str(
        r#"{"queryType": "flat", "workItems": [
            {"id": 3, "url": "https://x/3"},
            {"id": 1, "url": "https://x/1"}
        ]}"#,
    )
    .unwrap();
    assert_eq!(result.ids(), vec![3, 1]);
}
