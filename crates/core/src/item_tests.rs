// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::relation::RelationKind;

fn sample_json() -> &'static str {
    r#"{
        "id": 101,
        "url": "https://dev.azure.com/org/_apis/wit/workItems/101",
        "fields": {
            "System.WorkItemType": "Task",
            "System.Title": "Wire up login",
            "System.State": "Active",
            "System.AreaPath": "Project\\TeamA",
            "System.IterationPath": "Project\\Sprint 4",
            "System.AssignedTo": {
                "displayName": "Alice Example",
                "uniqueName": "alice@example.com"
            },
            "System.Tags": "auth; backend",
            "System.CommentCount": 2
        },
        "relations": [
            {
                "rel": "System.LinkTypes.Hierarchy-Forward",
                "url": "https://dev.azure.com/org/_apis/wit/workItems/102",
                "attributes": {"name": "Child"}
            },
            {
                "rel": "System.LinkTypes.Related",
                "url": "https://dev.azure.com/org/_apis/wit/workItems/103"
            }
        ],
        "_links": {
            "workItemComments": {
                "href": "https://dev.azure.com/org/_apis/wit/workItems/101/comments"
            }
        }
    }"#
}

#[test]
fn deserializes_full_expansion() {
    let item: WorkItem = serde_json::from_str(sample_json()).unwrap();
    assert_eq!(item.id, 101);
    assert_eq!(item.fields.work_item_type, "Task");
    assert_eq!(item.fields.title, "Wire up login");
    assert_eq!(item.fields.state, "Active");
    assert_eq!(item.fields.area_path.as_deref(), Some("Project\\TeamA"));
    assert_eq!(
        item.fields.iteration_path.as_deref(),
        Some("Project\\Sprint 4")
    );
    assert_eq!(
        item.fields.assigned_to.as_ref().unwrap().unique_name,
        "alice@example.com"
    );
    assert_eq!(item.fields.comment_count, Some(2));
    assert_eq!(item.relations.len(), 2);
    assert_eq!(item.relations[0].rel, RelationKind::HierarchyForward);
}

#[test]
fn minimal_item_deserializes() {
    let item: WorkItem = serde_json::from_str(
        r#"{"id": 1, "url": "https://x/1", "fields": {"System.Title": "t"}}"#,
    )
    .unwrap();
    assert!(item.relations.is_empty());
    assert!(item.links.is_none());
    assert_eq!(item.fields.state, "");
}

#[test]
fn tag_list_splits_and_trims() {
    let item: WorkItem = serde_json::from_str(sample_json()).unwrap();
    assert_eq!(item.tag_list(), vec!["auth", "backend"]);
}

#[test]
fn tag_list_empty_without_tags() {
    let item: WorkItem =
        serde_json::from_str(r#"{"id": 1, "url": "u", "fields": {}}"#).unwrap();
    assert!(item.tag_list().is_empty());
}

#[test]
fn child_urls_filters_forward_hierarchy_only() {
    let item: WorkItem = serde_json::from_str(sample_json()).unwrap();
    let children: Vec<&str> = item.child_urls().collect();
    assert_eq!(
        children,
        vec!["https://dev.azure.com/org/_apis/wit/workItems/102"]
    );
}

#[test]
fn comments_url_reads_links() {
    let item: WorkItem = serde_json::from_str(sample_json()).unwrap();
    assert_eq!(
        item.comments_url(),
        Some("https://dev.azure.com/org/_apis/wit/workItems/101/comments")
    );
}

#[test]
fn work_item_ref_deserializes_query_response_shape() {
    let reference: WorkItemRef =
        serde_json::from_str(r#"{"id": 5, "url": "https://x/5"}"#).unwrap();
    assert_eq!(reference.id, 5);
    assert_eq!(reference.url, "https://x/5");
}

#[test]
fn serializes_back_to_field_reference_names() {
    let item: WorkItem = serde_json::from_str(sample_json()).unwrap();
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["fields"]["System.Title"], "Wire up login");
    assert_eq!(value["fields"]["System.WorkItemType"], "Task");
}
