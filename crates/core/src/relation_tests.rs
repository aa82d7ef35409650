// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    forward = { "System.LinkTypes.Hierarchy-Forward", RelationKind::HierarchyForward },
    reverse = { "System.LinkTypes.Hierarchy-Reverse", RelationKind::HierarchyReverse },
)]
fn hierarchy_tags_parse(tag: &str, expected: RelationKind) {
    assert_eq!(RelationKind::from(tag.to_string()), expected);
}

#[test]
fn unknown_tags_pass_through() {
    let kind = RelationKind::from("System.LinkTypes.Related".to_string());
    assert_eq!(
        kind,
        RelationKind::Other("System.LinkTypes.Related".to_string())
    );
    assert_eq!(kind.as_str(), "System.LinkTypes.Related");
}

#[test]
fn as_str_round_trips() {
    for tag in [
        "System.LinkTypes.Hierarchy-Forward",
        "System.LinkTypes.Hierarchy-Reverse",
        "AttachedFile",
    ] {
        let kind = RelationKind::from(tag.to_string());
        assert_eq!(kind.as_str(), tag);
        assert_eq!(String::from(kind), tag);
    }
}

#[test]
fn serde_uses_wire_tags() {
    let relation = Relation::new(
        RelationKind::HierarchyForward,
        "https://dev.azure.com/org/_apis/wit/workItems/7",
    );
    let json = serde_json::to_value(&relation).unwrap();
    assert_eq!(json["rel"], "System.LinkTypes.Hierarchy-Forward");

    let back: Relation = serde_json::from_value(json).unwrap();
    assert_eq!(back, relation);
}

#[test]
fn forward_hierarchy_detection() {
    assert!(Relation::new(RelationKind::HierarchyForward, "u").is_forward_hierarchy());
    assert!(!Relation::new(RelationKind::HierarchyReverse, "u").is_forward_hierarchy());
    assert!(
        !Relation::new(RelationKind::Other("System.LinkTypes.Related".to_string()), "u")
            .is_forward_hierarchy()
    );
}
