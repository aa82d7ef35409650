// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use ado_core::{IdentityRef, WorkItemFields};
use yare::parameterized;

fn make_item(id: u32) -> WorkItem {
    WorkItem {
        id,
        url: format!("https://dev.azure.com/org/_apis/wit/workItems/{}", id),
        fields: WorkItemFields {
            work_item_type: "Task".to_string(),
            title: "Wire up login".to_string(),
            state: "Active".to_string(),
            area_path: Some("Project\\TeamA".to_string()),
            iteration_path: Some("Project\\Sprint 4".to_string()),
            assigned_to: Some(IdentityRef {
                display_name: "Alice Example".to_string(),
                unique_name: "alice@example.com".to_string(),
            }),
            description: Some("<div>First <b>line</b></div><div>Second line</div>".to_string()),
            ..Default::default()
        },
        relations: Vec::new(),
        links: None,
    }
}

#[parameterized(
    root = { 0, "" },
    child = { 1, "┗━ " },
    grandchild = { 2, "  ┗━ " },
    great_grandchild = { 3, "    ┗━ " },
)]
fn tree_prefix_grows_by_fixed_unit(depth: usize, expected: &str) {
    assert_eq!(tree_prefix(depth), expected);
}

#[parameterized(
    plain = { "no markup", "no markup" },
    simple_tags = { "<b>bold</b> text", "bold text" },
    line_break = { "first<br>second", "first\nsecond" },
    block_close = { "<div>a</div><div>b</div>", "a\nb" },
    list_items = { "<ul><li>one</li><li>two</li></ul>", "one\ntwo" },
    entities = { "a &amp; b &lt;c&gt; &quot;d&quot; &#39;e&#39;&nbsp;f", "a & b <c> \"d\" 'e' f" },
    attributes = { "<a href=\"https://x\">link</a>", "link" },
)]
fn html_to_text_conversion(html: &str, expected: &str) {
    assert_eq!(html_to_text(html), expected);
}

#[test]
fn html_to_text_collapses_blank_runs() {
    let text = html_to_text("<p>a</p><p></p><p></p><p>b</p>");
    assert!(!text.contains("\n\n\n"));
    assert!(text.starts_with('a'));
    assert!(text.ends_with('b'));
}

#[test]
fn html_to_text_keeps_unterminated_tag_text() {
    assert_eq!(html_to_text("a < b"), "a < b");
}

#[test]
fn card_contains_metadata_and_description() {
    let card = format_card(&make_item(4211), None, Palette::new(false));

    assert!(card.contains("ID:"));
    assert!(card.contains("4211"));
    assert!(card.contains("Type:"));
    assert!(card.contains("Task"));
    assert!(card.contains("State:"));
    assert!(card.contains("alice@example.com"));
    assert!(card.contains("Wire up login"));
    assert!(card.contains("Description:"));
    assert!(card.contains("First line\nSecond line"));
    assert!(!card.contains("Acceptance Criteria:"));
    assert!(!card.contains("Comments:"));
}

#[test]
fn card_shows_acceptance_criteria_when_present() {
    let mut item = make_item(1);
    item.fields.acceptance_criteria = Some("<div>Logins survive restart</div>".to_string());
    let card = format_card(&item, None, Palette::new(false));

    assert!(card.contains("Acceptance Criteria:"));
    assert!(card.contains("Logins survive restart"));
}

#[test]
fn card_renders_comments_newest_first() {
    let comments: CommentList = serde_json::from_str(
        r#"{"count": 2, "comments": [
            {"revision": 1, "text": "older", "revisedBy": {"uniqueName": "alice@example.com"}},
            {"revision": 2, "text": "newer", "revisedBy": {"uniqueName": "bob@example.com"}}
        ]}"#,
    )
    .unwrap();

    let card = format_card(&make_item(1), Some(&comments), Palette::new(false));
    let newer = card.find("newer").unwrap();
    let older = card.find("older").unwrap();
    assert!(card.contains("Comments:"));
    assert!(newer < older);
    assert!(card.contains("bob@example.com"));
}

#[test]
fn card_omits_empty_comment_list() {
    let card = format_card(&make_item(1), Some(&CommentList::default()), Palette::new(false));
    assert!(!card.contains("Comments:"));
}
