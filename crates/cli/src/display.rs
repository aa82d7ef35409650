// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Row and card formatting for work items.

use ado_core::{Comment, CommentList, WorkItem};

use crate::colors::Palette;
use crate::table::{self, TableFormat};

/// One indent unit per depth level beyond the first.
const INDENT_UNIT: &str = "  ";
/// Branch glyph prefixing every child row.
const BRANCH: &str = "\u{2517}\u{2501} ";

/// Returns the cosmetic tree prefix for a row at `depth`.
///
/// Roots get no prefix; children get the branch glyph pushed right by one
/// indent unit per extra level. Structured output modes must not use this —
/// depth is carried as data there.
pub fn tree_prefix(depth: usize) -> String {
    if depth == 0 {
        return String::new();
    }
    format!("{}{}", INDENT_UNIT.repeat(depth - 1), BRANCH)
}

/// Converts an HTML fragment to readable plain text.
///
/// This is deliberately minimal: block-level closers and `<br>` become
/// newlines, all other tags are dropped, and the handful of entities the
/// remote system actually emits are decoded.
pub fn html_to_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        text.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('>') {
            Some(end) => {
                let tag = after[..end].trim().to_lowercase();
                let name = tag
                    .trim_start_matches('/')
                    .split([' ', '/'])
                    .next()
                    .unwrap_or("");
                if matches!(name, "br" | "p" | "div" | "li" | "tr") && !text.ends_with('\n') {
                    text.push('\n');
                }
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated tag: keep the text as-is.
                text.push('<');
                rest = after;
            }
        }
    }
    text.push_str(rest);

    let decoded = decode_entities(&text);
    collapse_blank_lines(decoded.trim())
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Collapses runs of three or more newlines down to a blank line.
fn collapse_blank_lines(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut newlines = 0;
    for c in text.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines <= 2 {
                result.push('\n');
            }
        } else {
            newlines = 0;
            result.push(c);
        }
    }
    result
}

/// Formats the single-item card view.
///
/// Layout: a metadata header block, the title, the description and
/// acceptance criteria converted from HTML, then comments newest-first
/// when supplied.
pub fn format_card(item: &WorkItem, comments: Option<&CommentList>, palette: Palette) -> String {
    let fields = &item.fields;
    let label = |text: &str| palette.label(&palette.bold(&palette.italic(text)));

    let assignee = fields
        .assigned_to
        .as_ref()
        .map(|identity| identity.to_string())
        .unwrap_or_default();

    let header_rows = vec![
        vec![
            label("ID:"),
            item.id.to_string(),
            label("Type:"),
            fields.work_item_type.clone(),
        ],
        vec![
            label("State:"),
            fields.state.clone(),
            label("Area:"),
            fields.area_path.clone().unwrap_or_default(),
        ],
        vec![
            label("AssignedTo:"),
            assignee,
            label("Iteration:"),
            fields.iteration_path.clone().unwrap_or_default(),
        ],
    ];

    let mut output = String::from("\n");
    output.push_str(&table::render(&[], &header_rows, TableFormat::Plain));
    output.push_str(&format!(
        "\n\n{}\n",
        palette.accent(&palette.bold(&fields.title))
    ));

    output.push_str(&format!(
        "\n{}",
        palette.label(&palette.underline(&palette.italic(&palette.bold("Description:"))))
    ));
    output.push('\n');
    output.push_str(&html_to_text(fields.description.as_deref().unwrap_or("")));
    output.push('\n');

    if let Some(criteria) = &fields.acceptance_criteria {
        output.push_str(&format!(
            "\n{}",
            palette.label(&palette.underline(&palette.italic(&palette.bold(
                "Acceptance Criteria:"
            ))))
        ));
        output.push('\n');
        output.push_str(&html_to_text(criteria));
        output.push('\n');
    }

    if let Some(list) = comments {
        if !list.comments.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                palette.label(&palette.underline(&palette.italic(&palette.bold("Comments:"))))
            ));
            let rows: Vec<Vec<String>> = list
                .comments
                .iter()
                .rev()
                .map(|comment| comment_row(comment, palette))
                .collect();
            output.push_str(&table::render(&[], &rows, TableFormat::Plain));
            output.push('\n');
        }
    }

    output
}

fn comment_row(comment: &Comment, palette: Palette) -> Vec<String> {
    let author = comment
        .revised_by
        .as_ref()
        .map(|identity| identity.to_string())
        .unwrap_or_default();
    let revised = comment
        .revised_date
        .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    vec![
        palette.accent(&palette.bold(&author)),
        revised,
        html_to_text(&comment.text),
    ]
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
