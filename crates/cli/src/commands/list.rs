// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use ado_core::{
    build_wiql, fetch_details, reconstruct, ListMode, TreeRow, WorkItemIndex, WorkItemSource,
};

use crate::cli::{ConnectionArgs, OutputFormat};
use crate::colors::Palette;
use crate::config::{self, Config};
use crate::display::tree_prefix;
use crate::error::Result;
use crate::table::{self, TableFormat};

use super::connect;

/// Optional columns appended after ID/Type/Title/Iteration.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Columns {
    pub tags: bool,
    pub state: bool,
}

/// JSON representation of one row for list output.
///
/// Depth is carried as data; the tree glyph never appears here.
#[derive(Serialize)]
struct ListItemJson<'a> {
    id: u32,
    #[serde(rename = "type")]
    work_item_type: &'a str,
    title: &'a str,
    state: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    iteration: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<&'a str>,
    depth: usize,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    all: bool,
    area_path: Option<String>,
    assignee: Option<String>,
    hierarchy: bool,
    tags: bool,
    state: bool,
    format: Option<TableFormat>,
    output: OutputFormat,
    connection: &ConnectionArgs,
) -> Result<()> {
    let config = Config::load()?;
    let client = connect(connection, &config)?;
    let username = config::require(assignee, config.username.as_ref(), "username")?;

    let area = if all {
        None
    } else {
        config::prefer(area_path, config.area_path.as_ref())
    };
    let mode = if hierarchy {
        ListMode::Tree
    } else {
        ListMode::Flat
    };

    let rows = run_impl(&client, &username, area.as_deref(), mode)?;

    let columns = Columns { tags, state };
    match output {
        OutputFormat::Text => {
            let palette = Palette::detect(config.color);
            let table_format = format.or(config.table_format).unwrap_or_default();
            println!("{}", render_text(&rows, columns, table_format, palette));
            println!("\n{} work items found for {}", rows.len(), username);
        }
        OutputFormat::Json => println!("{}", render_json(&rows)?),
    }
    Ok(())
}

/// Query, fetch, and reconstruct; everything up to rendering.
pub(crate) fn run_impl<S: WorkItemSource>(
    source: &S,
    assigned_to: &str,
    area_path: Option<&str>,
    mode: ListMode,
) -> Result<Vec<TreeRow>> {
    let wiql = build_wiql(assigned_to, area_path);
    let matches = source.run_query(&wiql)?;
    let ids: Vec<u32> = matches.iter().map(|reference| reference.id).collect();

    let details = fetch_details(source, &ids)?;
    Ok(reconstruct(WorkItemIndex::from_items(details), mode))
}

/// Renders the ordered rows as an aligned table.
///
/// The tree glyph indents the ID/Type/Title cells; the row order is
/// preserved exactly as produced upstream.
pub(crate) fn render_text(
    rows: &[TreeRow],
    columns: Columns,
    format: TableFormat,
    palette: Palette,
) -> String {
    let mut headers = vec!["ID", "Type", "Title", "Iteration"];
    if columns.tags {
        headers.push("Tags");
    }
    if columns.state {
        headers.push("State");
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let fields = &row.item.fields;
            let kind = fields.work_item_type.as_str();
            let prefix = tree_prefix(row.depth);
            let mut line = vec![
                palette.by_type(kind, &format!("{}{}", prefix, row.item.id)),
                palette.by_type(kind, &format!("{}{}", prefix, kind)),
                palette.by_type(kind, &format!("{}{}", prefix, fields.title)),
                palette.by_type(kind, fields.iteration_path.as_deref().unwrap_or("")),
            ];
            if columns.tags {
                line.push(row.item.tag_list().join(", "));
            }
            if columns.state {
                line.push(fields.state.clone());
            }
            line
        })
        .collect();

    table::render(&headers, &cells, format)
}

/// Renders the ordered rows as pretty JSON.
pub(crate) fn render_json(rows: &[TreeRow]) -> Result<String> {
    let items: Vec<ListItemJson<'_>> = rows
        .iter()
        .map(|row| ListItemJson {
            id: row.item.id,
            work_item_type: &row.item.fields.work_item_type,
            title: &row.item.fields.title,
            state: &row.item.fields.state,
            iteration: row.item.fields.iteration_path.as_deref(),
            tags: row.item.tag_list(),
            depth: row.depth,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&items)?)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
