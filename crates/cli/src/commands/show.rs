// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;

use ado_core::{fetch_details, WorkItem, WorkItemSource};

use crate::cli::{ConnectionArgs, OutputFormat};
use crate::colors::Palette;
use crate::config::Config;
use crate::display::format_card;
use crate::error::Result;

use super::connect;

pub fn run(ids: &[u32], output: OutputFormat, connection: &ConnectionArgs) -> Result<()> {
    let config = Config::load()?;
    let client = connect(connection, &config)?;

    let items = run_impl(&client, ids)?;

    if output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    let palette = Palette::detect(config.color);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            println!("---");
        }
        let comments = match (item.fields.comment_count.unwrap_or(0), item.comments_url()) {
            (0, _) | (_, None) => None,
            (_, Some(url)) => Some(client.comments(url)?),
        };
        print!("{}", format_card(item, comments.as_ref(), palette));
    }
    Ok(())
}

/// Batch-fetches the requested ids and returns them in request order.
///
/// An id the detail fetch did not return (deleted between calls, or
/// dropped by the omit policy) is a not-found error here: the user named
/// it explicitly.
pub(crate) fn run_impl<S: WorkItemSource>(source: &S, ids: &[u32]) -> Result<Vec<WorkItem>> {
    let details = fetch_details(source, ids)?;
    let mut by_id: HashMap<u32, WorkItem> =
        details.into_iter().map(|item| (item.id, item)).collect();

    ids.iter()
        .map(|&id| {
            by_id
                .remove(&id)
                .ok_or_else(|| ado_core::Error::WorkItemNotFound(id).into())
        })
        .collect()
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
