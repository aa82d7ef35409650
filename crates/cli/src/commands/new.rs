// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ado_core::PatchDocument;

use crate::cli::ConnectionArgs;
use crate::colors::Palette;
use crate::config::{self, Config};
use crate::error::Result;

use super::connect;

#[allow(clippy::too_many_arguments)]
pub fn run(
    title: String,
    description: String,
    work_item_type: &str,
    parent: Option<u32>,
    area_path: Option<String>,
    iteration: Option<String>,
    assignee: Option<String>,
    connection: &ConnectionArgs,
) -> Result<()> {
    let config = Config::load()?;
    let client = connect(connection, &config)?;
    let username = config::require(assignee, config.username.as_ref(), "username")?;

    let area = config::prefer(area_path, config.area_path.as_ref());
    let iteration = config::prefer(iteration, config.iteration.as_ref());
    let parent_url = parent.map(|id| client.work_item_api_url(id));

    let doc = create_document(
        &title,
        &description,
        &username,
        area.as_deref(),
        iteration.as_deref(),
        parent_url.as_deref(),
    );

    let item = client.create_work_item(work_item_type, &doc)?;

    let palette = Palette::detect(config.color);
    let kind = item.fields.work_item_type.as_str();
    println!(
        "Created {} {} {}",
        palette.by_type(kind, &item.id.to_string()),
        palette.by_type(kind, kind),
        item.fields.title,
    );
    Ok(())
}

/// Builds the creation patch document.
pub(crate) fn create_document(
    title: &str,
    description: &str,
    assignee: &str,
    area_path: Option<&str>,
    iteration: Option<&str>,
    parent_url: Option<&str>,
) -> PatchDocument {
    let mut doc = PatchDocument::new()
        .add_field("System.Title", title)
        .add_field("System.Description", description)
        .add_field("System.AssignedTo", assignee);

    if let Some(area) = area_path {
        doc = doc.add_field("System.AreaPath", area);
    }
    if let Some(iteration) = iteration {
        doc = doc.add_field("System.IterationPath", iteration);
    }
    if let Some(url) = parent_url {
        doc = doc.add_parent(url);
    }
    doc
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
