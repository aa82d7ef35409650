// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use ado_core::PatchDocument;

use crate::cli::ConnectionArgs;
use crate::config::Config;
use crate::error::Result;

use super::connect;

/// Moves a work item to the given state.
pub fn move_state(
    id: u32,
    state: &str,
    comment: Option<String>,
    connection: &ConnectionArgs,
) -> Result<()> {
    let config = Config::load()?;
    let client = connect(connection, &config)?;

    let doc = update_document(state, comment.as_deref());
    let item = client.update_work_item(id, &doc)?;
    println!("{} state set to {}", item.id, item.fields.state);
    Ok(())
}

/// Alias for `move <id> Done`.
pub fn close(id: u32, comment: Option<String>, connection: &ConnectionArgs) -> Result<()> {
    move_state(id, "Done", comment, connection)
}

/// Builds the state-transition patch document.
pub(crate) fn update_document(state: &str, comment: Option<&str>) -> PatchDocument {
    let mut doc = PatchDocument::new().add_field("System.State", state);
    if let Some(comment) = comment {
        doc = doc.add_field("System.History", comment);
    }
    doc
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
