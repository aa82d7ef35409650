// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod lifecycle;
pub mod list;
pub mod new;
pub mod open;
pub mod show;

use crate::cli::ConnectionArgs;
use crate::client::Client;
use crate::config::{self, Config};
use crate::error::Result;

/// Resolves the connection settings and builds a client.
///
/// Fails before any network call when the credential or a required
/// setting is missing from both the command line and the config file.
pub(crate) fn connect(connection: &ConnectionArgs, config: &Config) -> Result<Client> {
    let organization = config::require(
        connection.org.clone(),
        config.organization.as_ref(),
        "organization",
    )?;
    let project = config::require(connection.project.clone(), config.project.as_ref(), "project")?;
    Ok(Client::from_env(organization, project)?)
}
