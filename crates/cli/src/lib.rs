// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! adors - Azure DevOps work-item CLI library.
//!
//! This crate provides the command surface for the `ado` binary: argument
//! parsing, configuration merging, the blocking HTTP client, and table/card
//! rendering. The query, batching, and hierarchy algorithms live in
//! [`ado_core`].
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - clap argument surface
//! - [`client::Client`] - blocking client for the work-item endpoints
//! - [`Config`] - user defaults merged with command-line overrides
//! - [`Error`] - error types for all operations

mod cli;
pub mod colors;
mod commands;
mod display;
mod help;
mod table;

pub mod client;
pub mod config;
pub mod env;
pub mod error;

pub use cli::{Cli, Command, ConnectionArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};
pub use table::TableFormat;

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::List {
            all,
            area_path,
            assignee,
            hierarchy,
            tags,
            state,
            format,
            output,
            connection,
        } => commands::list::run(
            all, area_path, assignee, hierarchy, tags, state, format, output, &connection,
        ),
        Command::Show {
            ids,
            output,
            connection,
        } => commands::show::run(&ids, output, &connection),
        Command::New {
            title,
            description,
            work_item_type,
            parent,
            area_path,
            iteration,
            assignee,
            connection,
        } => commands::new::run(
            title,
            description,
            &work_item_type,
            parent,
            area_path,
            iteration,
            assignee,
            &connection,
        ),
        Command::Move {
            id,
            state,
            comment,
            connection,
        } => commands::lifecycle::move_state(id, &state, comment, &connection),
        Command::Close {
            id,
            comment,
            connection,
        } => commands::lifecycle::close(id, comment, &connection),
        Command::Open {
            id,
            browser,
            connection,
        } => commands::open::run(id, browser, &connection),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "ado", &mut std::io::stdout());
            Ok(())
        }
    }
}
