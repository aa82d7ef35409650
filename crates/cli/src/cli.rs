// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::colors;
use crate::help;
use crate::table::TableFormat;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Connection arguments shared by every remote command.
///
/// Command-line values take precedence over the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct ConnectionArgs {
    /// Azure DevOps organization (defaults to the configured organization)
    #[arg(long)]
    pub org: Option<String>,

    /// Project name (defaults to the configured project)
    #[arg(long)]
    pub project: Option<String>,
}

#[derive(Parser)]
#[command(name = "ado")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A work-item CLI for Azure DevOps Boards")]
#[command(
    long_about = "A work-item CLI for Azure DevOps Boards.\n\n\
    List, inspect, create, and transition work items from the terminal.\n\
    Remote access needs a personal access token in PAT_TOKEN."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List work items assigned to a user
    #[command(after_help = colors::examples(
        "\
Examples:
  ado list                         List your open work items
  ado list --hierarchy             Group children under their parents
  ado list -a Project\\\\TeamA       Restrict to one area path
  ado list --all                   Ignore the configured area path
  ado list --tags --state          Add the Tags and State columns
  ado list -o json                 Structured output for scripting"
    ))]
    List {
        /// List work items on all area paths
        #[arg(long, conflicts_with = "area_path")]
        all: bool,

        /// Area path to restrict the search to
        #[arg(short = 'a', long = "area-path")]
        area_path: Option<String>,

        /// Email of the assignee (defaults to the configured username)
        #[arg(short = 'u', long)]
        assignee: Option<String>,

        /// Reconstruct the parent/child tree from hierarchy links
        #[arg(long)]
        hierarchy: bool,

        /// Show the Tags column
        #[arg(long)]
        tags: bool,

        /// Show the State column
        #[arg(long)]
        state: bool,

        /// Table format
        #[arg(short = 'f', long)]
        format: Option<TableFormat>,

        /// Output format
        #[arg(short = 'o', long, default_value = "text")]
        output: OutputFormat,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Show work item details, including comments
    #[command(after_help = colors::examples(
        "\
Examples:
  ado show 4211                    Show one work item as a card
  ado show 4211 4212 4213          Show several items in one batch
  ado show 4211 -o json            Raw item JSON"
    ))]
    Show {
        /// Work item id(s) to display
        #[arg(required = true)]
        ids: Vec<u32>,

        /// Output format
        #[arg(short = 'o', long, default_value = "text")]
        output: OutputFormat,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Create a work item
    #[command(after_help = colors::examples(
        "\
Examples:
  ado new \"Fix login\" \"Session cookie expires early\"
  ado new \"Auth epic\" \"Track auth work\" -t Epic
  ado new \"Subtask\" \"Part of 4211\" -p 4211"
    ))]
    New {
        /// Title of the work item
        title: String,

        /// Description of the work item
        description: String,

        /// Work item type to create
        #[arg(short = 't', long = "type", default_value = "Task")]
        work_item_type: String,

        /// Id of the parent work item
        #[arg(short = 'p', long)]
        parent: Option<u32>,

        /// Area path to create the item under
        #[arg(short = 'a', long = "area-path")]
        area_path: Option<String>,

        /// Iteration path to place the item in
        #[arg(short = 'i', long)]
        iteration: Option<String>,

        /// Email of the assignee (defaults to the configured username)
        #[arg(short = 'u', long)]
        assignee: Option<String>,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Change a work item's state
    Move {
        /// Work item id
        id: u32,

        /// Target state (must be valid for the item's type)
        state: String,

        /// Optional comment to record with the transition
        comment: Option<String>,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Close a work item (move it to Done)
    Close {
        /// Work item id
        id: u32,

        /// Optional closing comment
        comment: Option<String>,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Open a work item in the browser
    Open {
        /// Work item id
        id: u32,

        /// Browser command to launch
        #[arg(short = 'b', long)]
        browser: Option<String>,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
