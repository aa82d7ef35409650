// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_items}
  {list}        List work items assigned to a user
  {show}        Show work item details and comments
  {new}         Create a work item
  {mv}          Change a work item's state
  {close}       Close a work item (move to Done)
  {open}        Open a work item in the browser

{header_setup}
  {completion}  Generate shell completions",
        header_items = colors::header("Work Items:"),
        header_setup = colors::header("Setup:"),
        list = colors::literal("list"),
        show = colors::literal("show"),
        new = colors::literal("new"),
        mv = colors::literal("move"),
        close = colors::literal("close"),
        open = colors::literal("open"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  ado list --hierarchy       List your work items as a tree
  ado show <id>              Show one work item with comments
  ado new \"Title\" \"Desc\"     Create a task assigned to you
  ado close <id>             Mark a work item Done",
    )
}
