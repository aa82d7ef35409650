// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY
//!
//! Color choice is carried by an explicit [`Palette`] value threaded
//! through the renderer; nothing here is process-global.

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes for help output and work-item types.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;

    /// Product Backlog Item rows: blue
    pub const BACKLOG_ITEM: u8 = 33;
    /// Task rows: yellow
    pub const TASK: u8 = 184;
    /// Feature rows: purple
    pub const FEATURE: u8 = 135;
    /// Epic rows: orange
    pub const EPIC: u8 = 208;

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    format!("{}{}{}", fg256(codes::HEADER), text, codes::RESET)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    format!("{}{}{}", fg256(codes::LITERAL), text, codes::RESET)
}

/// Apply context color (default values, hints) to text.
pub fn context(text: &str) -> String {
    format!("{}{}{}", fg256(codes::CONTEXT), text, codes::RESET)
}

/// Colorize an examples help block.
///
/// Section headers (lines ending with `:`) take the header color; the
/// command part of an example line (before the 2+ space gap) takes the
/// literal color; everything else is left alone.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + 256);
    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
        } else if let Some(gap) = trimmed.find("  ") {
            result.push_str(indent);
            result.push_str(&literal(&trimmed[..gap]));
            result.push_str(&trimmed[gap..]);
        } else {
            result.push_str(line);
        }
    }
    result
}

/// Maps a work-item type name to its row color code.
///
/// Unknown types render uncolored; project-specific type names can be
/// added here.
fn type_code(work_item_type: &str) -> Option<u8> {
    match work_item_type {
        "Product Backlog Item" => Some(codes::BACKLOG_ITEM),
        "Task" => Some(codes::TASK),
        "Feature" => Some(codes::FEATURE),
        "Epic" => Some(codes::EPIC),
        _ => None,
    }
}

/// Explicit color preference threaded through rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// A palette with colors forced on or off.
    pub fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    /// Resolves the effective palette from the user preference and the
    /// terminal environment.
    pub fn detect(prefer_color: bool) -> Self {
        Palette {
            enabled: prefer_color && should_colorize(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Colors `text` by the work-item type of the row it belongs to.
    pub fn by_type(&self, work_item_type: &str, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match type_code(work_item_type) {
            Some(code) => format!("{}{}{}", fg256(code), text, codes::RESET),
            None => text.to_string(),
        }
    }

    pub fn bold(&self, text: &str) -> String {
        self.wrap(text, "\x1b[1m")
    }

    pub fn italic(&self, text: &str) -> String {
        self.wrap(text, "\x1b[3m")
    }

    pub fn underline(&self, text: &str) -> String {
        self.wrap(text, "\x1b[4m")
    }

    /// Blue label color used in the card view.
    pub fn label(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("{}{}{}", fg256(codes::BACKLOG_ITEM), text, codes::RESET)
    }

    /// Yellow accent used for titles and comment authors.
    pub fn accent(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("{}{}{}", fg256(codes::TASK), text, codes::RESET)
    }

    fn wrap(&self, text: &str, start: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("{}{}{}", start, text, codes::RESET)
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
