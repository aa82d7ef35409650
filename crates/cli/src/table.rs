// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aligned table rendering.
//!
//! Rows arrive already ordered; this module never resorts them. Column
//! widths are computed on the visible text, so ANSI color sequences inside
//! cells do not skew alignment.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Table layout, mirroring the common `tabulate` formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Header row, dashed separator, data rows.
    #[default]
    Simple,
    /// Header row and data rows, no separator.
    Plain,
    /// GitHub-flavored markdown pipes.
    Github,
}

/// Renders `rows` under `headers` in the requested format.
///
/// Ragged rows are allowed; short rows render with empty trailing cells.
pub fn render(headers: &[&str], rows: &[Vec<String>], format: TableFormat) -> String {
    let columns = headers
        .len()
        .max(rows.iter().map(Vec::len).max().unwrap_or(0));
    let widths = column_widths(headers, rows, columns);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    if !headers.is_empty() {
        match format {
            TableFormat::Simple => {
                lines.push(format_row(&headers_vec(headers, columns), &widths, "  "));
                lines.push(separator_row(&widths, "  "));
            }
            TableFormat::Plain => {
                lines.push(format_row(&headers_vec(headers, columns), &widths, "  "));
            }
            TableFormat::Github => {
                lines.push(pipe_row(&headers_vec(headers, columns), &widths));
                lines.push(pipe_separator(&widths));
            }
        }
    }

    for row in rows {
        let cells = padded_cells(row, columns);
        match format {
            TableFormat::Github => lines.push(pipe_row(&cells, &widths)),
            _ => lines.push(format_row(&cells, &widths, "  ")),
        }
    }

    lines.join("\n")
}

/// Visible width of a cell, skipping ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip to the end of the CSI sequence.
            for follower in chars.by_ref() {
                if follower.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

fn headers_vec(headers: &[&str], columns: usize) -> Vec<String> {
    let mut cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    cells.resize(columns, String::new());
    cells
}

fn padded_cells(row: &[String], columns: usize) -> Vec<String> {
    let mut cells = row.to_vec();
    cells.resize(columns, String::new());
    cells
}

fn column_widths(headers: &[&str], rows: &[Vec<String>], columns: usize) -> Vec<usize> {
    let mut widths = vec![0; columns];
    for (i, header) in headers.iter().enumerate() {
        widths[i] = visible_width(header);
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(visible_width(cell));
        }
    }
    widths
}

/// Pads a cell on the right to the column width, counting visible chars.
fn pad(cell: &str, width: usize) -> String {
    let padding = width.saturating_sub(visible_width(cell));
    format!("{}{}", cell, " ".repeat(padding))
}

fn format_row(cells: &[String], widths: &[usize], gap: &str) -> String {
    let joined: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad(cell, width))
        .collect();
    joined.join(gap).trim_end().to_string()
}

fn separator_row(widths: &[usize], gap: &str) -> String {
    let dashes: Vec<String> = widths.iter().map(|&w| "-".repeat(w.max(1))).collect();
    dashes.join(gap)
}

fn pipe_row(cells: &[String], widths: &[usize]) -> String {
    let joined: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad(cell, width))
        .collect();
    format!("| {} |", joined.join(" | "))
}

fn pipe_separator(widths: &[usize]) -> String {
    let dashes: Vec<String> = widths.iter().map(|&w| "-".repeat(w.max(1))).collect();
    format!("|-{}-|", dashes.join("-|-"))
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
