// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[test]
fn disabled_palette_passes_text_through() {
    let palette = Palette::new(false);
    assert_eq!(palette.by_type("Task", "4211"), "4211");
    assert_eq!(palette.bold("t"), "t");
    assert_eq!(palette.italic("t"), "t");
    assert_eq!(palette.underline("t"), "t");
    assert_eq!(palette.label("t"), "t");
    assert_eq!(palette.accent("t"), "t");
}

#[parameterized(
    backlog_item = { "Product Backlog Item", codes::BACKLOG_ITEM },
    task = { "Task", codes::TASK },
    feature = { "Feature", codes::FEATURE },
    epic = { "Epic", codes::EPIC },
)]
fn known_types_get_their_color(work_item_type: &str, code: u8) {
    let palette = Palette::new(true);
    let colored = palette.by_type(work_item_type, "x");
    assert!(colored.starts_with(&format!("\x1b[38;5;{}m", code)));
    assert!(colored.ends_with(codes::RESET));
}

#[test]
fn unknown_types_stay_uncolored() {
    let palette = Palette::new(true);
    assert_eq!(palette.by_type("Impediment", "x"), "x");
}

#[test]
fn style_wrappers_reset() {
    let palette = Palette::new(true);
    assert_eq!(palette.bold("t"), "\x1b[1mt\x1b[0m");
    assert_eq!(palette.italic("t"), "\x1b[3mt\x1b[0m");
    assert_eq!(palette.underline("t"), "\x1b[4mt\x1b[0m");
}

#[test]
fn help_colors_use_256_codes() {
    assert!(header("Options:").contains("\x1b[38;5;74m"));
    assert!(literal("list").contains("\x1b[38;5;250m"));
    assert!(context("[default]").contains("\x1b[38;5;245m"));
}
