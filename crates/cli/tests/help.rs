// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Binary smoke tests: the CLI surface parses and prints help without
//! touching the network.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_command_surface() {
    Command::cargo_bin("ado")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("completion")),
        );
}

#[test]
fn version_flag_prints_version() {
    Command::cargo_bin("ado")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_subcommand_is_an_error() {
    Command::cargo_bin("ado").unwrap().assert().failure();
}

#[test]
fn subcommand_help_shows_examples() {
    Command::cargo_bin("ado")
        .unwrap()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--hierarchy"));
}
