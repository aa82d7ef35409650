// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn core_errors_pass_through_unwrapped() {
    let err: Error = ado_core::Error::MissingToken.into();
    // transparent: the core message is the whole message
    assert!(err.to_string().starts_with("PAT_TOKEN"));
}

#[test]
fn config_error_is_prefixed() {
    let err = Error::Config("failed to parse config: bad toml".to_string());
    assert!(err.to_string().starts_with("config error:"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: Error = io.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn json_error_converts() {
    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json.into();
    assert!(matches!(err, Error::Json(_)));
}
