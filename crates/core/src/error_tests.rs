// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[test]
fn missing_token_mentions_env_var() {
    let msg = Error::MissingToken.to_string();
    assert!(msg.contains("PAT_TOKEN"));
    assert!(msg.contains("hint:"));
}

#[test]
fn missing_setting_names_key() {
    let msg = Error::MissingSetting { key: "organization" }.to_string();
    assert!(msg.contains("organization"));
}

#[test]
fn batch_too_large_reports_sizes() {
    let msg = Error::BatchTooLarge { len: 250, max: 200 }.to_string();
    assert!(msg.contains("250"));
    assert!(msg.contains("200"));
}

#[test]
fn empty_chunk_lists_ids() {
    let msg = Error::EmptyChunk { ids: vec![7, 8] }.to_string();
    assert!(msg.contains("[7, 8]"));
    assert!(msg.contains("check usage"));
}

#[parameterized(
    not_found = { Error::WorkItemNotFound(42), "42" },
    transport = { Error::Transport("connection refused".to_string()), "connection refused" },
)]
fn message_carries_detail(err: Error, needle: &str) {
    assert!(err.to_string().contains(needle));
}

#[test]
fn json_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}
