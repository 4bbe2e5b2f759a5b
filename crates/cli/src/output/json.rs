// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use chrono::Utc;
use serde::Serialize;

use crate::engine::Mode;
use crate::runner::{ComponentResult, Summary};

use super::rule_infos;

#[derive(Serialize)]
struct JsonOutput<'a> {
    timestamp: String,
    mode: Mode,
    passed: bool,
    components: &'a [ComponentResult],
    summary: &'a Summary,
}

/// Serialize a run. Every violation is included regardless of limits.
pub fn format_json(
    mode: Mode,
    results: &[ComponentResult],
    summary: &Summary,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonOutput {
        timestamp: Utc::now().to_rfc3339(),
        mode,
        passed: summary.passed(),
        components: results,
        summary,
    })
}

/// Serialize the rule list.
pub fn format_rules_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&rule_infos())
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
