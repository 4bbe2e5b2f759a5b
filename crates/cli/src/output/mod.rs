// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for check results.

mod json;
mod text;

use serde::Serialize;

use crate::report::Violation;
use crate::rules::{RULES, RuleId};
use crate::runner::{ComponentResult, Outcome};

pub use json::{format_json, format_rules_json};
pub use text::TextFormatter;

/// Violations of one result, in rule order.
pub(crate) fn violations(result: &ComponentResult) -> Vec<&Violation> {
    match &result.outcome {
        Outcome::Checked(report) => report.violations().collect(),
        Outcome::Failed(failure) => vec![&failure.violation],
        Outcome::Passed | Outcome::Crashed { .. } => Vec::new(),
    }
}

/// Rule listing entry.
#[derive(Debug, Serialize)]
pub struct RuleInfo {
    pub order: usize,
    pub id: RuleId,
    pub description: &'static str,
}

/// Every rule with its position in execution order.
pub fn rule_infos() -> Vec<RuleInfo> {
    RULES
        .iter()
        .enumerate()
        .map(|(i, rule)| RuleInfo { order: i + 1, id: rule.id(), description: rule.description() })
        .collect()
}
