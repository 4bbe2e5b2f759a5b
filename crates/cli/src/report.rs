// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Violations and per-component reports.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::rules::RuleId;

/// One deviation from a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: RuleId,
    /// Which part of the rule failed, e.g. `render` or `override`.
    pub kind: &'static str,
    /// The prop the violation is about, when the rule probes many.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prop: Option<String>,
    pub message: String,
    /// Underlying error text for render failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Violation {
    pub fn new(rule: RuleId, kind: &'static str, message: impl Into<String>) -> Self {
        Self { rule, kind, prop: None, message: message.into(), detail: None }
    }

    pub fn with_prop(mut self, prop: impl Into<String>) -> Self {
        self.prop = Some(prop.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Violations of every rule that ran against one component.
///
/// Only the engine builds reports; callers get them finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    component: String,
    rules: BTreeMap<RuleId, Vec<Violation>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<RuleId>,
}

impl Report {
    pub(crate) fn new(component: impl Into<String>) -> Self {
        Self { component: component.into(), rules: BTreeMap::new(), skipped: Vec::new() }
    }

    pub(crate) fn record(&mut self, rule: RuleId, violations: Vec<Violation>) {
        self.rules.entry(rule).or_default().extend(violations);
    }

    pub(crate) fn skip(&mut self, rule: RuleId) {
        self.skipped.push(rule);
    }

    /// Display name of the checked component.
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Violations of `rule`; empty when it passed or did not run.
    pub fn get(&self, rule: RuleId) -> &[Violation] {
        self.rules.get(&rule).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `rule` ran to completion.
    pub fn ran(&self, rule: RuleId) -> bool {
        self.rules.contains_key(&rule)
    }

    /// Rules that did not run because the component failed to render.
    pub fn skipped(&self) -> &[RuleId] {
        &self.skipped
    }

    /// All violations in rule order.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.rules.values().flatten()
    }

    pub fn violation_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.violation_count() == 0
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
