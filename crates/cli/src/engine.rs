// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule engine: runs every rule against a component, in order.
//!
//! Two aggregation modes:
//! - collect-all ([`Engine::check`]) runs every rule and returns a [`Report`];
//! - fail-fast ([`Engine::assert`]) stops at the first violation and returns
//!   it as a [`Failure`].
//!
//! A render failure in any rule is a `no-break` violation and ends the run
//! for that component.

use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::error::Failure;
use crate::mount;
use crate::report::Report;
use crate::rules::{RULES, RuleContext, RuleId};

/// How violations are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Run every rule and collect all violations.
    #[default]
    CollectAll,
    /// Stop at the first violation.
    FailFast,
}

/// Which simulated events a disabled root is excused from handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisabledExemption {
    /// Mouse events only (click, double click, mouse up/down...).
    #[default]
    Click,
    /// Every event.
    All,
    /// No exemption.
    Off,
}

impl DisabledExemption {
    pub fn applies_to(self, event: &str) -> bool {
        match self {
            DisabledExemption::Click => mount::is_mouse_event(event),
            DisabledExemption::All => true,
            DisabledExemption::Off => false,
        }
    }
}

/// Knobs that change how rules judge a component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub disabled_exemption: DisabledExemption,
}

/// Runs the ordered rule list against components.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Collect-all: run every rule and report what each found.
    pub fn check(&self, component: &Component) -> Report {
        let ctx = RuleContext::new(component, &self.options);
        let mut report = Report::new(ctx.name());

        for (index, rule) in RULES.iter().enumerate() {
            tracing::debug!("{}: running {}", ctx.name(), rule.id());
            match rule.run(&ctx) {
                Ok(violations) => report.record(rule.id(), violations),
                Err(err) => {
                    tracing::debug!("{}: render failed in {}: {}", ctx.name(), rule.id(), err);
                    report.record(RuleId::NoBreak, vec![ctx.broken(&err)]);
                    RULES[index..]
                        .iter()
                        .map(|skipped| skipped.id())
                        .filter(|id| *id != RuleId::NoBreak)
                        .for_each(|id| report.skip(id));
                    break;
                }
            }
        }
        report
    }

    /// Fail-fast: hand the component back when every rule passes.
    pub fn assert(&self, component: Component) -> Result<Component, Failure> {
        {
            let ctx = RuleContext::new(&component, &self.options);
            for rule in &RULES {
                let violations = rule.run(&ctx).unwrap_or_else(|err| vec![ctx.broken(&err)]);
                if let Some(first) = violations.into_iter().next() {
                    tracing::debug!("{}: failed {}", ctx.name(), first.rule);
                    return Err(Failure::new(first));
                }
            }
        }
        Ok(component)
    }
}

/// [`Engine::check`] with default options.
pub fn check(component: &Component) -> Report {
    Engine::default().check(component)
}

/// [`Engine::assert`] with default options.
pub fn assert_conventions(component: Component) -> Result<Component, Failure> {
    Engine::default().assert(component)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
