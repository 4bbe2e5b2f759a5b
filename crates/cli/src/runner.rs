// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel component runner with error isolation.
//!
//! Components are independent, so they are checked in parallel using rayon.
//! Each component's rules still run in order on one thread. A panic inside
//! the engine for one component doesn't prevent the others from running.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use serde::Serialize;

use crate::component::Component;
use crate::engine::{Engine, EngineOptions, Mode};
use crate::error::Failure;
use crate::report::Report;

/// A component and where it came from.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Source label, e.g. the manifest path. Only used in output.
    pub label: String,
    pub component: Component,
}

/// Configuration for the runner.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    pub mode: Mode,
    pub options: EngineOptions,
}

/// What checking one component produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum Outcome {
    /// Collect-all report.
    Checked(Report),
    /// Fail-fast: every rule passed.
    Passed,
    /// Fail-fast: the first violation.
    Failed(Failure),
    /// The engine itself panicked.
    Crashed { message: String },
}

impl Outcome {
    pub fn violation_count(&self) -> usize {
        match self {
            Outcome::Checked(report) => report.violation_count(),
            Outcome::Passed => 0,
            Outcome::Failed(_) | Outcome::Crashed { .. } => 1,
        }
    }

    pub fn passed(&self) -> bool {
        self.violation_count() == 0
    }
}

/// Result for one component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentResult {
    pub label: String,
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Totals over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub components: usize,
    pub violations: usize,
}

impl Summary {
    pub fn passed(&self) -> bool {
        self.violations == 0
    }
}

/// Counters shared by the worker threads.
#[derive(Debug, Default)]
struct Tally {
    components: AtomicUsize,
    violations: AtomicUsize,
}

/// Checks a batch of components.
pub struct Runner {
    config: RunnerConfig,
    engine: Engine,
    tally: Tally,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        let engine = Engine::new(config.options.clone());
        Self { config, engine, tally: Tally::default() }
    }

    /// Check every entry. Results keep the input order.
    pub fn run(&self, entries: &[Entry]) -> Vec<ComponentResult> {
        entries
            .par_iter()
            .map(|entry| {
                let outcome = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    self.check(&entry.component)
                })) {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        tracing::error!("engine panicked on {}", entry.label);
                        Outcome::Crashed { message: "Internal error: engine panicked".to_string() }
                    }
                };

                self.tally.components.fetch_add(1, Ordering::SeqCst);
                self.tally.violations.fetch_add(outcome.violation_count(), Ordering::SeqCst);

                ComponentResult {
                    label: entry.label.clone(),
                    name: entry.component.name().to_string(),
                    outcome,
                }
            })
            .collect()
    }

    /// Totals across every [`Runner::run`] call so far.
    pub fn summary(&self) -> Summary {
        Summary {
            components: self.tally.components.load(Ordering::SeqCst),
            violations: self.tally.violations.load(Ordering::SeqCst),
        }
    }

    fn check(&self, component: &Component) -> Outcome {
        match self.config.mode {
            Mode::CollectAll => Outcome::Checked(self.engine.check(component)),
            Mode::FailFast => match self.engine.assert(component.clone()) {
                Ok(_) => Outcome::Passed,
                Err(failure) => Outcome::Failed(failure),
            },
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
