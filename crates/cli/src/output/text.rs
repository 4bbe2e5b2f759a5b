// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.

use std::io;

use termcolor::WriteColor;

use crate::color::scheme;
use crate::runner::{ComponentResult, Outcome, Summary};

use super::{rule_infos, violations};

/// Human-readable output with optional colors.
pub struct TextFormatter {
    /// Violations printed per component (None = unlimited).
    limit: Option<usize>,
}

impl TextFormatter {
    pub fn new(limit: Option<usize>) -> Self {
        Self { limit }
    }

    /// Write every result followed by the summary.
    pub fn write_results(
        &self,
        w: &mut dyn WriteColor,
        results: &[ComponentResult],
        summary: &Summary,
    ) -> io::Result<()> {
        for result in results {
            self.write_result(w, result)?;
        }
        self.write_summary(w, summary)
    }

    pub fn write_result(&self, w: &mut dyn WriteColor, result: &ComponentResult) -> io::Result<()> {
        let passed = result.outcome.passed();
        if passed {
            w.set_color(&scheme::pass())?;
            write!(w, "✔")?;
        } else {
            w.set_color(&scheme::fail())?;
            write!(w, "✘")?;
        }
        w.reset()?;
        write!(w, " ")?;
        w.set_color(&scheme::component_name())?;
        write!(w, "{}", result.name)?;
        w.reset()?;
        write!(w, " ")?;
        w.set_color(&scheme::path())?;
        write!(w, "{}", result.label)?;
        w.reset()?;
        writeln!(w)?;

        if let Outcome::Crashed { message } = &result.outcome {
            w.set_color(&scheme::violation())?;
            writeln!(w, "  {message}")?;
            w.reset()?;
        }

        let violations = violations(result);
        let shown = self.limit.unwrap_or(usize::MAX).min(violations.len());
        for violation in &violations[..shown] {
            w.set_color(&scheme::violation())?;
            writeln!(w, "  {}", violation.message)?;
            w.reset()?;
            if let Some(detail) = &violation.detail {
                w.set_color(&scheme::detail())?;
                writeln!(w, "    {detail}")?;
                w.reset()?;
            }
        }
        if violations.len() > shown {
            w.set_color(&scheme::truncated())?;
            writeln!(w, "  ... and {} more errors.", violations.len() - shown)?;
            w.reset()?;
        }

        if let Outcome::Checked(report) = &result.outcome
            && !report.skipped().is_empty()
        {
            let skipped: Vec<&str> = report.skipped().iter().map(|id| id.as_str()).collect();
            w.set_color(&scheme::detail())?;
            writeln!(w, "  skipped: {}", skipped.join(", "))?;
            w.reset()?;
        }

        if !passed {
            writeln!(w)?;
        }
        Ok(())
    }

    pub fn write_summary(&self, w: &mut dyn WriteColor, summary: &Summary) -> io::Result<()> {
        writeln!(w)?;
        writeln!(w, "{} {}", summary.components, plural(summary.components, "component"))?;
        let errors = format!("{} {}", summary.violations, plural(summary.violations, "error"));
        if summary.passed() {
            w.set_color(&scheme::pass())?;
        } else {
            w.set_color(&scheme::fail())?;
        }
        write!(w, "{errors}")?;
        w.reset()?;
        writeln!(w)
    }

    /// `propcheck rules` listing.
    pub fn write_rules(&self, w: &mut dyn WriteColor) -> io::Result<()> {
        for info in rule_infos() {
            write!(w, "{}. ", info.order)?;
            w.set_color(&scheme::component_name())?;
            write!(w, "{:<15}", info.id.as_str())?;
            w.reset()?;
            writeln!(w, " {}", info.description)?;
        }
        Ok(())
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 { noun.to_string() } else { format!("{noun}s") }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
