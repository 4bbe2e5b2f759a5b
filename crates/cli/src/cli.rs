// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::engine::{DisabledExemption, Mode};

/// Checks that UI components forward props, children, className, style and event handlers
#[derive(Parser)]
#[command(name = "propcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PROPCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check components declared in manifests
    Check(CheckArgs),
    /// List the rules in execution order
    Rules(RulesArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Manifest files or directories to check
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Stop checking a component at its first violation
    #[arg(long)]
    pub fail_fast: bool,

    /// Run every rule on every component, overriding a fail-fast config
    #[arg(long, conflicts_with = "fail_fast")]
    pub collect_all: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Maximum violations to display per component (default: 10, 0 = all)
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Show all violations (no limit)
    #[arg(long, conflicts_with = "limit")]
    pub no_limit: bool,

    /// Which simulated events a disabled root is excused from
    #[arg(long, value_name = "EVENTS")]
    pub disabled_exemption: Option<DisabledExemption>,
}

impl CheckArgs {
    pub fn color_mode(&self) -> ColorMode {
        if self.no_color { ColorMode::Never } else { self.color }
    }

    /// Aggregation mode, with flags taking precedence over `configured`.
    pub fn mode(&self, configured: Mode) -> Mode {
        if self.fail_fast {
            Mode::FailFast
        } else if self.collect_all {
            Mode::CollectAll
        } else {
            configured
        }
    }

    /// Per-component print limit. `None` prints everything.
    pub fn print_limit(&self, configured: Option<usize>) -> Option<usize> {
        if self.no_limit {
            return None;
        }
        match self.limit {
            Some(0) => None,
            Some(limit) => Some(limit),
            None => configured,
        }
    }
}

#[derive(clap::Args)]
pub struct RulesArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
