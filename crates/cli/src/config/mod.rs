// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `propcheck.toml` configuration.
//!
//! ```toml
//! version = 1
//! mode = "fail-fast"
//! limit = 20
//! disabled_exemption = "all"
//! include = ["components/**/*.toml"]
//! exclude = ["components/legacy/**"]
//! ```
//!
//! Unknown keys are warned about, not rejected.

pub mod defaults;

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::engine::{DisabledExemption, Mode};

/// Supported config version.
pub const CONFIG_VERSION: i64 = 1;

const KNOWN_KEYS: &[&str] =
    &["version", "mode", "limit", "disabled_exemption", "include", "exclude"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: i64,

    /// Aggregation mode.
    pub mode: Mode,

    /// Violations printed per component. `0` means no limit.
    pub limit: usize,

    /// Which events a disabled root is excused from.
    pub disabled_exemption: DisabledExemption,

    /// Manifest include patterns.
    pub include: Vec<String>,

    /// Manifest exclude patterns, added to the built-in ones.
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            mode: Mode::default(),
            limit: defaults::output::LIMIT,
            disabled_exemption: DisabledExemption::default(),
            include: defaults::patterns::include(),
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Print limit, or `None` when unlimited.
    pub fn limit(&self) -> Option<usize> {
        (self.limit > 0).then_some(self.limit)
    }

    /// Configured exclude patterns plus the built-in ones.
    pub fn exclude_patterns(&self) -> Vec<String> {
        let mut patterns = defaults::patterns::exclude();
        for pattern in &self.exclude {
            if !patterns.contains(pattern) {
                patterns.push(pattern.clone());
            }
        }
        patterns
    }
}

/// Parse config text. Returns the config and warnings for unknown keys.
pub fn parse(content: &str) -> anyhow::Result<(Config, Vec<String>)> {
    let table: toml::Table = toml::from_str(content)?;
    let warnings = table
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .map(|key| format!("unknown config key `{key}`"))
        .collect();

    let config: Config = toml::Value::Table(table).try_into()?;
    if config.version != CONFIG_VERSION {
        anyhow::bail!(
            "unsupported config version {} (expected {})",
            config.version,
            CONFIG_VERSION
        );
    }
    Ok((config, warnings))
}

/// Load a config file, printing warnings to stderr.
pub fn load_with_warnings(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let (config, warnings) =
        parse(&content).with_context(|| format!("invalid config {}", path.display()))?;
    for warning in warnings {
        eprintln!("propcheck: warning: {}: {}", path.display(), warning);
    }
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
