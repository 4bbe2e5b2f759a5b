// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Config structs delegate to these via their `default_*` methods.

/// Config file name looked up by discovery.
pub const CONFIG_FILE: &str = "propcheck.toml";

/// Default output limits.
pub mod output {
    /// Violations printed per component before "... and N more" (10).
    pub const LIMIT: usize = 10;
}

/// Default glob patterns for manifest discovery.
pub mod patterns {
    /// Files considered component manifests.
    pub fn include() -> Vec<String> {
        vec!["**/*.toml".to_string()]
    }

    /// TOML files that are never manifests.
    pub fn exclude() -> Vec<String> {
        vec![
            super::CONFIG_FILE.to_string(),
            format!("**/{}", super::CONFIG_FILE),
            "Cargo.toml".to_string(),
            "**/Cargo.toml".to_string(),
            "**/target/**".to_string(),
        ]
    }
}
