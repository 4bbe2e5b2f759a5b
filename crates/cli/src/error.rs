// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

use serde::Serialize;

use crate::report::Violation;

/// Exit codes returned by the `propcheck` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    CheckFailed = 1,
    ConfigError = 2,
    InternalError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// A component could not be rendered or an event could not be delivered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The component returned an error.
    #[error("{component}: {message}")]
    Component { component: String, message: String },

    /// The component panicked while rendering.
    #[error("{component} panicked: {message}")]
    Panicked { component: String, message: String },

    /// Components nested deeper than the backend allows.
    #[error("components nested deeper than {0} levels")]
    TooDeep(usize),

    /// An event handler panicked during simulation.
    #[error("handler for `{event}` panicked: {message}")]
    Handler { event: String, message: String },
}

impl RenderError {
    /// An error raised by a render function.
    ///
    /// The component name is filled in by the backend.
    pub fn msg(message: impl Into<String>) -> Self {
        RenderError::Component { component: String::new(), message: message.into() }
    }
}

/// A fail-fast failure: the first violation found for a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{}", .violation.message)]
pub struct Failure {
    pub violation: Violation,
}

impl Failure {
    pub fn new(violation: Violation) -> Self {
        Self { violation }
    }
}

/// A component manifest set could not be turned into components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManifestError {
    #[error("component `{name}` must set exactly one of `tag` or `wraps`")]
    Root { name: String },

    #[error("component `{name}` sets `extra` but does not render a `tag`")]
    ExtraWithoutTag { name: String },

    #[error("component `{name}` wraps unknown component `{wraps}`")]
    Unknown { name: String, wraps: String },

    #[error("component `{name}` is declared twice")]
    Duplicate { name: String },

    #[error("components wrap each other in a cycle: {0}")]
    Cycle(String),
}

/// Manifest discovery or parsing failed.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse { path: PathBuf, source: Box<toml::de::Error> },

    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern { pattern: String, source: globset::Error },

    #[error("failed to walk {}: {source}", .path.display())]
    Walk { path: PathBuf, source: ignore::Error },

    #[error("path does not exist: {}", .0.display())]
    Missing(PathBuf),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}
