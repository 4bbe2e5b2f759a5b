// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! propcheck: prop-forwarding convention checks for UI components.
//!
//! A component is mounted under synthetic prop sets by a small rendering
//! backend and its render tree is checked against a fixed, ordered list of
//! rules. See [`engine::Engine`] for the entry point.

pub mod catalog;
pub mod cli;
pub mod color;
pub mod component;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod inspect;
pub mod loader;
pub mod manifest;
pub mod mount;
pub mod node;
pub mod output;
pub mod report;
pub mod rules;
pub mod runner;

#[cfg(test)]
pub mod test_utils;

pub use component::Component;
pub use engine::{Engine, EngineOptions, Mode, assert_conventions, check};
pub use error::{Failure, RenderError};
pub use node::{Node, PropValue, Props, Style, StyleValue};
pub use report::{Report, Violation};
pub use rules::RuleId;
