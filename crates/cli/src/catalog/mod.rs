// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Synthetic prop catalogs.
//!
//! The tables are derived from static attribute and style lists once per
//! process and shared by every check and every component.

mod attributes;
mod events;
mod style;

use std::sync::LazyLock;

use regex::Regex;

use crate::node::{Props, Style};

pub use events::{EventProbes, Probe};

/// Matches event handler attribute names such as `onClick`.
#[allow(clippy::expect_used)]
static HANDLER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^on[A-Z]").expect("valid regex pattern"));

/// Matches vendor-prefixed style properties such as `WebkitAppearance`.
#[allow(clippy::expect_used)]
static VENDOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Webkit|Moz|ms|O)[A-Z]").expect("valid regex pattern"));

static STYLE: LazyLock<Style> = LazyLock::new(|| {
    style::STYLE_PROPERTIES
        .iter()
        .filter(|name| !VENDOR_PATTERN.is_match(name))
        .map(|name| (*name, (*name).into()))
        .collect()
});

static ATTRIBUTES: LazyLock<Props> = LazyLock::new(|| {
    attributes::HTML_ATTRIBUTES
        .iter()
        .chain(attributes::ARIA_ATTRIBUTES)
        .filter(|name| is_forwardable(name))
        .map(|name| (*name, (*name).into()))
        .collect()
});

static EVENT_HANDLERS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    attributes::HTML_ATTRIBUTES
        .iter()
        .copied()
        .filter(|name| is_handler_name(name))
        .collect()
});

/// Style probe: every non-prefixed style property mapped to its own name.
pub fn style() -> &'static Style {
    &STYLE
}

/// Attribute probe: every forwardable attribute mapped to its own name.
pub fn attributes() -> &'static Props {
    &ATTRIBUTES
}

/// Every event handler attribute name, in catalog order.
pub fn event_handlers() -> &'static [&'static str] {
    &EVENT_HANDLERS
}

/// Whether `name` looks like an event handler attribute.
pub fn is_handler_name(name: &str) -> bool {
    HANDLER_PATTERN.is_match(name)
}

fn is_forwardable(name: &str) -> bool {
    name != "style"
        && name != "className"
        && !is_handler_name(name)
        && !attributes::DENYLIST.contains(&name)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
