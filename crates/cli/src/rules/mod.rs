// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The convention rules, in execution order.
//!
//! Each rule mounts the component one or more times with crafted props and
//! inspects the resulting tree. A rule returns its violations, or the
//! [`RenderError`] that stopped it; the engine turns the latter into a
//! `no-break` violation and skips the remaining rules.

mod children;
mod class_name;
mod event_handlers;
mod html_props;
mod no_break;
mod single_root;
mod style;

use std::fmt;

use serde::Serialize;

use crate::component::Component;
use crate::engine::EngineOptions;
use crate::error::RenderError;
use crate::inspect;
use crate::mount::{self, RenderTree};
use crate::node::Props;
use crate::report::Violation;

pub use children::{CHILDREN_PROBE, Children};
pub use class_name::{CLASS_NAME_PROBE, ClassName};
pub use event_handlers::EventHandlers;
pub use html_props::HtmlProps;
pub use no_break::NoBreak;
pub use single_root::SingleRoot;
pub use style::StyleMerge;

/// Identifier of a rule. Ordering follows execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    NoBreak,
    SingleRoot,
    Children,
    HtmlProps,
    ClassName,
    Style,
    EventHandlers,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::NoBreak => "no-break",
            RuleId::SingleRoot => "single-root",
            RuleId::Children => "children",
            RuleId::HtmlProps => "html-props",
            RuleId::ClassName => "class-name",
            RuleId::Style => "style",
            RuleId::EventHandlers => "event-handlers",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one rule.
pub type RuleResult = Result<Vec<Violation>, RenderError>;

/// A convention check.
pub trait Rule: Sync {
    fn id(&self) -> RuleId;

    /// One-line summary for `propcheck rules`.
    fn description(&self) -> &'static str;

    fn run(&self, ctx: &RuleContext<'_>) -> RuleResult;
}

/// Every rule, in the order they run.
pub static RULES: [&dyn Rule; 7] = [
    &NoBreak,
    &SingleRoot,
    &Children,
    &HtmlProps,
    &ClassName,
    &StyleMerge,
    &EventHandlers,
];

/// What a rule gets to work with.
pub struct RuleContext<'a> {
    component: &'a Component,
    options: &'a EngineOptions,
}

impl<'a> RuleContext<'a> {
    pub fn new(component: &'a Component, options: &'a EngineOptions) -> Self {
        Self { component, options }
    }

    pub fn name(&self) -> &str {
        self.component.name()
    }

    pub fn options(&self) -> &EngineOptions {
        self.options
    }

    pub fn mount(&self, props: Props) -> Result<RenderTree, RenderError> {
        mount::mount(self.component, props)
    }

    /// Mount with no props and report whether the result has a markup root.
    ///
    /// Components that render no markup are exempt from the prop rules.
    pub fn has_root(&self) -> Result<bool, RenderError> {
        let tree = self.mount(Props::new())?;
        Ok(inspect::find_first(&tree).is_some())
    }

    /// "`Name` <tail>"
    pub fn message(&self, tail: impl fmt::Display) -> String {
        format!("`{}` {}", self.name(), tail)
    }

    /// The violation recorded when the component fails to render.
    pub fn broken(&self, err: &RenderError) -> Violation {
        Violation::new(RuleId::NoBreak, "break", self.message("should not break."))
            .with_detail(err.to_string())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
