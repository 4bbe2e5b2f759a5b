// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::{Rule, RuleContext, RuleId, RuleResult};
use crate::inspect;
use crate::node::Props;
use crate::report::Violation;

/// className passed by the caller.
pub const CLASS_NAME_PROBE: &str = "bar";

/// A passed className is appended to the component's own className.
///
/// Only the first token of the component's own className is checked for
/// survival.
pub struct ClassName;

impl Rule for ClassName {
    fn id(&self) -> RuleId {
        RuleId::ClassName
    }

    fn description(&self) -> &'static str {
        "Appends a passed className instead of replacing its own"
    }

    fn run(&self, ctx: &RuleContext<'_>) -> RuleResult {
        let tree = ctx.mount(Props::new())?;
        let Some(root) = inspect::find_first(&tree) else {
            return Ok(Vec::new());
        };
        let original = root.class_name().and_then(|c| c.split_whitespace().next()).map(str::to_string);

        let tree = ctx.mount(Props::new().with("className", CLASS_NAME_PROBE))?;
        let rendered = inspect::find_first(&tree).and_then(|root| root.class_name()).unwrap_or_default();
        let tokens: Vec<&str> = rendered.split_whitespace().collect();

        let mut violations = Vec::new();
        if !tokens.contains(&CLASS_NAME_PROBE) {
            violations.push(Violation::new(
                RuleId::ClassName,
                "render",
                ctx.message("should render className."),
            ));
        }
        if let Some(original) = original
            && !tokens.contains(&original.as_str())
        {
            violations.push(
                Violation::new(
                    RuleId::ClassName,
                    "override",
                    ctx.message("should append className, not override it."),
                )
                .with_detail(format!("`{original}` was dropped")),
            );
        }
        Ok(violations)
    }
}
