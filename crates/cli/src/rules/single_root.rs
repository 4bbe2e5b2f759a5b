// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::{Rule, RuleContext, RuleId, RuleResult};
use crate::inspect;
use crate::node::Props;
use crate::report::Violation;

/// The component renders at most one markup element.
///
/// Null renderers pass; wrappers pass as long as the whole expanded tree
/// holds a single element.
pub struct SingleRoot;

impl Rule for SingleRoot {
    fn id(&self) -> RuleId {
        RuleId::SingleRoot
    }

    fn description(&self) -> &'static str {
        "Renders exactly one markup element"
    }

    fn run(&self, ctx: &RuleContext<'_>) -> RuleResult {
        let tree = ctx.mount(Props::new())?;
        let elements = inspect::find_all(&tree);
        if elements.len() <= 1 {
            return Ok(Vec::new());
        }

        let tags: Vec<&str> = elements.iter().map(|e| e.tag.as_str()).collect();
        tracing::debug!("{} renders {} elements", ctx.name(), tags.len());
        Ok(vec![
            Violation::new(
                RuleId::SingleRoot,
                "multiple",
                ctx.message("should render only one element."),
            )
            .with_detail(tags.join(" > ")),
        ])
    }
}
