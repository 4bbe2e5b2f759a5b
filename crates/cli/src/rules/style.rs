// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::{Rule, RuleContext, RuleId, RuleResult};
use crate::catalog;
use crate::inspect;
use crate::node::{Props, Style, StyleValue};
use crate::report::Violation;

/// Inline style is accepted from props and merged with the component's own.
///
/// Three renders: bare (to capture the internal style), with the full style
/// catalog (every property must come through), and with the catalog minus
/// the internal keys (every internal property must survive).
pub struct StyleMerge;

impl Rule for StyleMerge {
    fn id(&self) -> RuleId {
        RuleId::Style
    }

    fn description(&self) -> &'static str {
        "Accepts inline style and merges it with its own"
    }

    fn run(&self, ctx: &RuleContext<'_>) -> RuleResult {
        let tree = ctx.mount(Props::new())?;
        let Some(root) = inspect::find_first(&tree) else {
            return Ok(Vec::new());
        };
        let original: Style = root.style().cloned().unwrap_or_default();
        let catalog = catalog::style();
        let mut violations = Vec::new();

        let tree = ctx.mount(Props::new().with("style", catalog.clone()))?;
        let rendered = inspect::find_first(&tree).and_then(|root| root.style());
        for (prop, expected) in catalog.iter() {
            if rendered.and_then(|style| style.get(prop)) != Some(expected) {
                violations.push(
                    Violation::new(
                        RuleId::Style,
                        "accept",
                        ctx.message(format_args!("should accept inline style (`{prop}`) via props.")),
                    )
                    .with_prop(prop),
                );
            }
        }

        if original.is_empty() {
            return Ok(violations);
        }

        let additive = catalog.without(|prop| original.contains_key(prop));
        let tree = ctx.mount(Props::new().with("style", additive))?;
        let rendered = inspect::find_first(&tree).and_then(|root| root.style());
        for prop in original.keys() {
            let kept = rendered.and_then(|style| style.get(prop)).is_some_and(StyleValue::is_truthy);
            if !kept {
                violations.push(
                    Violation::new(
                        RuleId::Style,
                        "append",
                        ctx.message("should append inline style via props, not replace it."),
                    )
                    .with_prop(prop),
                );
            }
        }
        Ok(violations)
    }
}
