// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::{Rule, RuleContext, RuleId, RuleResult};
use crate::catalog;
use crate::inspect;
use crate::report::Violation;

/// Every forwardable attribute reaches the root element unchanged.
pub struct HtmlProps;

impl Rule for HtmlProps {
    fn id(&self) -> RuleId {
        RuleId::HtmlProps
    }

    fn description(&self) -> &'static str {
        "Passes HTML and ARIA attributes through to the root element"
    }

    fn run(&self, ctx: &RuleContext<'_>) -> RuleResult {
        if !ctx.has_root()? {
            return Ok(Vec::new());
        }

        let supplied = catalog::attributes();
        let tree = ctx.mount(supplied.clone())?;
        let resolved = inspect::find_first(&tree).map(|root| &root.props);

        let mut violations = Vec::new();
        for (prop, expected) in supplied.iter() {
            let kind = match resolved.and_then(|props| props.get(prop)) {
                Some(actual) if actual == expected => continue,
                Some(actual) if actual.is_truthy() => "override",
                _ => "render",
            };
            violations.push(
                Violation::new(
                    RuleId::HtmlProps,
                    kind,
                    ctx.message(format_args!("should render html prop (`{prop}`).")),
                )
                .with_prop(prop),
            );
        }
        Ok(violations)
    }
}
