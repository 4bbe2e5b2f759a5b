// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::{Rule, RuleContext, RuleId, RuleResult};
use crate::node::Props;

/// The component renders with no props at all.
pub struct NoBreak;

impl Rule for NoBreak {
    fn id(&self) -> RuleId {
        RuleId::NoBreak
    }

    fn description(&self) -> &'static str {
        "Renders with no props without failing"
    }

    fn run(&self, ctx: &RuleContext<'_>) -> RuleResult {
        // A render error propagates; the engine records it under this rule.
        ctx.mount(Props::new())?;
        Ok(Vec::new())
    }
}
