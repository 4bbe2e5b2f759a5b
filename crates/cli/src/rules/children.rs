// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::{Rule, RuleContext, RuleId, RuleResult};
use crate::inspect;
use crate::node::Props;
use crate::report::Violation;

/// Literal passed as `children`.
pub const CHILDREN_PROBE: &str = "children";

/// The component renders the children it is given.
///
/// Exempt: components without a markup root, and void elements.
pub struct Children;

impl Rule for Children {
    fn id(&self) -> RuleId {
        RuleId::Children
    }

    fn description(&self) -> &'static str {
        "Renders children passed as a prop"
    }

    fn run(&self, ctx: &RuleContext<'_>) -> RuleResult {
        let tree = ctx.mount(Props::new())?;
        match inspect::tag_of(&tree) {
            None => return Ok(Vec::new()),
            Some(tag) if inspect::is_void_tag(tag) => return Ok(Vec::new()),
            Some(_) => {}
        }

        let tree = ctx.mount(Props::new().with("children", CHILDREN_PROBE))?;
        if inspect::contains_text(&tree, CHILDREN_PROBE) {
            Ok(Vec::new())
        } else {
            Ok(vec![Violation::new(
                RuleId::Children,
                "render",
                ctx.message("should render its children."),
            )])
        }
    }
}
