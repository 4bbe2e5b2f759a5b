// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::{Rule, RuleContext, RuleId, RuleResult};
use crate::catalog::EventProbes;
use crate::inspect;
use crate::mount;
use crate::node::Arg;
use crate::report::Violation;

/// Event handlers are called, with a synthetic event as first argument.
pub struct EventHandlers;

impl Rule for EventHandlers {
    fn id(&self) -> RuleId {
        RuleId::EventHandlers
    }

    fn description(&self) -> &'static str {
        "Calls passed event handlers with a synthetic event"
    }

    fn run(&self, ctx: &RuleContext<'_>) -> RuleResult {
        let probes = EventProbes::fresh();
        let tree = ctx.mount(probes.props())?;
        let Some(root) = inspect::find_first(&tree) else {
            return Ok(Vec::new());
        };
        let disabled = root.is_disabled();
        let exemption = ctx.options().disabled_exemption;

        let mut violations = Vec::new();
        for (handler, probe) in probes.iter() {
            let event = mount::event_name(handler);
            if let Err(err) = tree.simulate(&event) {
                violations.push(
                    Violation::new(RuleId::EventHandlers, "break", ctx.message("should not break."))
                        .with_prop(handler)
                        .with_detail(err.to_string()),
                );
            }

            match probe.first_call() {
                None if disabled && exemption.applies_to(&event) => {
                    tracing::debug!("{}: {} exempt on disabled root", ctx.name(), handler);
                }
                None => violations.push(
                    Violation::new(
                        RuleId::EventHandlers,
                        "accept",
                        ctx.message(format_args!("should accept event handler (`{handler}`).")),
                    )
                    .with_prop(handler),
                ),
                Some(args) if matches!(args.first(), Some(Arg::Event(_))) => {}
                Some(_) => violations.push(
                    Violation::new(
                        RuleId::EventHandlers,
                        "pass",
                        ctx.message(format_args!(
                            "should pass a synthetic event object to `{handler}`."
                        )),
                    )
                    .with_prop(handler),
                ),
            }
        }
        Ok(violations)
    }
}
