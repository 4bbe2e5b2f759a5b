// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Synthetic rendering backend.
//!
//! Mounting expands a component's [`Node`] output into a [`RenderTree`],
//! invoking nested components on the way. Every component invocation and
//! every event handler call is guarded, so panics in user code surface as
//! [`RenderError`]s instead of unwinding into the rule engine.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::component::Component;
use crate::error::RenderError;
use crate::inspect;
use crate::node::{Arg, Node, PropValue, Props, Style, SyntheticEvent};

/// Maximum component nesting before mounting gives up.
pub const MAX_DEPTH: usize = 64;

/// Form controls that carry a disabled state.
const DISABLEABLE_TAGS: &[&str] = &["button", "input", "select", "textarea"];

/// Events a disabled form control never receives.
const MOUSE_EVENTS: &[&str] = &[
    "click",
    "contextMenu",
    "doubleClick",
    "mouseDown",
    "mouseEnter",
    "mouseLeave",
    "mouseMove",
    "mouseOut",
    "mouseOver",
    "mouseUp",
];

/// A mounted component.
#[derive(Debug)]
pub struct RenderTree {
    root: TreeNode,
}

/// A node of a mounted tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Primitive(PrimitiveNode),
    Composite(CompositeNode),
    Text(String),
    Fragment(Vec<TreeNode>),
    Empty,
}

/// A markup element with its resolved props.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveNode {
    pub tag: String,
    pub props: Props,
    pub children: Vec<TreeNode>,
}

/// A component together with what it rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeNode {
    pub name: String,
    pub props: Props,
    pub rendered: Box<TreeNode>,
}

/// Result of simulating an event on a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The handler was called.
    Delivered,
    /// The target is a disabled control and the event was dropped.
    Suppressed,
    /// The target has no handler for the event.
    NoHandler,
    /// The tree has no markup element to dispatch on.
    NoTarget,
}

/// Mount `component` with `props`.
pub fn mount(component: &Component, props: Props) -> Result<RenderTree, RenderError> {
    let root = expand(Node::component(component, props), 0)?;
    Ok(RenderTree { root })
}

impl RenderTree {
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Dispatch `event` (e.g. `click`) on the first markup element.
    pub fn simulate(&self, event: &str) -> Result<Dispatch, RenderError> {
        let Some(target) = inspect::find_first(self) else {
            return Ok(Dispatch::NoTarget);
        };
        if target.is_disabled() && is_mouse_event(event) {
            return Ok(Dispatch::Suppressed);
        }
        let Some(handler) = target.props.handler(&handler_name(event)) else {
            return Ok(Dispatch::NoHandler);
        };

        let args = [Arg::Event(SyntheticEvent::new(event, target.tag.as_str()))];
        panic::catch_unwind(AssertUnwindSafe(|| handler.call(&args))).map_err(|payload| {
            RenderError::Handler { event: event.to_string(), message: panic_message(&*payload) }
        })?;
        Ok(Dispatch::Delivered)
    }
}

impl PrimitiveNode {
    pub fn prop(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    pub fn class_name(&self) -> Option<&str> {
        self.props.class_name()
    }

    pub fn style(&self) -> Option<&Style> {
        self.props.style()
    }

    /// Whether this is a form control with a truthy `disabled` prop.
    pub fn is_disabled(&self) -> bool {
        DISABLEABLE_TAGS.contains(&self.tag.as_str())
            && self.props.get("disabled").is_some_and(PropValue::is_truthy)
    }
}

/// Whether a disabled control swallows `event`.
pub fn is_mouse_event(event: &str) -> bool {
    MOUSE_EVENTS.contains(&event)
}

/// `click` -> `onClick`.
pub fn handler_name(event: &str) -> String {
    let mut chars = event.chars();
    match chars.next() {
        Some(first) => format!("on{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => "on".to_string(),
    }
}

/// `onClick` -> `click`. Names without the `on` prefix are returned as is.
pub fn event_name(handler: &str) -> String {
    let Some(rest) = handler.strip_prefix("on") else {
        return handler.to_string();
    };
    let mut chars = rest.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_ascii_lowercase(), chars.as_str()),
        None => String::new(),
    }
}

fn expand(node: Node, depth: usize) -> Result<TreeNode, RenderError> {
    if depth > MAX_DEPTH {
        return Err(RenderError::TooDeep(MAX_DEPTH));
    }
    let tree = match node {
        Node::Null => TreeNode::Empty,
        Node::Text(text) => TreeNode::Text(text),
        Node::Element { tag, props, children } => TreeNode::Primitive(PrimitiveNode {
            tag,
            props,
            children: expand_all(children, depth)?,
        }),
        Node::Component { component, props } => {
            let output = invoke(&component, &props)?;
            TreeNode::Composite(CompositeNode {
                name: component.name().to_string(),
                props,
                rendered: Box::new(expand(output, depth + 1)?),
            })
        }
        Node::Fragment(nodes) => TreeNode::Fragment(expand_all(nodes, depth)?),
    };
    Ok(tree)
}

fn expand_all(nodes: Vec<Node>, depth: usize) -> Result<Vec<TreeNode>, RenderError> {
    nodes.into_iter().map(|node| expand(node, depth)).collect()
}

fn invoke(component: &Component, props: &Props) -> Result<Node, RenderError> {
    match panic::catch_unwind(AssertUnwindSafe(|| component.render(props))) {
        Ok(Ok(node)) => Ok(node),
        Ok(Err(RenderError::Component { component: owner, message })) if owner.is_empty() => {
            Err(RenderError::Component { component: component.name().to_string(), message })
        }
        Ok(Err(err)) => Err(err),
        Err(payload) => Err(RenderError::Panicked {
            component: component.name().to_string(),
            message: panic_message(&*payload),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "mount_tests.rs"]
mod tests;
