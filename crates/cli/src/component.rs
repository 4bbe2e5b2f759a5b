// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The unit under test: a named, pure render function.

use std::fmt;
use std::sync::Arc;

use crate::error::RenderError;
use crate::node::{Node, Props};

/// Name used in messages when a component has no display name.
pub const FALLBACK_NAME: &str = "Component";

type RenderFn = dyn Fn(&Props) -> Result<Node, RenderError> + Send + Sync;

/// A renderable component. Cloning is cheap and equality is identity.
#[derive(Clone)]
pub struct Component {
    name: Arc<str>,
    render: Arc<RenderFn>,
}

impl Component {
    pub fn new(
        name: impl Into<String>,
        render: impl Fn(&Props) -> Result<Node, RenderError> + Send + Sync + 'static,
    ) -> Self {
        Self { name: Arc::from(name.into()), render: Arc::new(render) }
    }

    /// Display name, or [`FALLBACK_NAME`] when empty.
    pub fn name(&self) -> &str {
        if self.name.trim().is_empty() { FALLBACK_NAME } else { &self.name }
    }

    /// Invoke the render function. Panics are not caught here; the mount
    /// backend guards every invocation.
    pub fn render(&self, props: &Props) -> Result<Node, RenderError> {
        (self.render)(props)
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.render, &other.render)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component").field("name", &self.name()).finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "component_tests.rs"]
mod tests;
