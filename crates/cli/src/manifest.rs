// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Component manifests.
//!
//! A manifest is a TOML file declaring components by how they treat their
//! props:
//!
//! ```toml
//! [[component]]
//! name = "Button"
//! tag = "button"
//! class_name = "btn"
//! class_name_merge = "append"
//! style = { padding = 10 }
//! ```
//!
//! Declarations from several files are collected into a [`ManifestSet`],
//! which resolves `wraps` references by name and builds [`Component`]s.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Deserialize;

use crate::catalog;
use crate::component::Component;
use crate::error::{ManifestError, RenderError};
use crate::node::{Handler, Node, PropValue, Props, Style, StyleValue};
use crate::runner::Entry;

/// Top level of a manifest file.
#[derive(Debug, Default, Deserialize)]
pub struct ManifestFile {
    #[serde(default)]
    pub component: Vec<ComponentSpec>,
}

/// Declarative description of one component.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentSpec {
    pub name: String,

    /// Root markup element.
    #[serde(default)]
    pub tag: Option<String>,

    /// Name of another declared component to render instead of a tag.
    #[serde(default)]
    pub wraps: Option<String>,

    /// Forward incoming props to the root.
    #[serde(default = "ComponentSpec::default_spread")]
    pub spread: bool,

    /// Incoming props that are never forwarded.
    #[serde(default)]
    pub omit: Vec<String>,

    /// Props whose absence makes rendering fail.
    #[serde(default)]
    pub requires: Vec<String>,

    /// Internal attributes; forwarded props win.
    #[serde(default)]
    pub attrs: BTreeMap<String, Literal>,

    #[serde(default)]
    pub class_name: Option<String>,

    #[serde(default)]
    pub class_name_merge: ClassNameMerge,

    #[serde(default)]
    pub style: BTreeMap<String, StyleLiteral>,

    #[serde(default)]
    pub style_merge: StyleMergePolicy,

    #[serde(default)]
    pub children: ChildrenPolicy,

    /// Extra empty elements rendered after the children.
    #[serde(default)]
    pub extra: Vec<String>,

    #[serde(default)]
    pub handler_args: HandlerArgs,

    #[serde(default)]
    pub render: RenderKind,
}

/// Attribute literal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Number(f64),
    Str(String),
}

/// Style literal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StyleLiteral {
    Number(f64),
    Str(String),
}

/// How the internal className combines with a passed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassNameMerge {
    /// `"<internal> <passed>"`.
    #[default]
    Append,
    /// The passed className replaces the internal one.
    Replace,
    /// The internal className always wins.
    Keep,
}

/// How the internal style combines with a passed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleMergePolicy {
    /// Internal style first, passed properties override it.
    #[default]
    Under,
    /// Passed style first, internal properties override it.
    Over,
    /// A passed style object replaces the internal one.
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildrenPolicy {
    #[default]
    Forward,
    Drop,
}

/// What forwarded handlers are called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerArgs {
    /// The original event.
    #[default]
    Event,
    /// Nothing.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderKind {
    #[default]
    Element,
    Null,
}

impl ComponentSpec {
    fn default_spread() -> bool {
        true
    }

    fn validate(&self) -> Result<(), ManifestError> {
        if self.tag.is_some() == self.wraps.is_some() {
            return Err(ManifestError::Root { name: self.name.clone() });
        }
        if !self.extra.is_empty() && self.tag.is_none() {
            return Err(ManifestError::ExtraWithoutTag { name: self.name.clone() });
        }
        Ok(())
    }

    /// Render with `props`. `inner` is the resolved `wraps` target.
    pub fn render(&self, props: &Props, inner: Option<&Component>) -> Result<Node, RenderError> {
        if let Some(missing) = self.requires.iter().find(|name| !props.contains_key(name)) {
            return Err(RenderError::msg(format!("missing required prop `{missing}`")));
        }
        if self.render == RenderKind::Null {
            return Ok(Node::Null);
        }

        let forwarded = self.forwarded(props);
        let mut out = Props::new();
        for (name, value) in &self.attrs {
            out.insert(name.as_str(), value.to_prop());
        }
        if let Some(class_name) = &self.class_name {
            out.insert("className", class_name.as_str());
        }
        let style = self.internal_style();
        if !style.is_empty() {
            out.insert("style", style.clone());
        }
        out.spread(&forwarded);

        if let Some(internal) = &self.class_name {
            match (self.class_name_merge, forwarded.class_name()) {
                (ClassNameMerge::Append, Some(passed)) => {
                    out.insert("className", format!("{internal} {passed}"));
                }
                (ClassNameMerge::Keep, _) => {
                    out.insert("className", internal.as_str());
                }
                (ClassNameMerge::Append | ClassNameMerge::Replace, _) => {}
            }
        }

        if !style.is_empty() {
            let passed = forwarded.style().cloned().unwrap_or_default();
            let merged = match self.style_merge {
                StyleMergePolicy::Under => Some(layer(&style, &passed)),
                StyleMergePolicy::Over => Some(layer(&passed, &style)),
                StyleMergePolicy::Replace => None,
            };
            if let Some(merged) = merged {
                out.insert("style", merged);
            }
        }

        if !self.spread
            && self.children == ChildrenPolicy::Forward
            && let Some(children) = props.get("children")
        {
            out.insert("children", children.clone());
        }

        let node = match (&self.tag, inner) {
            (Some(tag), _) => Node::element(tag.as_str(), out),
            (None, Some(inner)) => Node::component(inner, out),
            (None, None) => return Err(RenderError::msg("no root to render")),
        };
        Ok(self
            .extra
            .iter()
            .fold(node, |node, tag| node.with_child(Node::element(tag.as_str(), Props::new()))))
    }

    /// Incoming props that reach the root through the spread.
    fn forwarded(&self, props: &Props) -> Props {
        if !self.spread {
            return Props::new();
        }
        let mut forwarded = props.without(|name| {
            self.omit.iter().any(|o| o == name)
                || (name == "children" && self.children == ChildrenPolicy::Drop)
        });
        if self.handler_args == HandlerArgs::None {
            let handlers: Vec<(String, Handler)> = forwarded
                .iter()
                .filter(|(name, _)| catalog::is_handler_name(name))
                .filter_map(|(name, value)| match value {
                    PropValue::Handler(h) => Some((name.to_string(), h.clone())),
                    _ => None,
                })
                .collect();
            for (name, handler) in handlers {
                forwarded.insert(name, Handler::new(move |_| handler.call(&[])));
            }
        }
        forwarded
    }

    fn internal_style(&self) -> Style {
        self.style.iter().map(|(name, value)| (name.as_str(), value.to_style())).collect()
    }
}

impl Literal {
    fn to_prop(&self) -> PropValue {
        match self {
            Literal::Bool(b) => PropValue::Bool(*b),
            Literal::Number(n) => PropValue::Number(*n),
            Literal::Str(s) => PropValue::Str(s.clone()),
        }
    }
}

impl StyleLiteral {
    fn to_style(&self) -> StyleValue {
        match self {
            StyleLiteral::Number(n) => StyleValue::Number(*n),
            StyleLiteral::Str(s) => StyleValue::Str(s.clone()),
        }
    }
}

/// `{ ...base, ...top }`
fn layer(base: &Style, top: &Style) -> Style {
    let mut merged = base.clone();
    merged.spread(top);
    merged
}

/// Component declarations gathered from one or more manifests.
#[derive(Debug, Default)]
pub struct ManifestSet {
    specs: Vec<(String, ComponentSpec)>,
}

impl ManifestSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every component of `file`, labelled with its source.
    pub fn add(&mut self, label: &str, file: ManifestFile) {
        for spec in file.component {
            self.specs.push((label.to_string(), spec));
        }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Validate declarations and build components in declaration order.
    pub fn build(self) -> Result<Vec<Entry>, ManifestError> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        for (i, (_, spec)) in self.specs.iter().enumerate() {
            spec.validate()?;
            if index.insert(spec.name.as_str(), i).is_some() {
                return Err(ManifestError::Duplicate { name: spec.name.clone() });
            }
        }

        let mut built: HashMap<String, Component> = HashMap::new();
        let mut entries = Vec::with_capacity(self.specs.len());
        for (label, spec) in &self.specs {
            let component = self.resolve(&spec.name, &index, &mut built, &mut Vec::new())?;
            entries.push(Entry { label: label.clone(), component });
        }
        Ok(entries)
    }

    fn resolve(
        &self,
        name: &str,
        index: &HashMap<&str, usize>,
        built: &mut HashMap<String, Component>,
        stack: &mut Vec<String>,
    ) -> Result<Component, ManifestError> {
        if let Some(component) = built.get(name) {
            return Ok(component.clone());
        }
        if stack.iter().any(|n| n == name) {
            stack.push(name.to_string());
            return Err(ManifestError::Cycle(stack.join(" -> ")));
        }
        let Some(&i) = index.get(name) else {
            let referrer = stack.last().cloned().unwrap_or_default();
            return Err(ManifestError::Unknown { name: referrer, wraps: name.to_string() });
        };
        let spec = &self.specs[i].1;

        stack.push(name.to_string());
        let inner = match &spec.wraps {
            Some(wraps) => Some(self.resolve(wraps, index, built, stack)?),
            None => None,
        };
        stack.pop();

        let spec = Arc::new(spec.clone());
        let component =
            Component::new(spec.name.clone(), move |props| spec.render(props, inner.as_ref()));
        built.insert(name.to_string(), component.clone());
        Ok(component)
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
