// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Element descriptions returned by components.
//!
//! A component renders to a [`Node`]: a markup element, another component,
//! text, a fragment, or nothing. Props travel as an insertion-ordered
//! [`PropMap`] whose `insert` has object-spread semantics: a repeated key
//! keeps its original position and takes the new value.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::component::Component;

/// Insertion-ordered map from attribute name to value.
#[derive(Clone, PartialEq)]
pub struct PropMap<V> {
    entries: Vec<(String, V)>,
}

/// Props passed to components and carried by elements.
pub type Props = PropMap<PropValue>;

/// Inline style object.
pub type Style = PropMap<StyleValue>;

impl<V> Default for PropMap<V> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<V> PropMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`PropMap::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<V>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, replacing an existing key in place.
    ///
    /// Returns the previous value when the key was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<V>) -> Option<V> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> PropMap<V> {
    /// Copy every entry of `other` over this map, like `{ ...self, ...other }`.
    pub fn spread(&mut self, other: &PropMap<V>) {
        for (key, value) in &other.entries {
            self.insert(key.clone(), value.clone());
        }
    }

    /// A copy without the entries whose key matches `skip`.
    pub fn without(&self, skip: impl Fn(&str) -> bool) -> Self {
        self.entries
            .iter()
            .filter(|(k, _)| !skip(k))
            .cloned()
            .collect()
    }
}

impl<V, K: Into<String>> FromIterator<(K, V)> for PropMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V> IntoIterator for PropMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: fmt::Debug> fmt::Debug for PropMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter().map(|(k, v)| (k, v))).finish()
    }
}

impl Props {
    pub fn class_name(&self) -> Option<&str> {
        match self.get("className") {
            Some(PropValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn style(&self) -> Option<&Style> {
        match self.get("style") {
            Some(PropValue::Style(s)) => Some(s),
            _ => None,
        }
    }

    pub fn handler(&self, name: &str) -> Option<&Handler> {
        match self.get(name) {
            Some(PropValue::Handler(h)) => Some(h),
            _ => None,
        }
    }
}

/// A single prop value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Str(String),
    Number(f64),
    Bool(bool),
    Style(Style),
    Handler(Handler),
    Node(Node),
}

impl PropValue {
    /// Truthiness as a markup attribute: empty strings, zero, `false` and
    /// null nodes count as unset.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Str(s) => !s.is_empty(),
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Bool(b) => *b,
            PropValue::Node(Node::Null) => false,
            PropValue::Style(_) | PropValue::Handler(_) | PropValue::Node(_) => true,
        }
    }

    /// Convert a `children` prop into a child node.
    fn into_child(self) -> Option<Node> {
        match self {
            PropValue::Str(s) => Some(Node::Text(s)),
            PropValue::Number(n) => Some(Node::Text(StyleValue::Number(n).to_string())),
            PropValue::Node(node) => Some(node),
            PropValue::Bool(_) | PropValue::Style(_) | PropValue::Handler(_) => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(f64::from(value))
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<Style> for PropValue {
    fn from(value: Style) -> Self {
        PropValue::Style(value)
    }
}

impl From<Handler> for PropValue {
    fn from(value: Handler) -> Self {
        PropValue::Handler(value)
    }
}

impl From<Node> for PropValue {
    fn from(value: Node) -> Self {
        PropValue::Node(value)
    }
}

/// A single inline style value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Str(String),
    Number(f64),
}

impl StyleValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            StyleValue::Str(s) => !s.is_empty(),
            StyleValue::Number(n) => *n != 0.0 && !n.is_nan(),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Str(s) => f.write_str(s),
            StyleValue::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{}", *n as i64),
            StyleValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

/// Event handler callable. Equality is identity.
#[derive(Clone)]
pub struct Handler(Arc<dyn Fn(&[Arg]) + Send + Sync>);

impl Handler {
    pub fn new(f: impl Fn(&[Arg]) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, args: &[Arg]) {
        (self.0)(args)
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// An argument passed to an event handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Event(SyntheticEvent),
    Value(PropValue),
}

/// Event object the backend passes to handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntheticEvent {
    /// Event name, e.g. `click` or `mouseDown`.
    pub event_type: String,
    /// Tag of the element the event was dispatched on.
    pub target: String,
}

impl SyntheticEvent {
    pub fn new(event_type: impl Into<String>, target: impl Into<String>) -> Self {
        Self { event_type: event_type.into(), target: target.into() }
    }
}

/// What a component renders.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Text(String),
    Element { tag: String, props: Props, children: Vec<Node> },
    Component { component: Component, props: Props },
    Fragment(Vec<Node>),
}

impl Node {
    /// A markup element. A `children` prop moves into the child list.
    pub fn element(tag: impl Into<String>, mut props: Props) -> Node {
        let children = match props.remove("children").and_then(PropValue::into_child) {
            Some(Node::Fragment(nodes)) => nodes,
            Some(child) => vec![child],
            None => Vec::new(),
        };
        Node::Element { tag: tag.into(), props, children }
    }

    pub fn component(component: &Component, props: Props) -> Node {
        Node::Component { component: component.clone(), props }
    }

    pub fn text(text: impl Into<String>) -> Node {
        Node::Text(text.into())
    }

    /// Append a child to an element. Other nodes are returned unchanged.
    pub fn with_child(mut self, child: Node) -> Node {
        if let Node::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
