// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Fixture components covering each convention, plus filesystem helpers.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::component::Component;
use crate::error::RenderError;
use crate::node::{Arg, Handler, Node, PropValue, Props, Style};

/// `props => <div {...props}/>`
pub fn identity(tag: &str) -> Component {
    let tag = tag.to_string();
    Component::new("Identity", move |props| Ok(Node::element(tag.as_str(), props.clone())))
}

/// `props => <div {...props}><span/></div>`
pub fn with_extra_span() -> Component {
    Component::new("Extra", |props| {
        Ok(Node::element("div", props.clone()).with_child(Node::element("span", Props::new())))
    })
}

/// Forwards everything except children.
pub fn drops_children() -> Component {
    Component::new("NoChildren", |props| {
        Ok(Node::element("div", props.without(|name| name == "children")))
    })
}

pub fn renders_null() -> Component {
    Component::new("Nothing", |_| Ok(Node::Null))
}

/// `props => <Inner {...props}/>`
pub fn wrapping(inner: &Component) -> Component {
    let inner = inner.clone();
    Component::new("Outer", move |props| Ok(Node::component(&inner, props.clone())))
}

/// `props => <div className="foo" {...props}/>`
pub fn class_name_override() -> Component {
    Component::new("Override", |props| {
        let mut out = Props::new().with("className", "foo");
        out.spread(props);
        Ok(Node::element("div", out))
    })
}

/// Appends a passed className to `foo`.
pub fn class_name_append() -> Component {
    Component::new("Append", |props| {
        let mut out = props.clone();
        let class_name = match props.class_name() {
            Some(passed) => format!("foo {passed}"),
            None => "foo".to_string(),
        };
        out.insert("className", class_name);
        Ok(Node::element("div", out))
    })
}

/// `({ className, ...props }) => <div {...props}/>`
pub fn class_name_dropped() -> Component {
    Component::new("Dropped", |props| {
        Ok(Node::element("div", props.without(|name| name == "className")))
    })
}

fn padded() -> Style {
    Style::new().with("padding", 10)
}

/// `({ style, ...props }) => <div style={{ padding: 10, ...style }} {...props}/>`
pub fn style_under() -> Component {
    Component::new("StyleUnder", |props| {
        let mut style = padded();
        if let Some(passed) = props.style() {
            style.spread(passed);
        }
        let mut out = props.without(|name| name == "style");
        out.insert("style", style);
        Ok(Node::element("div", out))
    })
}

/// `({ style, ...props }) => <div style={{ ...style, padding: 10 }} {...props}/>`
pub fn style_over() -> Component {
    Component::new("StyleOver", |props| {
        let mut style = props.style().cloned().unwrap_or_default();
        style.spread(&padded());
        let mut out = props.without(|name| name == "style");
        out.insert("style", style);
        Ok(Node::element("div", out))
    })
}

/// `props => <div style={{ padding: 10 }} {...props}/>`
pub fn style_replaced() -> Component {
    Component::new("StyleReplaced", |props| {
        let mut out = Props::new().with("style", padded());
        out.spread(props);
        Ok(Node::element("div", out))
    })
}

/// `({ style, ...props }) => <div style={{ padding: 10 }} {...props}/>`
pub fn style_internal_only() -> Component {
    Component::new("StyleInternal", |props| {
        let mut out = props.without(|name| name == "style");
        out.insert("style", padded());
        Ok(Node::element("div", out))
    })
}

/// Forwards everything except `onClick`.
pub fn drops_on_click() -> Component {
    Component::new("NoClick", |props| {
        Ok(Node::element("div", props.without(|name| name == "onClick")))
    })
}

/// `({ onClick, ...props }) => <div onClick={() => onClick()} {...props}/>`
pub fn on_click_without_event() -> Component {
    Component::new("NoEvent", |props| {
        let mut out = props.without(|name| name == "onClick");
        if let Some(handler) = props.handler("onClick").cloned() {
            out.insert("onClick", Handler::new(move |_| handler.call(&[])));
        }
        Ok(Node::element("div", out))
    })
}

/// `({ onClick, ...props }) => <div onClick={() => onClick(42)} {...props}/>`
pub fn on_click_with_value() -> Component {
    Component::new("Value", |props| {
        let mut out = props.without(|name| name == "onClick");
        if let Some(handler) = props.handler("onClick").cloned() {
            out.insert(
                "onClick",
                Handler::new(move |_| handler.call(&[Arg::Value(PropValue::Number(42.0))])),
            );
        }
        Ok(Node::element("div", out))
    })
}

/// `props => <button {...props} disabled/>`
pub fn disabled_button() -> Component {
    Component::new("Disabled", |props| {
        let mut out = props.clone();
        out.insert("disabled", true);
        Ok(Node::element("button", out))
    })
}

/// `props => <div id={props.getId()}/>`
pub fn broken() -> Component {
    Component::new("Broken", |props| match props.get("getId") {
        Some(_) => Ok(Node::element("div", props.clone())),
        None => Err(RenderError::msg("props.getId is not a function")),
    })
}

pub fn panicking() -> Component {
    Component::new("Panics", |_| panic!("render exploded"))
}

/// Forwards every prop, but its click handler throws.
pub fn throwing_on_click() -> Component {
    Component::new("Throws", |props| {
        let mut out = props.clone();
        out.insert("onClick", Handler::new(|_| panic!("click exploded")));
        Ok(Node::element("div", out))
    })
}

/// A component that satisfies every convention.
pub fn well_behaved() -> Component {
    Component::new("Good", |props| {
        let mut out = props.clone();
        let class_name = match props.class_name() {
            Some(passed) => format!("good {passed}"),
            None => "good".to_string(),
        };
        out.insert("className", class_name);
        let mut style = padded();
        if let Some(passed) = props.style() {
            style.spread(passed);
        }
        out.insert("style", style);
        Ok(Node::element("div", out))
    })
}

/// Creates a temp directory with a minimal propcheck.toml.
pub fn temp_project() -> TempDir {
    temp_project_with_config("version = 1\n")
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("propcheck.toml"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}
