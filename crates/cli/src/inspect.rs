// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only queries over a mounted tree.

use crate::mount::{PrimitiveNode, RenderTree, TreeNode};

/// Elements that cannot have children.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "menuitem",
    "meta", "param", "source", "track", "wbr",
];

/// Every markup element in document order.
pub fn find_all(tree: &RenderTree) -> Vec<&PrimitiveNode> {
    let mut found = Vec::new();
    collect(tree.root(), &mut found);
    found
}

/// The first markup element, or `None` when the tree renders no markup.
pub fn find_first(tree: &RenderTree) -> Option<&PrimitiveNode> {
    first(tree.root())
}

/// Tag of the first markup element.
pub fn tag_of(tree: &RenderTree) -> Option<&str> {
    find_first(tree).map(|node| node.tag.as_str())
}

pub fn is_void_tag(name: &str) -> bool {
    VOID_TAGS.contains(&name)
}

/// Whether any text node in the tree equals `text`.
pub fn contains_text(tree: &RenderTree, text: &str) -> bool {
    has_text(tree.root(), text)
}

fn collect<'a>(node: &'a TreeNode, found: &mut Vec<&'a PrimitiveNode>) {
    match node {
        TreeNode::Primitive(element) => {
            found.push(element);
            for child in &element.children {
                collect(child, found);
            }
        }
        TreeNode::Composite(composite) => collect(&composite.rendered, found),
        TreeNode::Fragment(nodes) => {
            for child in nodes {
                collect(child, found);
            }
        }
        TreeNode::Text(_) | TreeNode::Empty => {}
    }
}

fn first(node: &TreeNode) -> Option<&PrimitiveNode> {
    match node {
        TreeNode::Primitive(element) => Some(element),
        TreeNode::Composite(composite) => first(&composite.rendered),
        TreeNode::Fragment(nodes) => nodes.iter().find_map(first),
        TreeNode::Text(_) | TreeNode::Empty => None,
    }
}

fn has_text(node: &TreeNode, text: &str) -> bool {
    match node {
        TreeNode::Text(t) => t == text,
        TreeNode::Primitive(element) => element.children.iter().any(|c| has_text(c, text)),
        TreeNode::Composite(composite) => has_text(&composite.rendered, text),
        TreeNode::Fragment(nodes) => nodes.iter().any(|c| has_text(c, text)),
        TreeNode::Empty => false,
    }
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
