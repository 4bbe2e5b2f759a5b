// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for component manifests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::engine::check;
use crate::rules::RuleId;

fn build(toml_src: &str) -> Result<Vec<Entry>, ManifestError> {
    let file: ManifestFile = toml::from_str(toml_src).unwrap();
    let mut set = ManifestSet::new();
    set.add("test.toml", file);
    set.build()
}

fn component(toml_src: &str) -> Component {
    build(toml_src).unwrap().pop().unwrap().component
}

fn kinds(toml_src: &str, rule: RuleId) -> Vec<&'static str> {
    check(&component(toml_src)).get(rule).iter().map(|v| v.kind).collect()
}

// =============================================================================
// PARSING AND VALIDATION
// =============================================================================

#[test]
fn parses_defaults() {
    let file: ManifestFile = toml::from_str("[[component]]\nname = \"Box\"\ntag = \"div\"\n").unwrap();
    let spec = &file.component[0];
    assert!(spec.spread);
    assert_eq!(spec.class_name_merge, ClassNameMerge::Append);
    assert_eq!(spec.style_merge, StyleMergePolicy::Under);
    assert_eq!(spec.children, ChildrenPolicy::Forward);
    assert_eq!(spec.handler_args, HandlerArgs::Event);
    assert_eq!(spec.render, RenderKind::Element);
}

#[test]
fn rejects_unknown_fields() {
    let result: Result<ManifestFile, _> =
        toml::from_str("[[component]]\nname = \"Box\"\ntag = \"div\"\ncolour = \"red\"\n");
    assert!(result.is_err());
}

#[test]
fn requires_exactly_one_root() {
    let neither = build("[[component]]\nname = \"Box\"\n").unwrap_err();
    assert_eq!(neither, ManifestError::Root { name: "Box".to_string() });

    let both = build(
        "[[component]]\nname = \"A\"\ntag = \"div\"\n\n[[component]]\nname = \"B\"\ntag = \"div\"\nwraps = \"A\"\n",
    )
    .unwrap_err();
    assert_eq!(both, ManifestError::Root { name: "B".to_string() });
}

#[test]
fn rejects_extra_on_wrapper() {
    let err = build(
        "[[component]]\nname = \"A\"\ntag = \"div\"\n\n[[component]]\nname = \"B\"\nwraps = \"A\"\nextra = [\"span\"]\n",
    )
    .unwrap_err();
    assert_eq!(err, ManifestError::ExtraWithoutTag { name: "B".to_string() });
}

#[test]
fn rejects_duplicates() {
    let err = build("[[component]]\nname = \"A\"\ntag = \"div\"\n\n[[component]]\nname = \"A\"\ntag = \"p\"\n")
        .unwrap_err();
    assert_eq!(err, ManifestError::Duplicate { name: "A".to_string() });
}

#[test]
fn rejects_unknown_wraps_target() {
    let err = build("[[component]]\nname = \"A\"\nwraps = \"Missing\"\n").unwrap_err();
    assert_eq!(err, ManifestError::Unknown { name: "A".to_string(), wraps: "Missing".to_string() });
}

#[test]
fn rejects_wrap_cycles() {
    let err = build("[[component]]\nname = \"A\"\nwraps = \"B\"\n\n[[component]]\nname = \"B\"\nwraps = \"A\"\n")
        .unwrap_err();
    assert_eq!(err, ManifestError::Cycle("A -> B -> A".to_string()));
}

#[test]
fn wraps_may_refer_forward_across_files() {
    let mut set = ManifestSet::new();
    set.add("a.toml", toml::from_str("[[component]]\nname = \"Outer\"\nwraps = \"Inner\"\n").unwrap());
    set.add("b.toml", toml::from_str("[[component]]\nname = \"Inner\"\ntag = \"div\"\n").unwrap());
    assert_eq!(set.len(), 2);

    let entries = set.build().unwrap();
    let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["a.toml", "b.toml"]);
    assert!(check(&entries[0].component).is_clean());
}

// =============================================================================
// RENDERING
// =============================================================================

#[test]
fn plain_spread_component_is_clean() {
    assert!(check(&component("[[component]]\nname = \"Box\"\ntag = \"div\"\n")).is_clean());
}

#[test]
fn default_merges_are_clean() {
    let src = r#"
[[component]]
name = "Button"
tag = "button"
class_name = "btn"
style = { padding = 10 }
attrs = { role = "button" }
"#;
    let report = check(&component(src));
    assert!(report.get(RuleId::ClassName).is_empty());
    assert!(report.get(RuleId::Style).is_empty());
    assert!(report.get(RuleId::HtmlProps).is_empty());
}

#[test]
fn class_name_replace_is_an_override() {
    let src = "[[component]]\nname = \"A\"\ntag = \"div\"\nclass_name = \"foo\"\nclass_name_merge = \"replace\"\n";
    assert_eq!(kinds(src, RuleId::ClassName), ["override"]);
}

#[test]
fn class_name_keep_drops_passed_class_name() {
    let src = "[[component]]\nname = \"A\"\ntag = \"div\"\nclass_name = \"foo\"\nclass_name_merge = \"keep\"\n";
    assert_eq!(kinds(src, RuleId::ClassName), ["render"]);
}

#[test]
fn style_over_rejects_passed_property() {
    let src = "[[component]]\nname = \"A\"\ntag = \"div\"\nstyle = { padding = 10 }\nstyle_merge = \"over\"\n";
    assert_eq!(kinds(src, RuleId::Style), ["accept"]);
}

#[test]
fn style_replace_drops_internal_style() {
    let src = "[[component]]\nname = \"A\"\ntag = \"div\"\nstyle = { padding = 10 }\nstyle_merge = \"replace\"\n";
    assert_eq!(kinds(src, RuleId::Style), ["append"]);
}

#[test]
fn children_drop_fails_children_rule() {
    let src = "[[component]]\nname = \"A\"\ntag = \"div\"\nchildren = \"drop\"\n";
    assert_eq!(kinds(src, RuleId::Children), ["render"]);
}

#[test]
fn no_spread_still_forwards_children() {
    let src = "[[component]]\nname = \"A\"\ntag = \"div\"\nspread = false\n";
    let report = check(&component(src));
    assert!(report.get(RuleId::Children).is_empty());
    assert!(!report.get(RuleId::HtmlProps).is_empty());
    assert!(!report.get(RuleId::EventHandlers).is_empty());
}

#[test]
fn omitted_prop_is_reported() {
    let src = "[[component]]\nname = \"A\"\ntag = \"div\"\nomit = [\"title\", \"onClick\"]\n";
    let report = check(&component(src));
    let props: Vec<&str> = report.violations().filter_map(|v| v.prop.as_deref()).collect();
    assert_eq!(props, ["title", "onClick"]);
}

#[test]
fn handler_args_none_fails_pass_check() {
    let src = "[[component]]\nname = \"A\"\ntag = \"div\"\nhandler_args = \"none\"\n";
    let violations = kinds(src, RuleId::EventHandlers);
    assert!(!violations.is_empty());
    assert!(violations.iter().all(|kind| *kind == "pass"));
}

#[test]
fn extra_elements_fail_single_root() {
    let src = "[[component]]\nname = \"A\"\ntag = \"div\"\nextra = [\"span\"]\n";
    assert_eq!(kinds(src, RuleId::SingleRoot), ["multiple"]);
}

#[test]
fn required_prop_breaks() {
    let src = "[[component]]\nname = \"A\"\ntag = \"div\"\nrequires = [\"getId\"]\n";
    let report = check(&component(src));
    assert_eq!(report.violation_count(), 1);
    let detail = report.get(RuleId::NoBreak)[0].detail.clone().unwrap();
    assert_eq!(detail, "A: missing required prop `getId`");
}

#[test]
fn null_render_is_clean() {
    let src = "[[component]]\nname = \"A\"\ntag = \"div\"\nrender = \"null\"\n";
    assert!(check(&component(src)).is_clean());
}

#[test]
fn disabled_attr_is_exempt_from_click() {
    let src = "[[component]]\nname = \"A\"\ntag = \"button\"\nattrs = { disabled = true }\n";
    assert!(check(&component(src)).is_clean());
}

#[test]
fn wrapper_inherits_inner_behavior() {
    let src = r#"
[[component]]
name = "Inner"
tag = "div"
class_name = "inner"
class_name_merge = "replace"

[[component]]
name = "Outer"
wraps = "Inner"
"#;
    assert_eq!(kinds(src, RuleId::ClassName), ["override"]);
}
