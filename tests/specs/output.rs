//! Behavioral specs for output formats and limits.

use crate::prelude::*;

/// A component that forwards nothing, so it fails many checks.
const BARE: &str = "[[component]]\nname = \"Bare\"\ntag = \"div\"\nspread = false\nchildren = \"drop\"\n";

/// > Text output prints at most 10 violations per component by default
#[test]
fn default_limit_truncates() {
    let project = Project::empty();
    project.file("bare.toml", BARE);

    let output = check_in(project.path()).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout.matches("`Bare` should").count(), 10);
    assert!(stdout.contains("more errors."));
}

/// > `--limit` and `--no-limit` change the number printed
#[test]
fn limit_flags() {
    let project = Project::empty();
    project.file("bare.toml", BARE);

    let output = check_in(project.path()).args(["--limit", "3"]).output().unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout).matches("`Bare` should").count(), 3);

    let output = check_in(project.path()).arg("--no-limit").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.matches("`Bare` should").count() > 10);
    assert!(!stdout.contains("more errors."));
}

/// > `--limit 0` prints every violation, like `limit = 0` in config
#[test]
fn limit_zero_prints_all() {
    let project = Project::empty();
    project.file("bare.toml", BARE);

    let output = check_in(project.path()).args(["--limit", "0"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.matches("`Bare` should").count() > 10);
    assert!(!stdout.contains("more errors."));
}

/// > JSON output includes every violation and a summary
#[test]
fn json_output_document() {
    let json = json_output(check_in(&fixture("violations")).args(["-o", "json"]));

    assert_eq!(json["mode"], "collect-all");
    assert_eq!(json["passed"], false);
    assert_eq!(json["summary"]["components"], 4);
    assert_eq!(json["summary"]["violations"], 4);
    let components = json["components"].as_array().unwrap();
    assert_eq!(components[1]["name"], "Badge");
    assert_eq!(components[1]["rules"]["class-name"][0]["kind"], "override");
}

/// > JSON ignores the text limit
#[test]
fn json_output_is_not_limited() {
    let project = Project::empty();
    project.file("bare.toml", BARE);

    let json = json_output(check_in(project.path()).args(["-o", "json", "--limit", "1"]));
    assert!(json["summary"]["violations"].as_u64().unwrap() > 10);
}

/// > JSON in fail-fast mode carries one violation per failing component
#[test]
fn json_fail_fast() {
    let json =
        json_output(check_in(&fixture("violations")).args(["-o", "json", "--fail-fast"]));
    assert_eq!(json["mode"], "fail-fast");
    assert_eq!(json["components"][2]["outcome"], "failed");
    assert_eq!(json["components"][2]["violation"]["rule"], "no-break");
}

/// > --color always emits escape codes
#[test]
fn color_always() {
    let project = Project::empty();
    project.file("bare.toml", BARE);

    propcheck_cmd()
        .args(["check", "--color", "always"])
        .current_dir(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("\u{1b}["));
}
