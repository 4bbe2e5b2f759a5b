//! Behavioral specs for propcheck.toml handling.

use crate::prelude::*;

const MESSY: &str =
    "[[component]]\nname = \"Messy\"\ntag = \"div\"\nextra = [\"span\"]\nchildren = \"drop\"\n";

/// > `mode = "fail-fast"` in config selects fail-fast
#[test]
fn config_mode_fail_fast() {
    let project = Project::with_config("version = 1\nmode = \"fail-fast\"\n");
    project.file("messy.toml", MESSY);

    check_in(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::ends_with("1 error\n"));
}

/// > `--collect-all` overrides a fail-fast config
#[test]
fn collect_all_flag_overrides_config_mode() {
    let project = Project::with_config("version = 1\nmode = \"fail-fast\"\n");
    project.file("messy.toml", MESSY);

    check_in(project.path())
        .arg("--collect-all")
        .assert()
        .code(1)
        .stdout(predicates::str::ends_with("2 errors\n"));
}

/// > Config exclude patterns skip manifests
#[test]
fn config_exclude_skips_manifests() {
    let project = Project::with_config("version = 1\nexclude = [\"legacy/**\"]\n");
    project.file("legacy/messy.toml", MESSY);

    check_in(project.path()).assert().success();
}

/// > Config is found in a parent directory
#[test]
fn config_discovered_from_subdirectory() {
    let project = Project::with_config("version = 1\nmode = \"fail-fast\"\n");
    project.file("ui/messy.toml", MESSY);

    check_in(&project.path().join("ui"))
        .assert()
        .code(1)
        .stdout(predicates::str::ends_with("1 error\n"));
}

/// > `-C` points at a specific config file
#[test]
fn explicit_config_path() {
    let project = Project::empty();
    project.file("ci/strict.toml", "version = 1\nmode = \"fail-fast\"\n");
    project.file("ui/messy.toml", MESSY);

    check_in(&project.path().join("ui"))
        .args(["-C", "../ci/strict.toml"])
        .assert()
        .code(1)
        .stdout(predicates::str::ends_with("1 error\n"));
}

/// > Unknown config keys warn but do not fail
#[test]
fn unknown_key_warns() {
    let project = Project::with_config("version = 1\ncolour = \"red\"\n");
    check_in(project.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("unknown config key `colour`"));
}

/// > Unsupported config version exits 2
#[test]
fn unsupported_version_is_config_error() {
    let project = Project::with_config("version = 9\n");
    check_in(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 9"));
}
