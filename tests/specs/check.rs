//! Behavioral specs for `propcheck check`.

use crate::prelude::*;

// =============================================================================
// Exit codes
// =============================================================================

/// > Exit code 0 when every component passes
#[test]
fn clean_fixture_passes() {
    check_in(&fixture("clean"))
        .assert()
        .success()
        .stdout(predicates::str::contains("✔ Box layout.toml"))
        .stdout(predicates::str::contains("✔ PrimaryButton forms/button.toml"))
        .stdout(predicates::str::ends_with("6 components\n0 errors\n"));
}

/// > Exit code 1 when any component violates a rule
#[test]
fn violations_fixture_fails() {
    check_in(&fixture("violations"))
        .assert()
        .code(1)
        .stdout(predicates::str::contains("✘ Labelled components.toml"))
        .stdout(predicates::str::contains("  `Labelled` should render only one element."))
        .stdout(predicates::str::contains("  `Badge` should append className, not override it."))
        .stdout(predicates::str::contains("  `Identicon` should not break."))
        .stdout(predicates::str::contains(
            "  `Padded` should accept inline style (`padding`) via props.",
        ))
        .stdout(predicates::str::ends_with("4 components\n4 errors\n"));
}

/// > Exit code 2 when a manifest cannot be parsed
#[test]
fn invalid_manifest_is_config_error() {
    check_in(&fixture("invalid"))
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to parse"))
        .stderr(predicates::str::contains("broken.toml"));
}

/// > Exit code 2 when a path does not exist
#[test]
fn missing_path_is_config_error() {
    let project = Project::with_config("version = 1\n");
    check_in(project.path())
        .arg("nowhere")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("path does not exist"));
}

/// > Manifests that declare the same component twice are rejected
#[test]
fn duplicate_component_is_config_error() {
    let project = Project::empty();
    project.file("a.toml", "[[component]]\nname = \"Box\"\ntag = \"div\"\n");
    project.file("b.toml", "[[component]]\nname = \"Box\"\ntag = \"p\"\n");

    check_in(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("component `Box` is declared twice"));
}

// =============================================================================
// Modes
// =============================================================================

/// > Fail-fast reports only the first violation of each component
#[test]
fn fail_fast_reports_first_violation() {
    let project = Project::empty();
    project.file(
        "messy.toml",
        "[[component]]\nname = \"Messy\"\ntag = \"div\"\nextra = [\"span\"]\nchildren = \"drop\"\n",
    );

    check_in(project.path())
        .arg("--fail-fast")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("`Messy` should render only one element."))
        .stdout(predicates::str::contains("should render its children").not())
        .stdout(predicates::str::ends_with("1 component\n1 error\n"));
}

/// > Collect-all reports every violation
#[test]
fn collect_all_reports_every_violation() {
    let project = Project::empty();
    project.file(
        "messy.toml",
        "[[component]]\nname = \"Messy\"\ntag = \"div\"\nextra = [\"span\"]\nchildren = \"drop\"\n",
    );

    check_in(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("`Messy` should render only one element."))
        .stdout(predicates::str::contains("`Messy` should render its children."))
        .stdout(predicates::str::ends_with("2 errors\n"));
}

/// > A broken component lists the rules that did not run
#[test]
fn broken_component_lists_skipped_rules() {
    let project = Project::empty();
    project.file("id.toml", "[[component]]\nname = \"Identicon\"\ntag = \"div\"\nrequires = [\"getId\"]\n");

    check_in(project.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("    Identicon: missing required prop `getId`"))
        .stdout(predicates::str::contains("  skipped: single-root,"));
}

/// > Disabled roots are excused from click events unless configured otherwise
#[test]
fn disabled_exemption_flag() {
    let project = Project::empty();
    project.file("b.toml", "[[component]]\nname = \"Off\"\ntag = \"button\"\nattrs = { disabled = true }\n");

    check_in(project.path()).assert().success();
    check_in(project.path())
        .args(["--disabled-exemption", "off"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("`Off` should accept event handler (`onClick`)."));
}

// =============================================================================
// Paths
// =============================================================================

/// > Explicit manifest paths are checked even when excluded by patterns
#[test]
fn explicit_file_is_checked() {
    check_in(&fixture("violations"))
        .arg("components.toml")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("4 components"));
}

/// > A file named both directly and through its directory is checked once
#[test]
fn overlapping_paths_check_each_manifest_once() {
    check_in(&fixture("violations"))
        .args(["components.toml", "."])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("4 components"));
}

/// > An empty directory checks nothing and passes
#[test]
fn empty_directory_passes() {
    let project = Project::empty();
    check_in(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("0 components\n0 errors"));
}
