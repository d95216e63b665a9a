//! Integration tests for the coqgraph binary.
//!
//! These tests drive the compiled binary against temporary projects,
//! using captured dependency listings so neither Coq nor Graphviz needs
//! to be installed.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Test Fixtures
// =============================================================================

/// A temporary Coq project with a manifest and a captured coqdep listing.
struct TestProject {
    dir: TempDir,
}

impl TestProject {
    fn new(manifest: &str, listing: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::write(dir.path().join("_CoqProject"), manifest).unwrap();
        std::fs::write(dir.path().join("deps.out"), listing).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A command primed to run against this project via the captured
    /// listing.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("coqgraph").unwrap();
        cmd.arg("--cwd")
            .arg(self.path())
            .args(["--input", "deps.out", "--dot-only"]);
        cmd
    }
}

const MANIFEST: &str = "-Q theories Interval\n";

const LISTING: &str = "\
theories/Real/Taylor.vo: theories/Real/Taylor.v theories/Tactic.vo
theories/Tactic.vo: theories/Tactic.v
theories/Private/Impl.vo: theories/Private/Impl.v theories/Tactic.vo
";

// =============================================================================
// Tests
// =============================================================================

#[test]
fn help_describes_the_tool() {
    Command::cargo_bin("coqgraph")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dependency graphs"))
        .stdout(predicate::str::contains("KEEP"));
}

#[test]
fn dot_only_emits_rewritten_stripped_graph() {
    let project = TestProject::new(MANIFEST, LISTING);

    project
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("digraph module_deps {"))
        .stdout(predicate::str::contains("label = \"Prefix: Interval\""))
        .stdout(predicate::str::contains("\"Real.Taylor\" -> \"Tactic\""))
        .stdout(predicate::str::contains("\"Private.Impl\" -> \"Tactic\""));
}

#[test]
fn keep_and_drop_patterns_filter_modules() {
    let project = TestProject::new(MANIFEST, LISTING);

    project
        .cmd()
        .args(["Interval", "Private"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Real.Taylor\" -> \"Tactic\""))
        .stdout(predicate::str::contains("Private").not());
}

#[test]
fn output_is_identical_across_runs() {
    let project = TestProject::new(MANIFEST, LISTING);

    let first = project.cmd().assert().success();
    let second = project.cmd().assert().success();
    assert_eq!(
        first.get_output().stdout,
        second.get_output().stdout
    );
}

#[test]
fn missing_manifest_is_a_clear_error() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("coqgraph")
        .unwrap()
        .arg("--cwd")
        .arg(dir.path())
        .arg("--dot-only")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot load project manifest"));
}

#[test]
fn invalid_filter_pattern_is_a_clear_error() {
    let project = TestProject::new(MANIFEST, LISTING);

    project
        .cmd()
        .arg("(")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid filter pattern"));
}

#[test]
fn overflow_report_lands_on_stderr_as_json() {
    // Fourteen disjoint namespaces plus the root prefix make fifteen
    // ranked prefixes against set312's twelve colours.
    let listing: String = (1..=14)
        .map(|i| format!("Ns{:02}/mod.vo: Ns{:02}/mod.v\n", i, i))
        .collect();
    let project = TestProject::new("", &listing);

    project
        .cmd()
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("missing_colours").not())
        .stderr(predicate::str::contains("\"missing_colours\": 3"))
        .stderr(predicate::str::contains("\"Ns14\""));
}

#[test]
fn overflow_report_is_a_warning_for_humans() {
    let listing: String = (1..=14)
        .map(|i| format!("Ns{:02}/mod.vo: Ns{:02}/mod.v\n", i, i))
        .collect();
    let project = TestProject::new("", &listing);

    project
        .cmd()
        .assert()
        .success()
        .stderr(predicate::str::contains("more colours are needed"))
        .stderr(predicate::str::contains("merged into their parent"));
}

#[test]
fn project_config_selects_the_scheme() {
    let project = TestProject::new(MANIFEST, LISTING);
    std::fs::write(
        project.path().join(".coqgraph.toml"),
        "scheme = \"pastel19\"\n",
    )
    .unwrap();

    project
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("colorscheme=pastel19"));
}

#[test]
fn unknown_configured_scheme_is_rejected() {
    let project = TestProject::new(MANIFEST, LISTING);
    std::fs::write(
        project.path().join(".coqgraph.toml"),
        "scheme = \"viridis\"\n",
    )
    .unwrap();

    project
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid scheme 'viridis'"));
}

#[test]
fn completions_generate_for_bash() {
    Command::cargo_bin("coqgraph")
        .unwrap()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("coqgraph"));
}
