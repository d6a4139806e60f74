//! CLI behavior tests for the folio binary.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::{temp_portfolio, SAMPLE_PORTFOLIO};

fn folio() -> Command {
    Command::cargo_bin("folio").expect("binary builds")
}

#[test]
fn check_valid_portfolio_prints_summary() {
    let (_dir, path) = temp_portfolio(SAMPLE_PORTFOLIO);

    folio()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Example"))
        .stdout(predicate::str::contains("projects: 3"))
        .stdout(predicate::str::contains("analysis: 2"))
        .stdout(predicate::str::contains("portfolio document is valid"));
}

#[test]
fn check_reports_disabled_animation_for_missing_phrases() {
    let (_dir, path) = temp_portfolio(r#"{"name": "A", "title": "B"}"#);

    folio()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("typing animation disabled"));
}

#[test]
fn check_rejects_invalid_json() {
    let (_dir, path) = temp_portfolio("{not json");

    folio()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid portfolio document"));
}

#[test]
fn check_rejects_unknown_fields() {
    let (_dir, path) = temp_portfolio(r#"{"name": "A", "title": "B", "phrase": []}"#);

    folio().arg("check").arg(&path).assert().failure();
}

#[test]
fn check_fails_for_missing_file() {
    folio()
        .arg("check")
        .arg("/nonexistent/portfolio.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/portfolio.json"));
}

#[test]
fn view_refuses_to_start_without_a_tty() {
    let (_dir, path) = temp_portfolio(SAMPLE_PORTFOLIO);

    // assert_cmd pipes stdout, so the tty guard must trip
    folio()
        .arg("view")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a terminal"));
}

#[test]
fn completions_generate_for_bash() {
    folio()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn version_includes_package_version() {
    folio()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_fails_with_usage() {
    folio()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
