//! Integration tests for CLI infrastructure

mod common;

use assert_cmd::assert::OutputAssertExt;
use common::docfill;
use docfill_testkit::{install_default_templates, temp_dir_in_workspace, write_file};
use predicates::prelude::*;

#[test]
fn test_cli_version_flag() {
    let temp = temp_dir_in_workspace();

    docfill(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("docfill"));
}

#[test]
fn test_cli_help_lists_commands() {
    let temp = temp_dir_in_workspace();

    docfill(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("fill"))
        .stdout(predicate::str::contains("claim"))
        .stdout(predicate::str::contains("vars"));
}

#[test]
fn test_vars_lists_placeholders() {
    let temp = temp_dir_in_workspace();
    write_file(
        temp.path(),
        "template.txt",
        "{{ a }} and {{b}} and again {{ a }}",
    );

    docfill(temp.path())
        .arg("vars")
        .assert()
        .success()
        .stdout("a\nb\n");
}

#[test]
fn test_vars_json() {
    let temp = temp_dir_in_workspace();
    write_file(temp.path(), "letter.md", "{{ name }} {{ date }}");

    let output = docfill(temp.path())
        .args(["vars", "--template", "letter.md", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["variables"], serde_json::json!(["date", "name"]));
    assert!(json["template"].as_str().unwrap().ends_with("letter.md"));
}

#[test]
fn test_vars_missing_template() {
    let temp = temp_dir_in_workspace();

    docfill(temp.path())
        .arg("vars")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TEMPLATE_NOT_FOUND"))
        .stderr(predicate::str::contains("template.txt"));
}

#[test]
fn test_config_from_working_directory() {
    let temp = temp_dir_in_workspace();
    write_file(
        temp.path(),
        "docfill.toml",
        "[templates]\ngeneric = \"forms/notice.txt\"\n",
    );
    write_file(temp.path(), "forms/notice.txt", "{{ tenant }}");

    docfill(temp.path())
        .arg("vars")
        .assert()
        .success()
        .stdout("tenant\n");
}

#[test]
fn test_explicit_config_must_exist() {
    let temp = temp_dir_in_workspace();

    docfill(temp.path())
        .args(["--config", "missing.toml", "vars"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_NOT_FOUND"));
}

#[test]
fn test_config_from_environment() {
    let temp = temp_dir_in_workspace();
    write_file(
        temp.path(),
        "alt.toml",
        "[templates]\ngeneric = \"alt.txt\"\n",
    );
    write_file(temp.path(), "alt.txt", "{{ from_env }}");

    docfill(temp.path())
        .env("DOCFILL_CONFIG", "alt.toml")
        .arg("vars")
        .assert()
        .success()
        .stdout("from_env\n");
}

#[test]
fn test_invalid_config_reports_parse_error() {
    let temp = temp_dir_in_workspace();
    write_file(temp.path(), "docfill.toml", "[format]\ngeneric_date = \"%Q\"\n");

    docfill(temp.path())
        .arg("vars")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_PARSE_ERROR"));
}

#[test]
fn test_time_of_day_date_format_is_rejected() {
    let temp = temp_dir_in_workspace();
    install_default_templates(temp.path());
    write_file(
        temp.path(),
        "docfill.toml",
        "[format]\njudgment_date = \"%d-%m-%Y %H:%M\"\n",
    );

    docfill(temp.path())
        .args(["claim", "--case-number", "9", "--case-year", "2026"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("CONFIG_PARSE_ERROR"))
        .stderr(predicate::str::contains("format.judgment_date"))
        .stderr(predicate::str::contains("panicked").not());

    assert!(!temp.path().join("judgment_mact_9_2026.txt").exists());
}
