//! Tests for error reporting, suggestions, and exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SHA: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

fn brewrel(dir: &TempDir) -> Command {
    let config = dir.path().join("brewrel.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }
    let mut cmd = Command::cargo_bin("brewrel").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .arg("-c")
        .arg(config);
    cmd
}

fn without_license() -> Vec<&'static str> {
    vec![
        "render",
        "--name",
        "foo",
        "--desc",
        "Foo tool",
        "--homepage",
        "https://example.com/foo",
        "--url",
        "https://example.com/foo-1.0.tar.gz",
        "--sha256",
        SHA,
        "--pkg-version",
        "1.0",
    ]
}

#[test]
fn test_missing_field_names_placeholder() {
    let dir = TempDir::new().unwrap();
    let formula = dir.path().join("foo.rb");

    brewrel(&dir)
        .args(without_license())
        .arg("-o")
        .arg(&formula)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("{{LICENSE}}"))
        .stderr(predicate::str::contains("--set LICENSE=VALUE"));

    assert!(!formula.exists());
}

#[test]
fn test_missing_field_keeps_previous_output() {
    let dir = TempDir::new().unwrap();
    let formula = dir.path().join("foo.rb");
    fs::write(&formula, "previous\n").unwrap();

    brewrel(&dir)
        .args(without_license())
        .arg("-o")
        .arg(&formula)
        .assert()
        .code(2);

    assert_eq!(fs::read_to_string(&formula).unwrap(), "previous\n");
}

#[test]
fn test_missing_field_prints_nothing_to_stdout() {
    let dir = TempDir::new().unwrap();

    brewrel(&dir)
        .args(without_license())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_parent_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let formula = dir.path().join("no/such/dir/foo.rb");

    brewrel(&dir)
        .args(without_license())
        .args(["--license", "MIT", "-o"])
        .arg(&formula)
        .assert()
        .code(1);

    assert!(!formula.exists());
}

#[test]
fn test_missing_template_is_not_found() {
    let dir = TempDir::new().unwrap();

    brewrel(&dir)
        .args(["render", "--template", "absent.rb"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("absent.rb"));
}

#[test]
fn test_non_utf8_template_is_user_error() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("latin1.rb");
    fs::write(&template, b"class {{CLASSNAME}} < Formula\n  desc \"caf\xe9\"\nend\n").unwrap();

    brewrel(&dir)
        .args(["render", "--template"])
        .arg(&template)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("latin1.rb"))
        .stderr(predicate::str::contains("UTF-8"));
}

#[test]
fn test_placeholder_in_wrapper_option_is_rejected() {
    let dir = TempDir::new().unwrap();
    let formula = dir.path().join("foo.rb");

    brewrel(&dir)
        .args(without_license())
        .args(["--license", "MIT", "--wrapper", "{{NAME}}", "-o"])
        .arg(&formula)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("wrapper executable name"));

    assert!(!formula.exists());
}

#[test]
fn test_strict_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let formula = dir.path().join("foo.rb");

    brewrel(&dir)
        .args(without_license())
        .args(["--license", "MIT", "--sha256", "abc", "--strict", "-o"])
        .arg(&formula)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed validation"))
        .stderr(predicate::str::contains("content checksum"));

    assert!(!formula.exists());
}

#[test]
fn test_unreadable_fields_file() {
    let dir = TempDir::new().unwrap();
    let fields = dir.path().join("release.toml");
    fs::write(&fields, "VERSION = 1.5\n").unwrap();

    brewrel(&dir)
        .args(["render", "--fields"])
        .arg(&fields)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("release.toml"));
}

#[test]
fn test_builtin_options_with_custom_template() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("minimal.rb");
    fs::write(&template, "class {{CLASSNAME}} < Formula\nend\n").unwrap();

    brewrel(&dir)
        .args(["render", "--lib-env-var", "X", "--template"])
        .arg(&template)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--template"));
}

#[test]
fn test_invalid_assignment_is_usage_error() {
    let dir = TempDir::new().unwrap();

    brewrel(&dir)
        .args(["render", "--set", "NOEQUALS"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_style_is_usage_error() {
    let dir = TempDir::new().unwrap();

    brewrel(&dir)
        .args(["render", "--style", "mixed"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_config_file_is_config_error() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("brewrel")
        .unwrap()
        .current_dir(dir.path())
        .args(["-c", "absent.toml", "fields"])
        .assert()
        .code(4);
}

#[test]
fn test_bad_config_value_is_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("brewrel.toml"), "[defaults]\nstyle = \"mixed\"\n").unwrap();

    brewrel(&dir).arg("fields").assert().code(4);
}

#[test]
fn test_unknown_config_key() {
    let dir = TempDir::new().unwrap();

    brewrel(&dir)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_verbose_shows_cause_chain() {
    let dir = TempDir::new().unwrap();

    brewrel(&dir)
        .args(["-v", "render", "--template", "absent.rb"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--verbose").not());
}
