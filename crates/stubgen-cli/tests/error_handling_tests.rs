//! Error-path tests: exit codes, messages, and suggestions on stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stubgen() -> Command {
    Command::cargo_bin("stubgen").unwrap()
}

#[test]
fn invalid_name_exits_2_with_suggestion() {
    let temp = TempDir::new().unwrap();

    stubgen()
        .current_dir(temp.path())
        .args(["make:repository", "../Evil"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid entity name"))
        .stderr(predicate::str::contains("PascalCase"));
}

#[test]
fn empty_name_is_rejected_by_validation() {
    let temp = TempDir::new().unwrap();

    stubgen()
        .current_dir(temp.path())
        .args(["make:service", ""])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn name_with_path_separator_never_touches_filesystem() {
    let temp = TempDir::new().unwrap();
    stubgen().current_dir(temp.path()).arg("init").assert().success();

    stubgen()
        .current_dir(temp.path())
        .args(["make:service", "a/b"])
        .assert()
        .failure()
        .code(2);

    // Nothing beyond what init seeded.
    let services: Vec<_> = std::fs::read_dir(temp.path().join("app/Services"))
        .unwrap()
        .collect();
    assert!(services.is_empty());
}

#[test]
fn missing_stub_exits_3_and_suggests_init() {
    let temp = TempDir::new().unwrap();

    stubgen()
        .current_dir(temp.path())
        .args(["make:service", "Payment"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Failed to read stub"))
        .stderr(predicate::str::contains("stubgen init"));
}

#[test]
fn missing_interface_stub_aborts_whole_repository_command() {
    let temp = TempDir::new().unwrap();
    stubgen().current_dir(temp.path()).arg("init").assert().success();
    std::fs::remove_file(temp.path().join("app/Stubs/Interface.stub")).unwrap();

    stubgen()
        .current_dir(temp.path())
        .args(["make:repository", "User"])
        .assert()
        .failure()
        .code(3);

    // Repository stub was present, but no artifact may be written when any
    // required stub is missing.
    assert!(!temp.path().join("app/Repositories/UserRepository.php").exists());
}

#[test]
fn missing_destination_directory_exits_1() {
    let temp = TempDir::new().unwrap();
    stubgen().current_dir(temp.path()).arg("init").assert().success();
    std::fs::remove_dir(temp.path().join("app/Services")).unwrap();

    stubgen()
        .current_dir(temp.path())
        .args(["make:service", "Payment"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to write"));
}

#[test]
fn explicit_missing_config_file_exits_4() {
    let temp = TempDir::new().unwrap();

    stubgen()
        .current_dir(temp.path())
        .args(["--config", "does-not-exist.toml", "make:service", "Payment"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn quiet_still_reports_errors_on_stderr() {
    let temp = TempDir::new().unwrap();

    stubgen()
        .current_dir(temp.path())
        .args(["-q", "make:service", "Payment"])
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn unknown_subcommand_exits_2() {
    // Real parse failures stay on stderr with exit 2, unlike --help/--version.
    stubgen()
        .arg("make:controller")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty().not());
}
