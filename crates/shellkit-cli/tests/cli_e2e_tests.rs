//! CLI end-to-end tests that invoke the compiled `shellkit` binary.

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use shellkit_test_utils::git::real_git_repo_with_commit;

fn shellkit() -> Command {
    let mut cmd = Command::cargo_bin("shellkit").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("SHELLKIT_MANIFEST");
    cmd
}

#[test]
fn test_help_exits_zero() {
    shellkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("update-section"));
}

#[test]
fn test_update_section_inserts_and_logs_target() {
    let temp = assert_fs::TempDir::new().unwrap();
    let rc = temp.child("rc");
    rc.write_str("initial content\n").unwrap();

    shellkit()
        .args(["update-section"])
        .arg(rc.path())
        .args(["# START", "# END", "new line 1", "new line 2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Updating file"));

    rc.assert("initial content\n# START\nnew line 1\nnew line 2\n# END\n");
}

#[test]
fn test_update_section_remove() {
    let temp = assert_fs::TempDir::new().unwrap();
    let rc = temp.child("rc");
    rc.write_str("a\n# START\nb\n# END\nc\n").unwrap();

    shellkit()
        .args(["update-section", "--remove"])
        .arg(rc.path())
        .args(["# START", "# END"])
        .assert()
        .success();

    rc.assert("a\nc\n");
}

#[test]
fn test_update_section_insufficient_arguments_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    let rc = temp.child("rc");
    rc.write_str("a\n").unwrap();

    shellkit()
        .args(["update-section"])
        .arg(rc.path())
        .arg("# START")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Insufficient arguments"));

    rc.assert("a\n");
}

#[test]
fn test_update_section_failure_logs_and_reports_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    let target = temp.child("conf.d");
    target.create_dir_all().unwrap();

    shellkit()
        .args(["update-section"])
        .arg(target.path())
        .args(["# START", "# END", "x"])
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("Section update failed")
                .and(predicate::str::contains("error:"))
                .and(predicate::str::contains("conf.d")),
        );

    target.assert(predicate::path::is_dir());
}

#[test]
fn test_update_section_missing_file_succeeds() {
    let temp = assert_fs::TempDir::new().unwrap();
    let rc = temp.child("absent");

    shellkit()
        .args(["update-section"])
        .arg(rc.path())
        .args(["# START", "# END", "x"])
        .assert()
        .success();

    rc.assert(predicate::path::missing());
}

#[test]
fn test_update_section_dry_run_prints_diff() {
    let temp = assert_fs::TempDir::new().unwrap();
    let rc = temp.child("rc");
    rc.write_str("a\n# START\nold\n# END\n").unwrap();

    shellkit()
        .args(["update-section", "--dry-run"])
        .arg(rc.path())
        .args(["# START", "# END", "new"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-old").and(predicate::str::contains("+new")));

    rc.assert("a\n# START\nold\n# END\n");
}

#[test]
fn test_apply_manifest_from_env() {
    let temp = assert_fs::TempDir::new().unwrap();
    let rc = temp.child("app.rc");
    rc.write_str("a\n").unwrap();
    let manifest = temp.child("sections.toml");
    manifest
        .write_str("[[section]]\nfile = \"app.rc\"\nstart = \"# S\"\nend = \"# E\"\nlines = [\"x\"]\n")
        .unwrap();

    shellkit()
        .arg("apply")
        .env("SHELLKIT_MANIFEST", manifest.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("inserted"));

    rc.assert("a\n# S\nx\n# E\n");
}

#[test]
fn test_ensure_dir_creates_directories() {
    let temp = assert_fs::TempDir::new().unwrap();
    let nested = temp.child("one/two");

    shellkit()
        .arg("ensure-dir")
        .arg(nested.path())
        .assert()
        .success();

    nested.assert(predicate::path::is_dir());
}

#[test]
fn test_current_branch_prints_name() {
    let temp = assert_fs::TempDir::new().unwrap();
    real_git_repo_with_commit(temp.path());

    shellkit()
        .arg("current-branch")
        .arg(temp.path())
        .assert()
        .success()
        .stdout("main\n");
}
