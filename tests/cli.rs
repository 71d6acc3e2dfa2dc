// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("git-cc").unwrap();
    cmd.current_dir(dir)
        .env_remove("DEBUG")
        .env_remove("RUST_LOG")
        .env_remove("GIT_CC_USE_DEFAULTS");
    cmd
}

#[test]
fn version_flag_prints_build_info() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(format!("version: {},", env!("CARGO_PKG_VERSION"))))
        .stdout(contains("built at"));
}

#[test]
fn version_flag_works_outside_a_repository() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path()).arg("-v").assert().success();
}

#[test]
fn help_lists_flags() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--dry-run"))
        .stdout(contains("--fresh"));
}

#[test]
fn not_a_repository_exits_1() {
    let dir = TempDir::new().unwrap();
    cmd(dir.path())
        .assert()
        .code(1)
        .stderr(contains("not a git repository"));
}

#[test]
fn nothing_staged_exits_2() {
    let dir = TempDir::new().unwrap();
    git2::Repository::init(dir.path()).unwrap();

    cmd(dir.path())
        .assert()
        .code(2)
        .stderr(contains("nothing added to commit"));

    assert!(!dir.path().join(".git-cc.swp").exists());
}

#[test]
fn untracked_only_suggests_git_add() {
    let dir = TempDir::new().unwrap();
    git2::Repository::init(dir.path()).unwrap();
    fs::write(dir.path().join("README.md"), "# hello\n").unwrap();

    cmd(dir.path())
        .assert()
        .code(2)
        .stderr(contains("use \"git add\" to track"));
}

#[test]
fn precondition_checked_from_subdirectory() {
    let dir = TempDir::new().unwrap();
    git2::Repository::init(dir.path()).unwrap();
    let nested = dir.path().join("src");
    fs::create_dir_all(&nested).unwrap();

    cmd(&nested).assert().code(2);
}
