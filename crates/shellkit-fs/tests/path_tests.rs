use assert_fs::prelude::*;
use predicates::prelude::*;
use shellkit_fs::{Error, ensure_dir, expand_home};
use std::path::PathBuf;

#[test]
fn ensure_dir_creates_nested_directories() {
    let temp = assert_fs::TempDir::new().unwrap();
    let nested = temp.child("a/b/c");

    let created = ensure_dir(nested.path()).unwrap();

    nested.assert(predicate::path::is_dir());
    assert!(created.is_absolute());
}

#[test]
fn ensure_dir_is_idempotent() {
    let temp = assert_fs::TempDir::new().unwrap();
    let dir = temp.child("logs");
    dir.create_dir_all().unwrap();
    dir.child("keep.txt").write_str("keep").unwrap();

    ensure_dir(dir.path()).unwrap();
    ensure_dir(dir.path()).unwrap();

    dir.child("keep.txt").assert("keep");
}

#[test]
fn ensure_dir_rejects_existing_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("occupied");
    file.touch().unwrap();

    let result = ensure_dir(file.path());

    assert!(matches!(result, Err(Error::NotADirectory { .. })));
    file.assert(predicate::path::is_file());
}

#[test]
fn expand_home_leaves_plain_paths_alone() {
    assert_eq!(expand_home("/etc/profile").unwrap(), PathBuf::from("/etc/profile"));
    assert_eq!(expand_home("relative/rc").unwrap(), PathBuf::from("relative/rc"));
    assert_eq!(expand_home("~other/rc").unwrap(), PathBuf::from("~other/rc"));
}

#[test]
fn expand_home_replaces_leading_tilde() {
    let Some(home) = dirs::home_dir() else {
        eprintln!("Skipping test: no home directory");
        return;
    };

    assert_eq!(expand_home("~").unwrap(), home);
    assert_eq!(expand_home("~/.bashrc").unwrap(), home.join(".bashrc"));
}
