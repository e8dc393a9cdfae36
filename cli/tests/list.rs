//! # fskit CLI List Integration Tests
//!
//! File: cli/tests/list.rs
//!
//! ## Overview
//!
//! Integration tests for `fskit list`, verifying directory/file filtering and
//! failure behavior through the real binary against temporary directories.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

/// `fskit list <dir>` prints subdirectory names and no file names.
#[test]
fn test_list_directories_only() {
    let dir = tempdir().expect("tempdir");
    std::fs::create_dir(dir.path().join("alpha")).expect("mkdir");
    std::fs::create_dir(dir.path().join("beta")).expect("mkdir");
    write_file(&dir.path().join("stray.txt"), "ABC");

    fskit_cmd()
        .args(["list", dir.path().to_str().expect("utf8 path")])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("alpha")
                .and(predicate::str::contains("beta"))
                .and(predicate::str::contains("stray.txt").not()),
        );
}

/// `fskit list <dir> --files` prints file names and no directory names.
#[test]
fn test_list_files_only() {
    let dir = tempdir().expect("tempdir");
    std::fs::create_dir(dir.path().join("sub")).expect("mkdir");
    write_file(&dir.path().join("a.txt"), "ABC");
    write_file(&dir.path().join("b.json"), "{}");

    fskit_cmd()
        .args(["list", dir.path().to_str().expect("utf8 path"), "--files"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("a.txt")
                .and(predicate::str::contains("b.json"))
                .and(predicate::str::contains("sub").not()),
        );
}

/// `--ext` filters case-insensitively and implies `--files`.
#[test]
fn test_list_files_with_extension_filter() {
    let dir = tempdir().expect("tempdir");
    write_file(&dir.path().join("a.txt"), "ABC");
    write_file(&dir.path().join("b.JSON"), "{}");

    fskit_cmd()
        .args(["list", dir.path().to_str().expect("utf8 path"), "--ext", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("b.JSON").and(predicate::str::contains("a.txt").not()),
        );
}

/// Listing a missing path fails with a non-zero exit and an error message.
#[test]
fn test_list_missing_path_fails() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("does-not-exist");

    fskit_cmd()
        .args(["list", missing.to_str().expect("utf8 path")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

/// An empty directory lists successfully with empty output.
#[test]
fn test_list_empty_directory() {
    let dir = tempdir().expect("tempdir");

    fskit_cmd()
        .args(["list", dir.path().to_str().expect("utf8 path"), "--files"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
