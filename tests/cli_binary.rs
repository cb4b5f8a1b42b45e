//! End-to-end tests driving the real `cpdd` binary via `assert_cmd`.

use assert_cmd::prelude::*;
use std::fs;
use std::os::unix::fs::MetadataExt;
use std::process::Command;
use tempfile::tempdir;

fn cpdd() -> Command {
    Command::cargo_bin("cpdd").expect("failed to locate cpdd binary")
}

#[test]
fn help_lists_usage_and_exits_successfully() {
    let output = cpdd().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("cpdd"));
}

#[test]
fn too_few_operands_fails_with_usage_error() {
    let output = cpdd().arg("only-one").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn plain_copy_duplicates_file_contents() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("a.txt");
    let dest = dir.path().join("b.txt");
    fs::write(&src, b"payload").unwrap();

    let status = cpdd()
        .args([src.to_str().unwrap(), dest.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&dest).unwrap(), b"payload");
}

#[test]
fn reference_tree_with_hard_link_dedups_identical_content() {
    let dir = tempdir().unwrap();
    let refdir = dir.path().join("ref");
    fs::create_dir(&refdir).unwrap();
    let ref_file = refdir.join("existing.bin");
    fs::write(&ref_file, b"duplicate content").unwrap();

    let src = dir.path().join("new.bin");
    fs::write(&src, b"duplicate content").unwrap();
    let dest = dir.path().join("out.bin");

    let status = cpdd()
        .args([
            "-r",
            refdir.to_str().unwrap(),
            src.to_str().unwrap(),
            dest.to_str().unwrap(),
        ])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(
        fs::metadata(&dest).unwrap().ino(),
        fs::metadata(&ref_file).unwrap().ino(),
        "destination should be hard-linked to the reference match"
    );
}

#[test]
fn recursive_copy_mirrors_directory_structure() {
    let dir = tempdir().unwrap();
    let src_root = dir.path().join("src");
    fs::create_dir_all(src_root.join("nested")).unwrap();
    fs::write(src_root.join("top.txt"), b"top").unwrap();
    fs::write(src_root.join("nested/inner.txt"), b"inner").unwrap();
    let dest_root = dir.path().join("dest");

    let status = cpdd()
        .args([
            "-R",
            src_root.to_str().unwrap(),
            dest_root.to_str().unwrap(),
        ])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(
        fs::read(dest_root.join("src/top.txt")).unwrap(),
        b"top"
    );
    assert_eq!(
        fs::read(dest_root.join("src/nested/inner.txt")).unwrap(),
        b"inner"
    );
}

#[test]
fn no_clobber_leaves_an_existing_destination_untouched() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("a.txt");
    let dest = dir.path().join("b.txt");
    fs::write(&src, b"new").unwrap();
    fs::write(&dest, b"old").unwrap();

    let status = cpdd()
        .args(["-n", src.to_str().unwrap(), dest.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&dest).unwrap(), b"old");
}

#[test]
fn stats_flag_prints_a_report() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("a.txt");
    let dest = dir.path().join("b.txt");
    fs::write(&src, b"hello").unwrap();

    let output = cpdd()
        .args(["--stats", src.to_str().unwrap(), dest.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Statistics:"));
}
