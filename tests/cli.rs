//! End-to-end CLI tests

use std::io::{Cursor, Read};

use assert_cmd::Command;
use predicates::prelude::*;
use zip::ZipArchive;

fn write_input(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let input = dir.path().join("input.csv");
    std::fs::write(&input, "Item,Brand\nr1,Acme\nr2,acme \nr3,Zenith\n").unwrap();
    input
}

#[test]
fn splits_csv_into_delimited_archive() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("out.zip");

    Command::cargo_bin("brandsplit")
        .unwrap()
        .arg(&input)
        .args(["--mode", "delimited-archive"])
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("out.zip"));

    let bytes = std::fs::read(&output).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 2);

    let first = archive.by_index(0).unwrap().name().to_string();
    assert!(first.starts_with("acme_") && first.ends_with(".csv"));
    let second = archive.by_index(1).unwrap().name().to_string();
    assert!(second.starts_with("zenith_"));

    let mut content = String::new();
    archive
        .by_index(0)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert_eq!(
        content,
        "\"Item\",\"Brand\"\n\"r1\",\"Acme\"\n\"r2\",\"acme\""
    );
}

#[test]
fn resolves_key_column_by_header_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("out.zip");

    Command::cargo_bin("brandsplit")
        .unwrap()
        .arg(&input)
        .args(["--key-name", "Brand", "--mode", "workbook-archive"])
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let bytes = std::fs::read(&output).unwrap();
    let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 2);
}

#[test]
fn missing_input_fails_with_context() {
    Command::cargo_bin("brandsplit")
        .unwrap()
        .arg("no-such-file.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse input file"));
}

#[test]
fn unknown_mode_is_rejected_before_processing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir);

    Command::cargo_bin("brandsplit")
        .unwrap()
        .arg(&input)
        .args(["--mode", "bogus"])
        .assert()
        .failure();
    assert!(std::fs::read_dir(dir.path()).unwrap().count() == 1);
}
