use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli_cmd() -> Command {
    Command::cargo_bin("seedbloom").expect("binary")
}

#[test]
fn add_test_reports_present_items() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("items.txt");
    fs::write(&path, "a,b,c\n").expect("write");
    let path = path.to_str().unwrap();

    cli_cmd()
        .args(["add-test", "--add", path, "--test", path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item=a Result=present"))
        .stdout(predicate::str::contains("Item=b Result=present"))
        .stdout(predicate::str::contains("Item=c Result=present"));
}

#[test]
fn evaluate_prints_score() {
    let tmp = tempdir().expect("tempdir");
    let inputs = tmp.path().join("inputs.txt");
    let queries = tmp.path().join("queries.txt");
    fs::write(&inputs, "x,y,z\n").expect("write");
    fs::write(&queries, "x,y\n").expect("write");

    cli_cmd()
        .args([
            "evaluate",
            "--inputs",
            inputs.to_str().unwrap(),
            "--queries",
            queries.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success! Item=x, Bloom says: true"))
        .stdout(predicate::str::contains("Score: 2/2"));
}

#[test]
fn demo_has_no_false_negatives() {
    cli_cmd()
        .args(["demo", "--bits", "100", "--hashes", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a is in bloom filter as wished"))
        .stdout(predicate::str::contains("FALSE NEGATIVE").not());
}

#[test]
fn zero_bits_is_rejected() {
    cli_cmd()
        .args(["demo", "--bits", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid parameter `bits`"));
}

#[test]
fn missing_input_file_fails() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("missing.txt");
    let missing = missing.to_str().unwrap();

    cli_cmd()
        .args(["add-test", "--add", missing, "--test", missing])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading"));
}
