use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("ext_mover"))
}

#[test]
fn moves_files_and_prints_one_line_each() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").write_str("A").unwrap();
    temp.child("sub/B.TXT").write_str("B").unwrap();
    temp.child("c.md").write_str("C").unwrap();

    bin()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved: ").count(2))
        .stdout(predicate::str::contains("a.txt"));

    temp.child("organized/a.txt").assert("A");
    temp.child("organized/B.TXT").assert("B");
    temp.child("c.md").assert("C");
}

#[test]
fn second_run_is_a_no_op() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").write_str("A").unwrap();

    bin().current_dir(temp.path()).assert().success();
    bin()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved:").not());
    temp.child("organized/a.txt").assert("A");
}

#[test]
fn no_recursive_flag_keeps_nested_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("src/a.txt").write_str("A").unwrap();
    temp.child("src/sub/b.txt").write_str("B").unwrap();

    bin()
        .args(["--source", "src", "--dest", "out", "--no-recursive"])
        .current_dir(temp.path())
        .assert()
        .success();

    temp.child("out/a.txt").assert("A");
    temp.child("src/sub/b.txt").assert("B");
    temp.child("out/b.txt").assert(predicate::path::missing());
}

#[test]
fn dry_run_prints_plan_only() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").write_str("A").unwrap();

    bin()
        .arg("--dry-run")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would move:"));

    temp.child("a.txt").assert("A");
    temp.child("organized").assert(predicate::path::missing());
}

#[test]
fn missing_source_exits_non_zero() {
    let temp = assert_fs::TempDir::new().unwrap();
    bin()
        .args(["--source", "nope"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn destination_that_is_a_file_exits_non_zero() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").write_str("A").unwrap();
    temp.child("organized").write_str("file").unwrap();

    bin()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
    temp.child("a.txt").assert("A");
}
