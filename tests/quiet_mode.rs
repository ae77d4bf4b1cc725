use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let mut f = fs::File::create(path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
}

#[test]
fn quiet_suppresses_progress_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("seed.json");
    write_file(&input, r#"[{"id":"a"},{"id":"b","parentId":"a"}]"#);

    // Without quiet: expect the progress lines
    let mut cmd_no_quiet = Command::cargo_bin("tree-grower").unwrap();
    cmd_no_quiet.arg(&input).arg(dir.path().join("loud.json")).arg("-n").arg("2");
    cmd_no_quiet
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting 2 duplication iterations..."))
        .stdout(predicate::str::contains("Writing final tree with 6 nodes"));

    // With quiet: nothing on stdout, output still written
    let quiet_out = dir.path().join("quiet.json");
    let mut cmd_quiet = Command::cargo_bin("tree-grower").unwrap();
    cmd_quiet.arg("-q").arg(&input).arg(&quiet_out).arg("-n").arg("2");
    cmd_quiet.assert().success().stdout(predicate::str::is_empty());
    assert!(quiet_out.exists());
}
