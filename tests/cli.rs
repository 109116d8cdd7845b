use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn projctx() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("projctx"))
}

#[test]
fn markdown_snapshot_to_stdout() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.ts"), "hello");
    write_file(&temp.path().join("sub/b.ts"), "world");
    write_file(&temp.path().join("node_modules/pkg/index.js"), "pkg");

    projctx()
        .arg(temp.path())
        .assert()
        .success()
        .stdout("## a.ts\n\n```\nhello\n```\n\n## sub/b.ts\n\n```\nworld\n```\n");
}

#[test]
fn paths_format_lists_included_files() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("b.txt"), "b");
    write_file(&temp.path().join("a.txt"), "a");
    write_file(&temp.path().join("sub/zz.md"), "z");

    projctx()
        .arg(temp.path())
        .args(["--include", "**/*.txt", "--include", "sub", "--format", "paths"])
        .assert()
        .success()
        .stdout("a.txt\nb.txt\nsub/zz.md\n");
}

#[test]
fn no_default_lists_include_everything() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("node_modules/pkg/index.js"), "pkg");
    write_file(&temp.path().join("data.bin"), "raw");

    projctx()
        .arg(temp.path())
        .args(["--no-default-include", "--no-default-exclude", "--format", "paths"])
        .assert()
        .success()
        .stdout("data.bin\nnode_modules/pkg/index.js\n");
}

#[test]
fn limit_exceeded_fails() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.md"), "some content that is long enough");

    projctx()
        .arg(temp.path())
        .args(["--limit", "10"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exceeds limit of 10"));
}

#[test]
fn missing_root_fails() {
    let temp = tempdir().unwrap();

    projctx()
        .arg(temp.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Root not found"));
}

#[test]
fn config_file_and_output_file() {
    let temp = tempdir().unwrap();
    let project = temp.path().join("project");
    write_file(&project.join("notes.txt"), "remember");
    write_file(&project.join("main.rs"), "fn main() {}");
    let config = temp.path().join("projctx.json");
    fs::write(&config, r#"{ "include": ["*.txt"], "exclude": [] }"#).unwrap();
    let out = temp.path().join("snapshot.md");

    projctx()
        .arg(&project)
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "## notes.txt\n\n```\nremember\n```\n"
    );
}
