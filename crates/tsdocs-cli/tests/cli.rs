//! Binary-level tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use tsdocs::kinds::ApiDefinitionKind;
use tsdocs::test_utils::{record, references, RegistryBuilder};

fn tsdocs() -> Command {
    let mut cmd = Command::cargo_bin("tsdocs").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn write_extract(dir: &TempDir) {
    let extract = RegistryBuilder::new()
        .item("shape", record(ApiDefinitionKind::Interface, "Shape"))
        .source_file("index", "src/index.ts", vec![references("Shape", &["shape"])])
        .build();
    std::fs::write(
        dir.path().join("api-extract.json"),
        serde_json::to_string(&extract).unwrap(),
    )
    .unwrap();
}

#[test]
fn help_lists_commands() {
    tsdocs()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("plugins"));
}

#[test]
fn plugins_lists_source_links() {
    tsdocs()
        .arg("plugins")
        .assert()
        .success()
        .stdout(predicate::str::contains("source-links"));
}

#[test]
fn generate_writes_markdown() {
    let dir = TempDir::new().unwrap();
    write_extract(&dir);

    tsdocs()
        .current_dir(dir.path())
        .args(["generate", "src/index.ts"])
        .assert()
        .success();

    let markdown = std::fs::read_to_string(dir.path().join("docs/src/index.md")).unwrap();
    assert!(markdown.contains("### Shape"));
    assert!(markdown.contains("interface Shape"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write_extract(&dir);

    tsdocs()
        .current_dir(dir.path())
        .args(["generate", "--dry-run", "src/index.ts"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Dry run"));

    assert!(!dir.path().join("docs").exists());
}

#[test]
fn config_file_supplies_entries() {
    let dir = TempDir::new().unwrap();
    write_extract(&dir);
    std::fs::write(
        dir.path().join("tsdocs.config.json"),
        r#"{ "entryFile": ["src/index.ts"], "output": "api" }"#,
    )
    .unwrap();

    tsdocs()
        .current_dir(dir.path())
        .arg("generate")
        .assert()
        .success();

    assert!(dir.path().join("api/src/index.md").exists());
}

#[test]
fn missing_entry_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_extract(&dir);

    tsdocs()
        .current_dir(dir.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("entryFile"));
}

#[test]
fn missing_extract_is_an_error() {
    let dir = TempDir::new().unwrap();

    tsdocs()
        .current_dir(dir.path())
        .args(["generate", "src/index.ts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Extract file not found"));
}
