//! End-to-end tests for `generate` against extracts written to a temp dir.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tsdocs::kinds::ApiDefinitionKind;
use tsdocs::model::Location;
use tsdocs::test_utils::{basic_type, record, references, RegistryBuilder};
use tsdocs::{DocsError, ExtractDto};
use tsdocs_cli::CliError;
use tsdocs_cli::commands::generate::{render, write_files};
use tsdocs_cli::config::DocsConfig;

fn extract() -> ExtractDto {
    let mut greet = record(ApiDefinitionKind::Function, "greet");
    greet.location = Location::new("src/index.ts", 2, 0);
    greet.parameters = Some(vec![references("name", &["name"])]);
    greet.return_type = Some(basic_type("string"));

    let mut name = record(ApiDefinitionKind::Parameter, "name");
    name.r#type = Some(basic_type("string"));

    let mut version = record(ApiDefinitionKind::Variable, "VERSION");
    version.location = Location::new("src/version.ts", 0, 0);
    version.variable_declaration_type = Some("const".into());
    version.r#type = Some(basic_type("string"));

    RegistryBuilder::new()
        .item("greet", greet)
        .item("name", name)
        .item("version", version)
        .source_file(
            "index",
            "src/index.ts",
            vec![references("greet", &["greet"])],
        )
        .source_file(
            "version-file",
            "src/version.ts",
            vec![references("VERSION", &["version"])],
        )
        .build()
}

fn project(extract: &ExtractDto) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("api-extract.json"),
        serde_json::to_string(extract).unwrap(),
    )
    .unwrap();
    dir
}

fn config(project: &Path, entries: &[&str]) -> DocsConfig {
    DocsConfig {
        project: project.to_path_buf(),
        entry_file: entries.iter().map(|entry| entry.to_string()).collect(),
        ..DocsConfig::default_config()
    }
}

#[tokio::test]
async fn renders_and_writes_every_entry() {
    let dir = project(&extract());
    let config = config(dir.path(), &["src/index.ts", "src/version.ts"]);
    config.validate().unwrap();

    let files = render(&config).await.unwrap();
    let written = write_files(&files, &config.output_dir()).await.unwrap();

    assert_eq!(written.len(), 2);
    let index = fs::read_to_string(dir.path().join("docs/src/index.md")).unwrap();
    assert!(index.starts_with("# src/index.ts\n"));
    assert!(index.contains("function greet(name: string): string;"));
    assert!(index.contains("| name | string |"));

    let version = fs::read_to_string(dir.path().join("docs/src/version.md")).unwrap();
    assert!(version.contains("const VERSION: string;"));
    assert_eq!(written[1].1, version.len() as u64);
}

#[tokio::test]
async fn source_links_plugin_loads_by_name() {
    let dir = project(&extract());
    let config = DocsConfig {
        plugin: vec!["source-links".to_string()],
        ..config(dir.path(), &["src/index.ts"])
    };

    let files = render(&config).await.unwrap();
    assert!(files[0].lines.contains(&"_Defined in `src/index.ts:3`_".to_string()));
}

#[tokio::test]
async fn unknown_plugin_fails_before_rendering() {
    let dir = project(&extract());
    let config = DocsConfig {
        plugin: vec!["missing".to_string()],
        ..config(dir.path(), &["src/index.ts"])
    };

    let err = render(&config).await.unwrap_err();
    assert!(matches!(err, CliError::Docs(DocsError::PluginLoad(_))));
    assert!(!dir.path().join("docs").exists());
}

#[tokio::test]
async fn invalid_extract_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("api-extract.json"), "{ not json").unwrap();

    let err = render(&config(dir.path(), &["src/index.ts"])).await.unwrap_err();
    assert!(matches!(err, CliError::Docs(DocsError::Json(_))));
}
