use std::path::PathBuf;

use tsdocs::kinds::ApiDefinitionKind;
use tsdocs::model::Location;
use tsdocs::test_utils::{record, references, RegistryBuilder};
use tsdocs::{generate, GeneratorOptions, PluginCatalog};

fn catalog() -> PluginCatalog {
    let mut catalog = PluginCatalog::new();
    catalog.register(tsdocs_plugin_source_links::module());
    catalog
}

fn extract() -> tsdocs::ExtractDto {
    let mut function = record(ApiDefinitionKind::Function, "run");
    function.location = Location::new("src/run.ts", 4, 0);
    let mut decorator = record(ApiDefinitionKind::from_tag("decorator"), "sealed");
    decorator.location = Location::new("src/run.ts", 9, 0);

    RegistryBuilder::new()
        .item("run", function)
        .item("sealed", decorator)
        .source_file(
            "file",
            "src/run.ts",
            vec![references("run", &["run"]), references("sealed", &["sealed"])],
        )
        .build()
}

fn options() -> GeneratorOptions {
    GeneratorOptions {
        entry_files: vec!["src/run.ts".into()],
        skip_table_of_contents: true,
        ..GeneratorOptions::default()
    }
}

#[tokio::test]
async fn appends_source_line_after_builtin_output() {
    let extract = extract();
    let files = generate(&extract, &options(), &catalog(), &["source-links".to_string()])
        .await
        .unwrap();
    let lines = &files[0].lines;

    let code_end = lines.iter().position(|line| line == "function run(): unknown;").unwrap();
    let source = lines
        .iter()
        .position(|line| line == "_Defined in `src/run.ts:5`_")
        .unwrap();
    assert!(source > code_end);
}

#[tokio::test]
async fn runs_after_default_plugin_for_unknown_kinds() {
    let extract = extract();
    let files = generate(&extract, &options(), &catalog(), &["source-links".to_string()])
        .await
        .unwrap();
    let lines = &files[0].lines;

    let heading = lines.iter().position(|line| line == "### decorator sealed").unwrap();
    assert_eq!(lines[heading + 1], "");
    assert_eq!(lines[heading + 2], "_Defined in `src/run.ts:10`_");
}

#[tokio::test]
async fn loads_through_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let manifest: PathBuf = dir.path().join("tsdocs-plugins.toml");
    std::fs::write(&manifest, "module = \"source-links\"\nexports = [\"source-links\"]\n").unwrap();

    let extract = extract();
    let files = generate(
        &extract,
        &options(),
        &catalog(),
        &[manifest.display().to_string()],
    )
    .await
    .unwrap();

    assert!(files[0]
        .lines
        .iter()
        .any(|line| line == "_Defined in `src/run.ts:5`_"));
}
