//! `tsdocs generate`.
//!
//! 1. Load and validate configuration (CLI > Env > File > Defaults)
//! 2. Read the extract
//! 3. Load plugins and render every entry file
//! 4. Write one markdown file per entry, unless this is a dry run

use std::path::{Path, PathBuf};
use std::time::Instant;

use tsdocs::{ExtractDto, GeneratorOptions, RenderedFile};

use crate::cli::GenerateArgs;
use crate::commands::plugin_catalog;
use crate::config::DocsConfig;
use crate::error::{CliError, Result};
use crate::ui;

pub async fn execute(args: GenerateArgs, config_path: Option<&Path>, quiet: bool) -> Result<()> {
    let start_time = Instant::now();

    let config = DocsConfig::load(&args, config_path)?;
    config.validate()?;

    let spinner = if quiet {
        ui::Spinner::hidden()
    } else {
        ui::Spinner::new("Reading extract...")
    };
    let files = match render(&config).await {
        Ok(files) => files,
        Err(err) => {
            spinner.fail("Generation failed");
            return Err(err);
        }
    };
    spinner.finish(&format!("Rendered {} entry file(s)", files.len()));

    let output_dir = config.output_dir();
    let summary = if config.dry_run {
        files
            .iter()
            .map(|file| (output_dir.join(&file.path), file.contents().len() as u64))
            .collect()
    } else {
        write_files(&files, &output_dir).await?
    };

    if !quiet {
        ui::print_generate_summary(&summary, start_time.elapsed());
        if config.dry_run {
            ui::warning("Dry run: no files were written");
        } else {
            ui::success(&format!("Documentation written to {}", output_dir.display()));
        }
    }
    Ok(())
}

/// Reads the extract and renders every configured entry file.
pub async fn render(config: &DocsConfig) -> Result<Vec<RenderedFile>> {
    let extract = ExtractDto::read(&config.extract_path()).await?;
    tracing::debug!(
        items = extract.registry.len(),
        entries = ?config.entry_file,
        "extract loaded"
    );

    let options = GeneratorOptions::from(config);
    let files = tsdocs::generate(&extract, &options, &plugin_catalog(), &config.plugin).await?;
    Ok(files)
}

/// Writes rendered files under `output_dir`, returning each path and size.
pub async fn write_files(files: &[RenderedFile], output_dir: &Path) -> Result<Vec<(PathBuf, u64)>> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = output_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|error| CliError::Write {
                    path: parent.to_path_buf(),
                    error,
                })?;
        }

        let contents = file.contents();
        tokio::fs::write(&path, &contents)
            .await
            .map_err(|error| CliError::Write {
                path: path.clone(),
                error,
            })?;
        tracing::debug!(path = %path.display(), "wrote markdown");
        written.push((path, contents.len() as u64));
    }
    Ok(written)
}
