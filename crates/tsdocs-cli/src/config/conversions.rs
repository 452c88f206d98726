use tsdocs::{GeneratorOptions, RenderConfig};

use crate::cli::GenerateArgs;
use crate::config::{ConfigOverrides, DocsConfig};

impl From<&DocsConfig> for GeneratorOptions {
    fn from(config: &DocsConfig) -> Self {
        Self {
            entry_files: config.entry_file.clone(),
            exclude: config.exclude.clone(),
            exclude_private_api: config.exclude_private_api,
            skip_table_of_contents: config.skip_table_of_contents,
            render: RenderConfig::default(),
        }
    }
}

// Flags that were not passed stay unset so they do not override lower layers.
impl From<&GenerateArgs> for ConfigOverrides {
    fn from(args: &GenerateArgs) -> Self {
        Self {
            project: args.project.clone(),
            extract: args.extract.clone(),
            output: args.output.clone(),
            entry_file: (!args.entry_file.is_empty()).then(|| args.entry_file.clone()),
            plugin: (!args.plugin.is_empty()).then(|| args.plugin.clone()),
            exclude: (!args.exclude.is_empty()).then(|| args.exclude.clone()),
            exclude_private_api: args.include_private_api.then_some(false),
            dry_run: args.dry_run.then_some(true),
            skip_table_of_contents: args.skip_table_of_contents.then_some(true),
        }
    }
}
