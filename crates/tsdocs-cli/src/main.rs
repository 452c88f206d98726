//! tsdocs CLI: renders an extracted TypeScript API registry as markdown.

use clap::Parser;
use miette::Result;
use tsdocs_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Generate(generate_args) => {
            commands::generate_execute(generate_args, args.config.as_deref(), args.quiet).await
        }
        cli::Command::Plugins => commands::plugins_execute(),
    };

    result.map_err(error::cli_error_to_miette)
}
