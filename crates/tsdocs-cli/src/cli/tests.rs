#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    fn generate_args(args: &[&str]) -> (Cli, crate::cli::GenerateArgs) {
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Generate(ref generate) = cli.command else {
            panic!("expected generate");
        };
        let generate = generate.clone();
        (cli, generate)
    }

    #[test]
    fn test_generate_with_entries() {
        let (_, args) = generate_args(&["tsdocs", "generate", "src/index.ts", "src/cli.ts"]);
        assert_eq!(args.entry_file, vec!["src/index.ts", "src/cli.ts"]);
        assert!(args.extract.is_none());
        assert!(!args.dry_run);
        assert!(!args.include_private_api);
    }

    #[test]
    fn test_generate_all_options() {
        let (cli, args) = generate_args(&[
            "tsdocs",
            "generate",
            "-p",
            "packages/core",
            "-e",
            "out/api.json",
            "-o",
            "site/api",
            "--plugin",
            "source-links",
            "--plugin",
            "./plugins/extra.toml",
            "--exclude",
            "src/internal",
            "--include-private-api",
            "--dry-run",
            "--skip-table-of-contents",
            "--config",
            "docs.json",
            "src/index.ts",
        ]);

        assert_eq!(args.project, Some(PathBuf::from("packages/core")));
        assert_eq!(args.extract, Some(PathBuf::from("out/api.json")));
        assert_eq!(args.output, Some(PathBuf::from("site/api")));
        assert_eq!(args.plugin, vec!["source-links", "./plugins/extra.toml"]);
        assert_eq!(args.exclude, vec!["src/internal"]);
        assert!(args.include_private_api);
        assert!(args.dry_run);
        assert!(args.skip_table_of_contents);
        assert_eq!(cli.config, Some(PathBuf::from("docs.json")));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["tsdocs", "-v", "--no-color", "plugins"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Plugins));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["tsdocs", "-v", "-q", "plugins"]).is_err());
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Cli::try_parse_from(["tsdocs"]).is_err());
    }
}
