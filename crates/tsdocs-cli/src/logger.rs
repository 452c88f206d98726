//! Logging setup for the tsdocs CLI.
//!
//! Everything the core library reports (missing items, unsupported kinds,
//! undocumented references) goes through `tracing`. This module installs
//! the subscriber that prints it.
//!
//! # Example
//!
//! ```rust,no_run
//! use tsdocs_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("rendering");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "tsdocs=debug,tsdocs_cli=debug,tsdocs_plugin_source_links=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "tsdocs=info,tsdocs_cli=info,tsdocs_plugin_source_links=info";

/// Builds the filter for the given flags.
///
/// `--verbose` wins over `--quiet`; without either, `RUST_LOG` is honored and
/// falls back to info for the tsdocs crates.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Installs the global subscriber. Call once, before anything logs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Installs the global subscriber with a custom filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Whether stderr should get ANSI colors.
///
/// `NO_COLOR` disables and `FORCE_COLOR` forces colors; otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter_enables_debug() {
        let filter = filter_for(true, true).to_string();
        assert!(filter.contains("tsdocs=debug"));
    }

    #[test]
    fn test_quiet_filter() {
        assert_eq!(filter_for(false, true).to_string(), "error");
    }
}
