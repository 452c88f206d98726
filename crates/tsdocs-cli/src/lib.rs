//! Command-line front end for tsdocs.
//!
//! - [`cli`] - argument definitions
//! - [`config`] - `tsdocs.config.json` / environment / argument merging
//! - [`commands`] - `generate` and `plugins`
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status output
//! - [`error`] - error types and miette conversion

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result};
