//! Core library entry for the `ta-uuidgen` CLI.
//!
//! Generates the UUID identifying a trusted application and writes it as a
//! make fragment (`uuid.mk`) and a C header (`uuid.h`).

pub mod adapters;
pub mod artifact;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod emit;
pub mod error;
pub mod logging;
pub mod ports;

pub use error::{Error, Result};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    logging::init(cli.verbose);
    commands::dispatch(&cli)
}
