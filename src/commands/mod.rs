//! Command dispatch and handlers.

pub mod generate;
pub mod verify;

use crate::cli::{Cli, Command};

/// Dispatch a parsed command line to its handler.
///
/// # Errors
///
/// Returns an error string if the output location cannot be resolved, if
/// cassette options precede an explicit subcommand, or if the selected
/// command fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    if cli.command.is_some() && cli.generate.is_set() {
        return Err("--record and --replay must follow the `generate` subcommand".to_string());
    }

    let config = cli.emit_config().map_err(|err| err.to_string())?;
    match cli.command() {
        Command::Generate(args) => {
            generate::run(&config, args.record.as_deref(), args.replay.as_deref())
        }
        Command::Verify => verify::run(&config),
    }
}
