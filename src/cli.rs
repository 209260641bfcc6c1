//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::artifact::DEFAULT_NAME;
use crate::emit::{default_out_dir, EmitConfig};
use crate::error::Result;

/// Top-level CLI parser for `ta-uuidgen`.
#[derive(Debug, Parser)]
#[command(
    name = "ta-uuidgen",
    version,
    about = "Generate a trusted application UUID as a make fragment and a C header"
)]
pub struct Cli {
    /// The command to execute; generates when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Cassette options for the implicit `generate`.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Directory for uuid.mk and uuid.h [default: include/ beside the executable]
    #[arg(long, value_name = "DIR", global = true)]
    pub out_dir: Option<PathBuf>,

    /// Name of the make variable.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_NAME, global = true)]
    pub var_name: String,

    /// Name of the header macro.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_NAME, global = true)]
    pub macro_name: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Options that only apply when generating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct GenerateArgs {
    /// Record the generated identifier to this cassette file.
    #[arg(long, value_name = "FILE", conflicts_with = "replay")]
    pub record: Option<PathBuf>,

    /// Emit the identifier recorded in this cassette file instead of a new one.
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,
}

impl GenerateArgs {
    /// Whether either cassette option was given.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.record.is_some() || self.replay.is_some()
    }
}

/// Supported subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate a new identifier and write uuid.mk and uuid.h.
    Generate(GenerateArgs),
    /// Check that uuid.mk and uuid.h carry the same identifier.
    Verify,
}

impl Cli {
    /// The subcommand to run, defaulting to `generate` with the top-level
    /// cassette options.
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or_else(|| Command::Generate(self.generate.clone()))
    }

    /// Resolves output location and names.
    ///
    /// # Errors
    ///
    /// Returns an error if no `--out-dir` is given and the executable cannot
    /// be located.
    pub fn emit_config(&self) -> Result<EmitConfig> {
        let out_dir = match &self.out_dir {
            Some(dir) => dir.clone(),
            None => default_out_dir()?,
        };
        Ok(EmitConfig {
            out_dir,
            var_name: self.var_name.clone(),
            macro_name: self.macro_name.clone(),
        })
    }
}
