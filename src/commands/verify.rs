//! `ta-uuidgen verify` command.

use crate::context::ServiceContext;
use crate::emit::{verify, EmitConfig};

/// Execute the `verify` command and print the shared identifier.
///
/// # Errors
///
/// Returns an error string if either artifact is missing, malformed, or
/// disagrees with the other.
pub fn run(config: &EmitConfig) -> Result<(), String> {
    let uuid = verify(&ServiceContext::live(), config).map_err(|err| err.to_string())?;
    println!("{uuid}");
    Ok(())
}
