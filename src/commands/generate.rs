//! `ta-uuidgen generate`, also run when no subcommand is given.

use std::path::Path;

use tracing::info;

use crate::context::ServiceContext;
use crate::emit::{generate_and_emit, EmitConfig};

/// Execute the `generate` command and print the new identifier.
///
/// With `record`, the identifier is also saved to that cassette; with
/// `replay`, it is taken from that cassette instead of generated.
///
/// # Errors
///
/// Returns an error string if a cassette cannot be used or the artifacts
/// cannot be written.
pub fn run(config: &EmitConfig, record: Option<&Path>, replay: Option<&Path>) -> Result<(), String> {
    let (ctx, session) = match (replay, record) {
        (Some(path), _) => (ServiceContext::replaying(path).map_err(|err| err.to_string())?, None),
        (None, Some(path)) => {
            let (ctx, session) = ServiceContext::recording_at(path.to_path_buf());
            (ctx, Some(session))
        }
        (None, None) => (ServiceContext::live(), None),
    };

    let result = generate_and_emit(&ctx, config);

    // Finish recording even when emitting failed.
    if let Some(session) = session {
        drop(ctx);
        let path = session.finish().map_err(|err| err.to_string())?;
        info!(path = %path.display(), "recorded identifier");
    }

    let emitted = result.map_err(|err| err.to_string())?;
    println!("{}", emitted.uuid);
    Ok(())
}
