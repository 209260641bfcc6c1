//! Recording adapters that capture interactions to cassettes.

pub mod id_gen;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;
use crate::error::{Error, Result};

/// Record one interaction's input and output.
///
/// Mirror of `CassetteReplayer::next_interaction`, which reads them back.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) -> Result<()>
where
    I: Serialize,
    O: Serialize,
{
    let input_json = serde_json::to_value(input)
        .map_err(|err| Error::Cassette(format!("failed to serialize {port}::{method} input: {err}")))?;
    let output_json = serde_json::to_value(output).map_err(|err| {
        Error::Cassette(format!("failed to serialize {port}::{method} output: {err}"))
    })?;

    let mut guard = recorder
        .lock()
        .map_err(|err| Error::Cassette(format!("recorder lock poisoned: {err}")))?;
    guard.record(port, method, input_json, output_json);
    Ok(())
}
