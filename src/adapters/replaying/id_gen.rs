//! Replaying adapter for the `IdGenerator` port.

use std::sync::Mutex;

use uuid::Uuid;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::{Error, Result};
use crate::ports::id_gen::IdGenerator;

/// Replays recorded identifiers from a cassette.
pub struct ReplayingIdGenerator {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingIdGenerator {
    /// Creates a new replaying ID generator from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl IdGenerator for ReplayingIdGenerator {
    fn generate_id(&self) -> Result<Uuid> {
        let output = {
            let mut replayer = self
                .replayer
                .lock()
                .map_err(|err| Error::Cassette(format!("replayer lock poisoned: {err}")))?;
            let interaction = replayer.next_interaction("id_gen", "generate_id")?;
            interaction.output.clone()
        };
        serde_json::from_value(output).map_err(|err| {
            Error::Cassette(format!("id_gen::generate_id: expected a UUID string: {err}"))
        })
    }
}
