//! Recording adapter for the `IdGenerator` port.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::Result;
use crate::ports::IdGenerator;

/// Records generated identifiers while delegating to an inner implementation.
pub struct RecordingIdGenerator {
    inner: Box<dyn IdGenerator>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingIdGenerator {
    /// Creates a new recording ID generator wrapping the given implementation.
    pub fn new(inner: Box<dyn IdGenerator>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl IdGenerator for RecordingIdGenerator {
    fn generate_id(&self) -> Result<Uuid> {
        let id = self.inner.generate_id()?;
        record_interaction(&self.recorder, "id_gen", "generate_id", &(), &id)?;
        Ok(id)
    }
}
