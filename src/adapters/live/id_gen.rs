//! Live adapter for the `IdGenerator` port.

use uuid::Uuid;

use crate::error::Result;
use crate::ports::IdGenerator;

/// Live ID generator that produces random version-4 UUIDs.
pub struct LiveIdGenerator;

impl LiveIdGenerator {
    /// Creates a new live ID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> Result<Uuid> {
        Ok(Uuid::new_v4())
    }
}
