//! ID generator port for producing identifiers.

use uuid::Uuid;

use crate::error::Result;

/// Produces the identifier a run emits.
///
/// Abstracting ID generation allows deterministic replay by substituting
/// a recorded identifier during tests and reproducible builds.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when the source cannot supply one, such as an
    /// exhausted cassette.
    fn generate_id(&self) -> Result<Uuid>;
}
