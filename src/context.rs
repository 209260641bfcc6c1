//! Service context bundling the port trait objects for a run.

use std::path::{Path, PathBuf};

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::id_gen::LiveIdGenerator;
use crate::adapters::recording::id_gen::RecordingIdGenerator;
use crate::adapters::replaying::ReplayingIdGenerator;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::error::Result;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;

/// Bundles the port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live, replaying,
/// recording). The filesystem is always live.
pub struct ServiceContext {
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
    /// ID generator for the emitted identifier.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a live context with real adapters.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem), id_gen: Box::new(LiveIdGenerator::new()) }
    }

    /// Creates a context whose generated identifiers are recorded to a
    /// cassette at `path`.
    ///
    /// The returned session writes the cassette in `finish`, which must be
    /// called after this context is dropped.
    #[must_use]
    pub fn recording_at(path: PathBuf) -> (Self, RecordingSession) {
        let session = RecordingSession::new(path);
        let id_gen = RecordingIdGenerator::new(
            Box::new(LiveIdGenerator::new()),
            std::sync::Arc::clone(&session.id_gen),
        );
        (Self { fs: Box::new(LiveFileSystem), id_gen: Box::new(id_gen) }, session)
    }

    /// Creates a context whose identifiers come from a recorded cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self> {
        let cassette = Cassette::load(path)?;
        Ok(Self {
            fs: Box::new(LiveFileSystem),
            id_gen: Box::new(ReplayingIdGenerator::new(CassetteReplayer::new(&cassette))),
        })
    }
}
