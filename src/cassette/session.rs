//! Recording session owning the cassette recorder for one run.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;
use crate::error::{Error, Result};

/// Shares one `CassetteRecorder` with the recording adapters of a run and
/// writes the cassette once they are gone.
pub struct RecordingSession {
    /// Recorder for ID generator interactions.
    pub id_gen: Arc<Mutex<CassetteRecorder>>,
    path: PathBuf,
}

impl RecordingSession {
    /// Create a session that will write its cassette to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("ta-uuidgen-{}", Utc::now().format("%Y-%m-%dT%H-%M-%S"));
        let recorder = CassetteRecorder::new(&path, name);
        Self { id_gen: Arc::new(Mutex::new(recorder)), path }
    }

    /// Path the cassette will be written to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Finish the recorder and write the cassette file.
    ///
    /// The context holding the recording adapters must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds the recorder or the file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf> {
        let recorder = Arc::try_unwrap(self.id_gen)
            .map_err(|_| Error::Cassette("recording adapter for id_gen still has references".into()))?
            .into_inner()
            .map_err(|err| Error::Cassette(format!("recorder lock for id_gen poisoned: {err}")))?;
        recorder.finish()
    }
}
