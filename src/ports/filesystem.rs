//! Filesystem port for file I/O operations.

use std::path::Path;

use crate::error::Result;

/// Provides the filesystem access the emitter and verifier need.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Writes the given contents to a file, creating or truncating it.
    ///
    /// Parent directories are never created.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (missing directory, permissions,
    /// disk full).
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Returns `true` if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}
