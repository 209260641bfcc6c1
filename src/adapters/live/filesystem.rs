//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::error::{Error, Result};
use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|err| Error::io(path, err))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents).map_err(|err| Error::io(path, err))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
