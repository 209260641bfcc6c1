//! Error type shared by the emitter, the artifact parsers and the cassette layer.

use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can make a run fail.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The file or directory being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The output directory is absent or not a directory; nothing was written.
    #[error("output directory {} does not exist or is not a directory", .0.display())]
    MissingOutputDir(PathBuf),

    /// The identifier to emit is not a random (version 4, RFC 4122) UUID.
    #[error("{0} is not a random version-4 RFC 4122 UUID")]
    NotRandomUuid(Uuid),

    /// The location of the running executable could not be determined.
    #[error("cannot locate the running executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    /// A variable or macro name is not a valid C identifier.
    #[error("invalid identifier name {0:?}: expected [A-Za-z_][A-Za-z0-9_]*")]
    InvalidName(String),

    /// An artifact could not be parsed back.
    #[error("cannot parse {what}: {reason}")]
    Parse {
        /// Which artifact was being parsed.
        what: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The two artifacts disagree with each other or with the expected names.
    #[error("artifacts disagree: {0}")]
    Mismatch(String),

    /// The build variable and the header carry different identifiers.
    #[error("build variable holds {build_var} but header holds {header}")]
    UuidMismatch {
        /// Identifier read from the build variable file.
        build_var: Uuid,
        /// Identifier read from the header file.
        header: Uuid,
    },

    /// Recording or replaying a cassette failed.
    #[error("cassette error: {0}")]
    Cassette(String),
}

impl Error {
    /// Wraps an I/O error together with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn parse(what: &'static str, reason: impl Into<String>) -> Self {
        Self::Parse { what, reason: reason.into() }
    }
}
