//! Cassette format for recording and replaying identifier generation.
//!
//! A cassette pins the identifier a run emits, so the same `uuid.mk` and
//! `uuid.h` can be regenerated later byte for byte.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
