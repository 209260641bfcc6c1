//! Port traits defining external boundaries.
//!
//! The emitter only touches the outside world through randomness and the
//! filesystem. Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod id_gen;

pub use filesystem::FileSystem;
pub use id_gen::IdGenerator;
