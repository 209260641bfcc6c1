//! Replaying adapters that replay recorded interactions.

pub mod id_gen;

pub use id_gen::ReplayingIdGenerator;
