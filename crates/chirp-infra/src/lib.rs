//! # Chirp Infrastructure
//!
//! Concrete implementations of the ports defined in `chirp-core`.
//! One production store (flat JSON array files) and one in-memory store used
//! as a test substitute.

pub mod store;

pub use store::{JsonFileStore, MemoryStore};
