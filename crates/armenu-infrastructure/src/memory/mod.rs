//! In-memory record store

pub mod store;
pub mod seed;

pub use store::MemoryStore;
