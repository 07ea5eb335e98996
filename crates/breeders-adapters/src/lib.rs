//! Infrastructure adapters for Breeders.
//!
//! This crate implements the ports defined in `breeders-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_breeds;
pub mod remote;
pub mod store;

// Re-export commonly used adapters
pub use remote::{
    BreedTransport, HttpTransport, JsonBreedAdapter, StaticTransport, XmlBreedAdapter, adapter_for,
};
pub use store::{InMemoryBreedStore, SqliteBreedStore};
