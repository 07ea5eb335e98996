//! Local breed store adapters.

mod memory;
mod sqlite;

pub use memory::InMemoryBreedStore;
pub use sqlite::SqliteBreedStore;
