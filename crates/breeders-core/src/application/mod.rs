//! Application layer for Breeders.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PetService, BreedService, factories)
//! - **Context**: The once-initialised SharedContext the factories read from
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod context;
pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{BreedService, CatFactory, DogFactory, PetFactory, PetService};

pub use context::{ContextCell, SharedContext};

// Re-export port traits (for adapter implementation)
pub use ports::{BreedStore, RemoteBreedAdapter};

pub use error::ApplicationError;
