// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Breeders.
//!
//! This module contains pure business logic with no I/O. Breed lookups
//! happen through ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No database, network, or filesystem calls
//! - **No tracing**: Observability belongs to the application and CLI layers
//! - **Value objects**: Pet and Breed are Clone + PartialEq, no identity
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    animal::{Animal, CatFromFactory, Describe, DogFromFactory},
    breed::Breed,
    pet::{Pet, PetBuilder},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{BreedSource, Species, WireFormat};

pub use validation::DomainValidator;
