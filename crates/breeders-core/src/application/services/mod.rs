//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a cat with this breed" or
//! "list every dog breed".

pub mod breed_service;
pub mod pet_factory;
pub mod pet_service;

pub use breed_service::BreedService;
pub use pet_factory::{CatFactory, DogFactory, PetFactory, factory_for};
pub use pet_service::PetService;
