pub mod animal;
pub mod breed;
pub mod pet;

pub use crate::domain::DomainError;
pub use animal::{Animal, CatFromFactory, Describe, DogFromFactory};
pub use breed::Breed;
pub use pet::{Pet, PetBuilder};
