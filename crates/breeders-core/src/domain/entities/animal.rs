//! Species-specific wrappers produced by the pet factories.
//!
//! Each factory hands back its own wrapper (`DogFromFactory`,
//! `CatFromFactory`). Callers that only need a textual description go
//! through the [`Describe`] capability; callers that need the concrete
//! species match on [`Animal`].

use serde::Serialize;

use crate::domain::{
    entities::{breed::Breed, pet::Pet},
    value_objects::Species,
};

/// Anything that can describe itself in one sentence.
pub trait Describe {
    fn describe(&self) -> String;
}

fn describe_pet(pet: &Pet, fallback: Species) -> String {
    if pet.breed.trim().is_empty() {
        format!("This animal is a {} of unknown breed", fallback)
    } else {
        format!("This animal is a {}", pet.breed)
    }
}

/// A dog produced by the dog factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DogFromFactory {
    pub pet: Pet,
    /// Full breed record when the dog was created with a breed lookup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<Breed>,
}

impl DogFromFactory {
    pub fn new(pet: Pet) -> Self {
        Self { pet, breed: None }
    }

    pub fn with_breed(breed: Breed) -> Self {
        Self {
            pet: Pet::from_breed(Species::Dog, &breed),
            breed: Some(breed),
        }
    }
}

impl Describe for DogFromFactory {
    fn describe(&self) -> String {
        describe_pet(&self.pet, Species::Dog)
    }
}

/// A cat produced by the cat factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatFromFactory {
    pub pet: Pet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<Breed>,
}

impl CatFromFactory {
    pub fn new(pet: Pet) -> Self {
        Self { pet, breed: None }
    }

    pub fn with_breed(breed: Breed) -> Self {
        Self {
            pet: Pet::from_breed(Species::Cat, &breed),
            breed: Some(breed),
        }
    }
}

impl Describe for CatFromFactory {
    fn describe(&self) -> String {
        describe_pet(&self.pet, Species::Cat)
    }
}

/// Closed union of factory outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "species", rename_all = "lowercase")]
pub enum Animal {
    Dog(DogFromFactory),
    Cat(CatFromFactory),
}

impl Animal {
    pub fn species(&self) -> Species {
        match self {
            Self::Dog(_) => Species::Dog,
            Self::Cat(_) => Species::Cat,
        }
    }

    pub fn pet(&self) -> &Pet {
        match self {
            Self::Dog(d) => &d.pet,
            Self::Cat(c) => &c.pet,
        }
    }

    pub fn breed(&self) -> Option<&Breed> {
        match self {
            Self::Dog(d) => d.breed.as_ref(),
            Self::Cat(c) => c.breed.as_ref(),
        }
    }
}

impl Describe for Animal {
    fn describe(&self) -> String {
        match self {
            Self::Dog(d) => d.describe(),
            Self::Cat(c) => c.describe(),
        }
    }
}

impl From<DogFromFactory> for Animal {
    fn from(dog: DogFromFactory) -> Self {
        Self::Dog(dog)
    }
}

impl From<CatFromFactory> for Animal {
    fn from(cat: CatFromFactory) -> Self {
        Self::Cat(cat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_uses_breed_name() {
        let dog = DogFromFactory::with_breed(Breed::named("Beagle"));
        assert_eq!(dog.describe(), "This animal is a Beagle");
    }

    #[test]
    fn describe_without_breed_falls_back_to_species() {
        let cat = CatFromFactory::new(Pet::new(Species::Cat));
        assert_eq!(cat.describe(), "This animal is a cat of unknown breed");
    }

    #[test]
    fn animal_delegates_to_wrapper() {
        let animal: Animal = DogFromFactory::with_breed(Breed::named("Beagle")).into();
        assert_eq!(animal.species(), Species::Dog);
        assert_eq!(animal.pet().breed, "Beagle");
        assert_eq!(animal.breed().map(|b| b.name.as_str()), Some("Beagle"));
        assert_eq!(animal.describe(), "This animal is a Beagle");
    }

    #[test]
    fn animal_serialises_with_species_tag() {
        let animal: Animal = CatFromFactory::new(Pet::new(Species::Cat)).into();
        let json = serde_json::to_value(&animal).unwrap();
        assert_eq!(json["species"], "cat");
        assert_eq!(json["pet"]["species"], "cat");
        assert!(json.get("breed").is_none());
    }
}
