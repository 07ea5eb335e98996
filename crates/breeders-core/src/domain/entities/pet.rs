//! The `Pet` value object and its builder.
//!
//! A `Pet` is a flat attribute record with no identity beyond its field
//! values. Species and breed are the only required attributes; everything
//! else is absent until set.
//!
//! # Construction paths
//!
//! | Path | Entry point | Validates |
//! |------|-------------|-----------|
//! | Simple factory | `Pet::new(species)` | no (breed left empty) |
//! | From breed lookup | `Pet::from_breed(species, &breed)` | no (breed comes from a source) |
//! | Builder | `Pet::builder()...build()` | species, then breed |
//!
//! `PetBuilder::build` is the only boundary that enforces "species and breed
//! are both non-empty".
//!
//! # Wire form
//!
//! Serialises with the attribute names `species, breed, min_weight,
//! max_weight, average_weight, weight, description, lifespan,
//! geographic_origin, color, age, age_estimated`. Empty strings, unset
//! numbers and a `false` age-estimated flag are omitted.

use serde::{Deserialize, Serialize};

use crate::domain::{entities::breed::Breed, error::DomainError, value_objects::Species};

// ── Aggregate ─────────────────────────────────────────────────────────────────

/// A pet description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pet {
    pub species: String,
    pub breed: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_weight: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_weight: Option<u32>,

    /// Current weight in pounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifespan: Option<u32>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub geographic_origin: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,

    /// Age in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub age_estimated: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Pet {
    /// Simple factory: a pet of the given species with every other field
    /// at its default.
    pub fn new(species: Species) -> Self {
        Self {
            species: species.to_string(),
            ..Self::default()
        }
    }

    /// A pet populated from a resolved breed record.
    ///
    /// Breed details become the description; weight bounds, lifespan and
    /// origin are copied across. Current weight, colour and age stay unset.
    pub fn from_breed(species: Species, breed: &Breed) -> Self {
        Self {
            species: species.to_string(),
            breed: breed.name.clone(),
            min_weight: breed.weight_low_lbs,
            max_weight: breed.weight_high_lbs,
            average_weight: breed.average_weight,
            description: breed.details.clone(),
            lifespan: breed.lifespan,
            geographic_origin: breed.geographic_origin.clone(),
            ..Self::default()
        }
    }

    /// Start the builder pattern for fluent construction.
    pub fn builder() -> PetBuilder {
        PetBuilder::new()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for [`Pet`].
///
/// Every setter is independent; no cross-field validation is performed
/// (a weight outside `min_weight..=max_weight` is accepted).
///
/// `build` consumes the builder, so a finished builder cannot be built a
/// second time. Clone it before `build` if you need a template to stamp
/// several pets from.
///
/// ```rust
/// use breeders_core::domain::Pet;
///
/// let pet = Pet::builder()
///     .species("dog")
///     .breed("mixed breed")
///     .weight(15)
///     .build()
///     .unwrap();
/// assert_eq!(pet.weight, Some(15));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PetBuilder {
    pet: Pet,
}

impl PetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.pet.species = species.into();
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.pet.breed = breed.into();
        self
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.pet.weight = Some(weight);
        self
    }

    pub fn min_weight(mut self, weight: u32) -> Self {
        self.pet.min_weight = Some(weight);
        self
    }

    pub fn max_weight(mut self, weight: u32) -> Self {
        self.pet.max_weight = Some(weight);
        self
    }

    pub fn average_weight(mut self, weight: u32) -> Self {
        self.pet.average_weight = Some(weight);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.pet.description = description.into();
        self
    }

    pub fn lifespan(mut self, years: u32) -> Self {
        self.pet.lifespan = Some(years);
        self
    }

    pub fn geographic_origin(mut self, origin: impl Into<String>) -> Self {
        self.pet.geographic_origin = origin.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.pet.color = color.into();
        self
    }

    pub fn age(mut self, years: u32) -> Self {
        self.pet.age = Some(years);
        self
    }

    pub fn age_estimated(mut self, estimated: bool) -> Self {
        self.pet.age_estimated = estimated;
        self
    }

    /// Consume builder and construct `Pet`.
    ///
    /// # Errors
    ///
    /// `MissingRequiredField` naming the first missing field. Species is
    /// checked before breed. Whitespace-only values count as missing.
    pub fn build(self) -> Result<Pet, DomainError> {
        if self.pet.species.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "species" });
        }
        if self.pet.breed.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "breed" });
        }
        Ok(self.pet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_only_requested_fields() {
        let pet = Pet::builder()
            .species("dog")
            .breed("mixed breed")
            .weight(15)
            .build()
            .unwrap();

        assert_eq!(pet.species, "dog");
        assert_eq!(pet.breed, "mixed breed");
        assert_eq!(pet.weight, Some(15));
        assert_eq!(pet.min_weight, None);
        assert_eq!(pet.max_weight, None);
        assert_eq!(pet.average_weight, None);
        assert_eq!(pet.lifespan, None);
        assert_eq!(pet.age, None);
        assert!(pet.description.is_empty());
        assert!(pet.color.is_empty());
        assert!(pet.geographic_origin.is_empty());
        assert!(!pet.age_estimated);
    }

    #[test]
    fn builder_full_chain() {
        let pet = Pet::builder()
            .species("cat")
            .breed("mixed breed")
            .weight(15)
            .description("A mixed breed of unknown origin. Probably has some lion.")
            .color("Black and White")
            .age(3)
            .age_estimated(true)
            .build()
            .unwrap();

        assert_eq!(pet.color, "Black and White");
        assert_eq!(pet.age, Some(3));
        assert!(pet.age_estimated);
    }

    #[test]
    fn missing_species_is_reported_first() {
        let err = Pet::builder().build().unwrap_err();
        assert_eq!(err, DomainError::MissingRequiredField { field: "species" });
    }

    #[test]
    fn breed_without_species_names_species() {
        let err = Pet::builder().breed("beagle").build().unwrap_err();
        assert_eq!(err, DomainError::MissingRequiredField { field: "species" });
    }

    #[test]
    fn species_without_breed_names_breed() {
        let err = Pet::builder().species("dog").build().unwrap_err();
        assert_eq!(err, DomainError::MissingRequiredField { field: "breed" });
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let err = Pet::builder().species("dog").breed("   ").build().unwrap_err();
        assert_eq!(err, DomainError::MissingRequiredField { field: "breed" });
    }

    #[test]
    fn no_cross_field_validation() {
        let pet = Pet::builder()
            .species("dog")
            .breed("beagle")
            .min_weight(20)
            .max_weight(30)
            .weight(90)
            .build();
        assert!(pet.is_ok());
    }

    #[test]
    fn simple_factory_sets_species_only() {
        let pet = Pet::new(Species::Cat);
        assert_eq!(pet.species, "cat");
        assert!(pet.breed.is_empty());
    }

    #[test]
    fn from_breed_copies_metadata() {
        let breed = Breed::named("Beagle")
            .weight_range(20, 30)
            .lifespan(13)
            .details("Merry hound")
            .origin("England");
        let pet = Pet::from_breed(Species::Dog, &breed);

        assert_eq!(pet.breed, "Beagle");
        assert_eq!(pet.min_weight, Some(20));
        assert_eq!(pet.max_weight, Some(30));
        assert_eq!(pet.average_weight, Some(25));
        assert_eq!(pet.lifespan, Some(13));
        assert_eq!(pet.description, "Merry hound");
        assert_eq!(pet.geographic_origin, "England");
        assert_eq!(pet.weight, None);
    }

    #[test]
    fn json_omits_unset_fields() {
        let pet = Pet::builder()
            .species("dog")
            .breed("mixed breed")
            .weight(15)
            .build()
            .unwrap();
        let json = serde_json::to_value(&pet).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(obj["species"], "dog");
        assert_eq!(obj["breed"], "mixed breed");
        assert_eq!(obj["weight"], 15);
        assert!(!obj.contains_key("age_estimated"));
        assert!(!obj.contains_key("color"));
    }
}
