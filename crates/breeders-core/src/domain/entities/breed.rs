//! The `Breed` value object.
//!
//! A breed is owned by whichever source resolved it (the local store or a
//! remote adapter) and is never mutated after it is handed out. Adapters
//! normalise their native payloads into this one shape, so two breeds
//! compare equal field-for-field regardless of the wire format they came from.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A named breed with optional descriptive metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Breed {
    /// Row identifier; only the local store assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(rename = "breed")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_low_lbs: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_high_lbs: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_weight: Option<u32>,

    /// Expected lifespan in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifespan: Option<u32>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub details: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alternate_names: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub geographic_origin: String,
}

impl Breed {
    /// Start a breed with only its name set.
    ///
    /// The remaining setters consume and return `self`, so records read
    /// naturally in adapters and tests:
    ///
    /// ```rust
    /// use breeders_core::domain::Breed;
    ///
    /// let breed = Breed::named("Abyssinian")
    ///     .weight_range(7, 10)
    ///     .lifespan(15)
    ///     .origin("Egypt");
    /// assert_eq!(breed.average_weight, Some(8));
    /// ```
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set low/high weight bounds and derive the average when none is set.
    pub fn weight_range(mut self, low: u32, high: u32) -> Self {
        self.weight_low_lbs = Some(low);
        self.weight_high_lbs = Some(high);
        if self.average_weight.is_none() {
            self.average_weight = Some(midpoint(low, high));
        }
        self
    }

    pub fn average_weight(mut self, average: u32) -> Self {
        self.average_weight = Some(average);
        self
    }

    pub fn lifespan(mut self, years: u32) -> Self {
        self.lifespan = Some(years);
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn alternate_names(mut self, names: impl Into<String>) -> Self {
        self.alternate_names = names.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.geographic_origin = origin.into();
        self
    }

    /// A breed must at least carry a name.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidBreed("breed name cannot be empty".into()));
        }
        if let (Some(low), Some(high)) = (self.weight_low_lbs, self.weight_high_lbs) {
            if low > high {
                return Err(DomainError::InvalidBreed(format!(
                    "'{}' has weight_low_lbs {} above weight_high_lbs {}",
                    self.name, low, high
                )));
            }
        }
        Ok(())
    }

    /// Case-insensitive name comparison used by lookups.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

/// Integer midpoint of a weight range, rounding down.
pub fn midpoint(low: u32, high: u32) -> u32 {
    low + (high.saturating_sub(low)) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_breed_has_no_metadata() {
        let breed = Breed::named("Beagle");
        assert_eq!(breed.name, "Beagle");
        assert_eq!(breed.id, None);
        assert_eq!(breed.weight_low_lbs, None);
        assert!(breed.details.is_empty());
    }

    #[test]
    fn weight_range_derives_average() {
        let breed = Breed::named("Beagle").weight_range(20, 30);
        assert_eq!(breed.average_weight, Some(25));
    }

    #[test]
    fn explicit_average_is_kept() {
        let breed = Breed::named("Beagle").average_weight(22).weight_range(20, 30);
        assert_eq!(breed.average_weight, Some(22));
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(Breed::named("  ").validate().is_err());
    }

    #[test]
    fn inverted_weight_range_is_invalid() {
        let breed = Breed {
            weight_low_lbs: Some(30),
            weight_high_lbs: Some(20),
            ..Breed::named("Beagle")
        };
        assert!(matches!(breed.validate(), Err(DomainError::InvalidBreed(_))));
    }

    #[test]
    fn name_matching_ignores_case_and_padding() {
        let breed = Breed::named("German Shepherd");
        assert!(breed.is_named(" german shepherd "));
        assert!(!breed.is_named("shepherd"));
    }
}
