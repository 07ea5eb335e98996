use crate::domain::{entities::Breed, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_breed(breed: &Breed) -> Result<(), DomainError> {
        breed.validate()
    }
}
