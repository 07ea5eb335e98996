//! In-memory breed store with the built-in catalogue.

use std::sync::{Arc, RwLock};

use breeders_core::{
    application::{ApplicationError, ports::BreedStore},
    domain::{Breed, DomainError, DomainValidator as validator, Species},
    error::BreedersResult,
};

use crate::builtin_breeds;

/// Thread-safe in-memory breed store. Keeps insertion order.
#[derive(Clone)]
pub struct InMemoryBreedStore {
    species: Species,
    inner: Arc<RwLock<Vec<Breed>>>,
}

impl InMemoryBreedStore {
    /// Create a new empty store for dog breeds.
    pub fn new() -> Self {
        Self::for_species(Species::Dog)
    }

    /// Empty store whose not-found errors name `species`.
    pub fn for_species(species: Species) -> Self {
        Self {
            species,
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store with the built-in dog breeds loaded.
    pub fn with_builtin() -> BreedersResult<Self> {
        let store = Self::new();
        for breed in builtin_breeds::dog_breeds() {
            store.insert(breed)?;
        }
        Ok(store)
    }

    /// Append a breed after validating it.
    pub fn insert(&self, breed: Breed) -> BreedersResult<()> {
        validator::validate_breed(&breed)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.push(breed);
        Ok(())
    }

    /// Get the number of breeds.
    pub fn len(&self) -> usize {
        self.inner.read().map(|b| b.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryBreedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BreedStore for InMemoryBreedStore {
    fn all(&self) -> BreedersResult<Vec<Breed>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.clone())
    }

    fn get_breed_by_name(&self, name: &str) -> BreedersResult<Breed> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.iter().find(|b| b.is_named(name)).cloned().ok_or_else(|| {
            DomainError::BreedNotFound {
                species: self.species,
                name: name.to_string(),
            }
            .into()
        })
    }
}
