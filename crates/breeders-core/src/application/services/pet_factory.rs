//! Species-specific pet factories (abstract factory).
//!
//! Each factory knows one species and the one breed-lookup path that is
//! valid for it:
//!
//! | Factory      | Species | Breed source                     |
//! |--------------|---------|----------------------------------|
//! | `DogFactory` | dog     | `BreedStore` (local)             |
//! | `CatFactory` | cat     | `RemoteBreedAdapter` (remote)    |
//!
//! Both read their lookup capability from the injected [`SharedContext`].

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::context::SharedContext,
    domain::{Animal, CatFromFactory, DogFromFactory, Pet, Species},
    error::BreedersResult,
};

/// Construction strategy for one species.
pub trait PetFactory: Send + Sync {
    /// The species this factory produces.
    fn species(&self) -> Species;

    /// A pet with default, empty breed data. Never fails.
    fn new_pet(&self) -> Animal;

    /// A pet carrying the named breed, resolved through this species'
    /// lookup path.
    ///
    /// # Errors
    ///
    /// - `BreedNotFound` when the name does not resolve
    /// - `LookupUnavailable` / `RemoteUnavailable` when the source fails
    /// - `AdapterNotConfigured` when the source is missing from the context
    fn new_pet_with_breed(&self, breed: &str) -> BreedersResult<Animal>;
}

/// Builds dogs; breeds come from the local store.
pub struct DogFactory {
    context: Arc<SharedContext>,
}

impl DogFactory {
    pub fn new(context: Arc<SharedContext>) -> Self {
        Self { context }
    }
}

impl PetFactory for DogFactory {
    fn species(&self) -> Species {
        Species::Dog
    }

    fn new_pet(&self) -> Animal {
        DogFromFactory::new(Pet::new(Species::Dog)).into()
    }

    #[instrument(skip(self), fields(species = "dog"))]
    fn new_pet_with_breed(&self, breed: &str) -> BreedersResult<Animal> {
        let record = self.context.dog_breeds().get_breed_by_name(breed)?;
        debug!(breed = %record.name, "Dog breed resolved from local store");
        Ok(DogFromFactory::with_breed(record).into())
    }
}

/// Builds cats; breeds come from the remote provider.
///
/// Remote failures propagate unchanged, the same way the dog path does.
pub struct CatFactory {
    context: Arc<SharedContext>,
}

impl CatFactory {
    pub fn new(context: Arc<SharedContext>) -> Self {
        Self { context }
    }
}

impl PetFactory for CatFactory {
    fn species(&self) -> Species {
        Species::Cat
    }

    fn new_pet(&self) -> Animal {
        CatFromFactory::new(Pet::new(Species::Cat)).into()
    }

    #[instrument(skip(self), fields(species = "cat"))]
    fn new_pet_with_breed(&self, breed: &str) -> BreedersResult<Animal> {
        let remote = self.context.cat_breeds()?;
        let record = remote.get_breed_by_name(breed)?;
        debug!(
            breed = %record.name,
            format = %remote.format(),
            "Cat breed resolved from remote provider"
        );
        Ok(CatFromFactory::with_breed(record).into())
    }
}

/// The factory for a species. Exhaustive over the closed species set.
pub fn factory_for(species: Species, context: Arc<SharedContext>) -> Box<dyn PetFactory> {
    match species {
        Species::Dog => Box::new(DogFactory::new(context)),
        Species::Cat => Box::new(CatFactory::new(context)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{
            ApplicationError,
            ports::{MockBreedStore, MockRemoteBreedAdapter},
        },
        domain::{Breed, Describe, DomainError, WireFormat},
        error::BreedersError,
    };
    use mockall::predicate::eq;

    fn context(store: MockBreedStore, remote: Option<MockRemoteBreedAdapter>) -> Arc<SharedContext> {
        let ctx = SharedContext::new(Arc::new(store));
        Arc::new(match remote {
            Some(r) => ctx.with_remote(Arc::new(r)),
            None => ctx,
        })
    }

    #[test]
    fn dog_new_pet_has_species_and_no_breed() {
        let factory = DogFactory::new(context(MockBreedStore::new(), None));
        let animal = factory.new_pet();
        assert_eq!(animal.species(), Species::Dog);
        assert_eq!(animal.pet().species, "dog");
        assert!(animal.pet().breed.is_empty());
        assert!(animal.breed().is_none());
    }

    #[test]
    fn dog_with_breed_uses_local_store() {
        let mut store = MockBreedStore::new();
        store
            .expect_get_breed_by_name()
            .with(eq("Beagle"))
            .times(1)
            .returning(|_| Ok(Breed::named("Beagle").weight_range(20, 30)));

        let factory = DogFactory::new(context(store, None));
        let animal = factory.new_pet_with_breed("Beagle").unwrap();

        assert_eq!(animal.pet().breed, "Beagle");
        assert_eq!(animal.pet().average_weight, Some(25));
        assert_eq!(animal.describe(), "This animal is a Beagle");
    }

    #[test]
    fn dog_unknown_breed_propagates_not_found() {
        let mut store = MockBreedStore::new();
        store.expect_get_breed_by_name().returning(|name| {
            Err(DomainError::BreedNotFound {
                species: Species::Dog,
                name: name.to_string(),
            }
            .into())
        });

        let factory = DogFactory::new(context(store, None));
        let err = factory.new_pet_with_breed("Wolf").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn dog_path_never_touches_remote() {
        let mut store = MockBreedStore::new();
        store
            .expect_get_breed_by_name()
            .returning(|_| Ok(Breed::named("Beagle")));
        let mut remote = MockRemoteBreedAdapter::new();
        remote.expect_get_breed_by_name().never();

        let factory = DogFactory::new(context(store, Some(remote)));
        assert!(factory.new_pet_with_breed("Beagle").is_ok());
    }

    #[test]
    fn cat_with_breed_uses_remote() {
        let mut remote = MockRemoteBreedAdapter::new();
        remote
            .expect_get_breed_by_name()
            .with(eq("Abyssinian"))
            .times(1)
            .returning(|_| Ok(Breed::named("Abyssinian").origin("Egypt")));
        remote.expect_format().return_const(WireFormat::Json);
        let mut store = MockBreedStore::new();
        store.expect_get_breed_by_name().never();

        let factory = CatFactory::new(context(store, Some(remote)));
        let animal = factory.new_pet_with_breed("Abyssinian").unwrap();

        assert_eq!(animal.species(), Species::Cat);
        assert_eq!(animal.pet().geographic_origin, "Egypt");
    }

    // The cat path must surface remote failures rather than hand back a cat
    // with an empty breed.
    #[test]
    fn cat_remote_failure_propagates() {
        let mut remote = MockRemoteBreedAdapter::new();
        remote.expect_get_breed_by_name().returning(|_| {
            Err(ApplicationError::RemoteUnavailable {
                reason: "connection refused".into(),
            }
            .into())
        });

        let factory = CatFactory::new(context(MockBreedStore::new(), Some(remote)));
        let err = factory.new_pet_with_breed("Abyssinian").unwrap_err();
        assert!(matches!(
            err,
            BreedersError::Application(ApplicationError::RemoteUnavailable { .. })
        ));
    }

    #[test]
    fn cat_not_found_propagates() {
        let mut remote = MockRemoteBreedAdapter::new();
        remote.expect_get_breed_by_name().returning(|name| {
            Err(DomainError::BreedNotFound {
                species: Species::Cat,
                name: name.to_string(),
            }
            .into())
        });

        let factory = CatFactory::new(context(MockBreedStore::new(), Some(remote)));
        assert!(factory.new_pet_with_breed("Lion").unwrap_err().is_not_found());
    }

    #[test]
    fn cat_without_remote_is_not_configured() {
        let factory = CatFactory::new(context(MockBreedStore::new(), None));
        let err = factory.new_pet_with_breed("Abyssinian").unwrap_err();
        assert!(matches!(
            err,
            BreedersError::Application(ApplicationError::AdapterNotConfigured { .. })
        ));
    }

    #[test]
    fn factory_for_matches_species() {
        let ctx = context(MockBreedStore::new(), None);
        for species in Species::ALL {
            let factory = factory_for(species, Arc::clone(&ctx));
            assert_eq!(factory.species(), species);
            assert_eq!(factory.new_pet().species(), species);
        }
    }
}
