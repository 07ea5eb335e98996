//! Pet Service - species dispatch for the factory paths.
//!
//! Callers hand in a raw species tag; the service parses it into the closed
//! [`Species`] set and delegates to the matching [`PetFactory`].

use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{
        context::SharedContext,
        services::pet_factory::{PetFactory, factory_for},
    },
    domain::{Animal, Pet, Species},
    error::BreedersResult,
};

/// Entry point for pet creation.
pub struct PetService {
    context: Arc<SharedContext>,
}

impl PetService {
    pub fn new(context: Arc<SharedContext>) -> Self {
        Self { context }
    }

    /// A pet of `species` with no breed data.
    ///
    /// # Errors
    ///
    /// `InvalidSpecies` for any tag outside the supported set.
    #[instrument(skip(self))]
    pub fn create_from_factory(&self, species: &str) -> BreedersResult<Animal> {
        let factory = self.factory(species)?;
        let animal = factory.new_pet();
        info!(species = %factory.species(), "Pet created");
        Ok(animal)
    }

    /// A pet of `species` carrying the named breed.
    ///
    /// # Errors
    ///
    /// `InvalidSpecies` for an unsupported tag, otherwise whatever the
    /// species' lookup path reports.
    #[instrument(skip(self))]
    pub fn create_with_breed_from_factory(
        &self,
        species: &str,
        breed: &str,
    ) -> BreedersResult<Animal> {
        let factory = self.factory(species)?;
        let animal = factory.new_pet_with_breed(breed)?;
        info!(
            species = %factory.species(),
            breed = %animal.pet().breed,
            "Pet created with breed"
        );
        Ok(animal)
    }

    /// Simple factory: a bare pet for a species. Needs no context, so it
    /// works before (or without) the shared context being initialised.
    pub fn create_simple(species: &str) -> BreedersResult<Pet> {
        let species: Species = species.parse()?;
        Ok(Pet::new(species))
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn factory(&self, species: &str) -> BreedersResult<Box<dyn PetFactory>> {
        let species: Species = species.parse()?;
        Ok(factory_for(species, Arc::clone(&self.context)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::{MockBreedStore, MockRemoteBreedAdapter},
        domain::{Breed, DomainError, WireFormat},
        error::BreedersError,
    };

    fn service() -> PetService {
        let mut store = MockBreedStore::new();
        store.expect_get_breed_by_name().returning(|name| {
            if name.eq_ignore_ascii_case("beagle") {
                Ok(Breed::named("Beagle").weight_range(20, 30).lifespan(15))
            } else {
                Err(DomainError::BreedNotFound {
                    species: Species::Dog,
                    name: name.to_string(),
                }
                .into())
            }
        });

        let mut remote = MockRemoteBreedAdapter::new();
        remote
            .expect_get_breed_by_name()
            .returning(|name| Ok(Breed::named(name).origin("Egypt")));
        remote.expect_format().return_const(WireFormat::Xml);

        let ctx = SharedContext::new(Arc::new(store)).with_remote(Arc::new(remote));
        PetService::new(Arc::new(ctx))
    }

    #[test]
    fn create_from_factory_dog() {
        let animal = service().create_from_factory("dog").unwrap();
        assert_eq!(animal.species(), Species::Dog);
        assert!(animal.pet().breed.is_empty());
    }

    #[test]
    fn create_from_factory_never_touches_breed_sources() {
        // no expectations: any store or remote call panics
        let ctx = SharedContext::new(Arc::new(MockBreedStore::new()))
            .with_remote(Arc::new(MockRemoteBreedAdapter::new()));
        let service = PetService::new(Arc::new(ctx));

        assert_eq!(
            service.create_from_factory("dog").unwrap().species(),
            Species::Dog
        );
        assert_eq!(
            service.create_from_factory("cat").unwrap().species(),
            Species::Cat
        );
    }

    #[test]
    fn create_from_factory_accepts_plural_tag() {
        let animal = service().create_from_factory("cats").unwrap();
        assert_eq!(animal.species(), Species::Cat);
    }

    #[test]
    fn create_from_factory_rejects_unknown_species() {
        let err = service().create_from_factory("fish").unwrap_err();
        assert_eq!(
            err,
            BreedersError::Domain(DomainError::InvalidSpecies {
                species: "fish".into()
            })
        );
    }

    #[test]
    fn create_with_breed_dog_populates_breed_fields() {
        let animal = service()
            .create_with_breed_from_factory("dog", "beagle")
            .unwrap();
        let pet = animal.pet();
        assert_eq!(pet.breed, "Beagle");
        assert_eq!(pet.min_weight, Some(20));
        assert_eq!(pet.max_weight, Some(30));
        assert_eq!(pet.lifespan, Some(15));
    }

    #[test]
    fn create_with_breed_cat_uses_remote() {
        let animal = service()
            .create_with_breed_from_factory("cat", "Abyssinian")
            .unwrap();
        assert_eq!(animal.species(), Species::Cat);
        assert_eq!(animal.pet().geographic_origin, "Egypt");
    }

    #[test]
    fn create_with_breed_unknown_dog_breed_is_not_found() {
        let err = service()
            .create_with_breed_from_factory("dog", "Wolf")
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn create_with_breed_rejects_species_before_lookup() {
        let err = service()
            .create_with_breed_from_factory("fish", "Goldie")
            .unwrap_err();
        assert!(matches!(
            err,
            BreedersError::Domain(DomainError::InvalidSpecies { .. })
        ));
    }

    #[test]
    fn create_simple_returns_bare_pet() {
        let pet = PetService::create_simple("Dog").unwrap();
        assert_eq!(pet.species, "dog");
        assert!(pet.breed.is_empty());
        assert!(PetService::create_simple("bird").is_err());
    }
}
