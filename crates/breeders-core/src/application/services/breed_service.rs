//! Breed Service - listing the catalogue for a species.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::context::SharedContext,
    domain::{Breed, Species},
    error::BreedersResult,
};

/// Lists breeds through the same per-species lookup paths the factories use.
pub struct BreedService {
    context: Arc<SharedContext>,
}

impl BreedService {
    pub fn new(context: Arc<SharedContext>) -> Self {
        Self { context }
    }

    /// Every breed known for `species`.
    ///
    /// Dogs come from the local store in storage order; cats from the
    /// remote provider in the order it reports them.
    #[instrument(skip(self), fields(species = %species))]
    pub fn all_breeds(&self, species: Species) -> BreedersResult<Vec<Breed>> {
        let breeds = match species {
            Species::Dog => self.context.dog_breeds().all()?,
            Species::Cat => self.context.cat_breeds()?.all_breeds()?,
        };
        debug!(count = breeds.len(), source = %species.breed_source(), "Breeds listed");
        Ok(breeds)
    }
}
