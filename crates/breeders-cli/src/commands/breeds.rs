//! `breeders breeds` - list the catalogue for a species.

use tracing::instrument;

use breeders_core::{
    application::{BreedService, ContextCell},
    domain::{Breed, Species},
    error::BreedersError,
};

use crate::{
    cli::BreedsArgs,
    config::AppConfig,
    context::context,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(species = %args.species))]
pub fn execute(
    args: BreedsArgs,
    cell: &ContextCell,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let species: Species = args.species.parse().map_err(BreedersError::from)?;

    let service = BreedService::new(context(cell, config)?);
    let breeds = service
        .all_breeds(species)
        .with_cli_context(|| format!("listing {species} breeds"))?;

    if output.is_json() {
        output.json(&breeds)?;
        return Ok(());
    }

    if breeds.is_empty() {
        output.warning(&format!("No {species} breeds available"))?;
        return Ok(());
    }

    output.header(&format!("{} {} breeds", breeds.len(), species))?;
    for breed in &breeds {
        output.print(&breed_line(breed))?;
    }
    Ok(())
}

/// `name (low-high lbs, N years, origin)` with absent parts left out.
fn breed_line(breed: &Breed) -> String {
    let mut parts = Vec::new();
    if let (Some(low), Some(high)) = (breed.weight_low_lbs, breed.weight_high_lbs) {
        parts.push(format!("{low}-{high} lbs"));
    }
    if let Some(years) = breed.lifespan {
        parts.push(format!("{years} years"));
    }
    if !breed.geographic_origin.is_empty() {
        parts.push(breed.geographic_origin.clone());
    }

    if parts.is_empty() {
        format!("  {}", breed.name)
    } else {
        format!("  {} ({})", breed.name, parts.join(", "))
    }
}
