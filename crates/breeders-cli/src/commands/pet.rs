//! `breeders pet` - create pets through a factory, the builder, or the
//! simple constructor.

use serde::Serialize;
use tracing::{info, instrument};

use breeders_core::{
    application::{ContextCell, PetService},
    domain::{Describe, Pet, PetBuilder},
    error::BreedersError,
};

use crate::{
    cli::{PetBuildArgs, PetCommands, PetNewArgs, PetSimpleArgs},
    config::AppConfig,
    context::context,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct pet subcommand.
pub fn execute(
    cmd: PetCommands,
    cell: &ContextCell,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        PetCommands::New(args) => new_pet(args, cell, config, output),
        PetCommands::Build(args) => build_pet(args, output),
        PetCommands::Simple(args) => simple_pet(args, output),
    }
}

/// What gets printed for one pet.
#[derive(Debug, Serialize)]
struct PetReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(flatten)]
    pet: &'a Pet,
}

#[instrument(skip_all, fields(species = %args.species))]
fn new_pet(
    args: PetNewArgs,
    cell: &ContextCell,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let service = PetService::new(context(cell, config)?);

    let animal = match args.breed.as_deref() {
        Some(breed) => service
            .create_with_breed_from_factory(&args.species, breed)
            .with_cli_context(|| format!("creating a {} of breed '{}'", args.species, breed))?,
        None => service
            .create_from_factory(&args.species)
            .with_cli_context(|| format!("creating a {}", args.species))?,
    };

    render(
        output,
        &PetReport {
            summary: Some(animal.describe()),
            pet: animal.pet(),
        },
    )
}

#[instrument(skip_all)]
fn build_pet(args: PetBuildArgs, output: &OutputManager) -> CliResult<()> {
    let pet = builder_from(args)
        .build()
        .map_err(BreedersError::from)
        .with_cli_context(|| "building a pet")?;

    info!(species = %pet.species, breed = %pet.breed, "Pet built");
    render(
        output,
        &PetReport {
            summary: None,
            pet: &pet,
        },
    )
}

#[instrument(skip_all, fields(species = %args.species))]
fn simple_pet(args: PetSimpleArgs, output: &OutputManager) -> CliResult<()> {
    let pet = PetService::create_simple(&args.species)
        .with_cli_context(|| format!("creating a simple {}", args.species))?;

    render(
        output,
        &PetReport {
            summary: None,
            pet: &pet,
        },
    )
}

/// Only flags that were actually given reach the builder.
fn builder_from(args: PetBuildArgs) -> PetBuilder {
    let mut builder = Pet::builder().age_estimated(args.age_estimated);

    if let Some(species) = args.species {
        builder = builder.species(species);
    }
    if let Some(breed) = args.breed {
        builder = builder.breed(breed);
    }
    if let Some(weight) = args.weight {
        builder = builder.weight(weight);
    }
    if let Some(weight) = args.min_weight {
        builder = builder.min_weight(weight);
    }
    if let Some(weight) = args.max_weight {
        builder = builder.max_weight(weight);
    }
    if let Some(weight) = args.average_weight {
        builder = builder.average_weight(weight);
    }
    if let Some(description) = args.description {
        builder = builder.description(description);
    }
    if let Some(years) = args.lifespan {
        builder = builder.lifespan(years);
    }
    if let Some(origin) = args.geographic_origin {
        builder = builder.geographic_origin(origin);
    }
    if let Some(color) = args.color {
        builder = builder.color(color);
    }
    if let Some(years) = args.age {
        builder = builder.age(years);
    }

    builder
}

fn render(output: &OutputManager, report: &PetReport<'_>) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    let pet = report.pet;
    if let Some(summary) = &report.summary {
        output.header(summary)?;
    }
    output.field("species", &pet.species)?;
    output.field("breed", &pet.breed)?;
    output.field("weight", &lbs(pet.weight))?;
    output.field("weight range", &weight_range(pet))?;
    output.field("average weight", &lbs(pet.average_weight))?;
    output.field("lifespan", &years(pet.lifespan))?;
    output.field("origin", &pet.geographic_origin)?;
    output.field("color", &pet.color)?;
    output.field("age", &age(pet))?;
    output.field("description", &pet.description)?;
    Ok(())
}

fn lbs(value: Option<u32>) -> String {
    value.map(|v| format!("{v} lbs")).unwrap_or_default()
}

fn years(value: Option<u32>) -> String {
    value.map(|v| format!("{v} years")).unwrap_or_default()
}

fn weight_range(pet: &Pet) -> String {
    match (pet.min_weight, pet.max_weight) {
        (Some(low), Some(high)) => format!("{low}-{high} lbs"),
        (Some(low), None) => format!("from {low} lbs"),
        (None, Some(high)) => format!("up to {high} lbs"),
        (None, None) => String::new(),
    }
}

fn age(pet: &Pet) -> String {
    match pet.age {
        Some(age) if pet.age_estimated => format!("~{age} years (estimated)"),
        Some(age) => format!("{age} years"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breeders_core::domain::DomainError;

    fn build_args() -> PetBuildArgs {
        PetBuildArgs {
            species: None,
            breed: None,
            weight: None,
            min_weight: None,
            max_weight: None,
            average_weight: None,
            description: None,
            lifespan: None,
            geographic_origin: None,
            color: None,
            age: None,
            age_estimated: false,
        }
    }

    #[test]
    fn builder_from_only_sets_given_flags() {
        let pet = builder_from(PetBuildArgs {
            species: Some("dog".into()),
            breed: Some("mixed breed".into()),
            weight: Some(15),
            ..build_args()
        })
        .build()
        .unwrap();

        assert_eq!(pet.weight, Some(15));
        assert_eq!(pet.min_weight, None);
        assert!(pet.color.is_empty());
        assert!(!pet.age_estimated);
    }

    #[test]
    fn builder_from_reports_missing_species_first() {
        let err = builder_from(PetBuildArgs {
            breed: Some("Pug".into()),
            ..build_args()
        })
        .build()
        .unwrap_err();
        assert_eq!(err, DomainError::MissingRequiredField { field: "species" });
    }

    #[test]
    fn weight_range_formats_partial_bounds() {
        let mut pet = Pet::default();
        assert_eq!(weight_range(&pet), "");
        pet.min_weight = Some(7);
        assert_eq!(weight_range(&pet), "from 7 lbs");
        pet.max_weight = Some(10);
        assert_eq!(weight_range(&pet), "7-10 lbs");
    }

    #[test]
    fn estimated_age_is_marked() {
        let pet = Pet {
            age: Some(3),
            age_estimated: true,
            ..Pet::default()
        };
        assert_eq!(age(&pet), "~3 years (estimated)");
    }

    #[test]
    fn report_flattens_pet_fields() {
        let pet = Pet {
            species: "dog".into(),
            breed: "Beagle".into(),
            ..Pet::default()
        };
        let json = serde_json::to_value(PetReport {
            summary: Some("This animal is a Beagle".into()),
            pet: &pet,
        })
        .unwrap();
        assert_eq!(json["summary"], "This animal is a Beagle");
        assert_eq!(json["breed"], "Beagle");
        assert!(json.get("weight").is_none());
    }
}
