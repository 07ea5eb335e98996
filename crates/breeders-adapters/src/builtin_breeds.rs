//! Built-in breed catalogue.
//!
//! A small, fixed set of dog and cat breeds that ships with the binary.
//! It backs the in-memory store, seeds fresh SQLite databases, and feeds
//! the offline remote transport so the cat path works without a network.
//!
//! ```no_run
//! use breeders_adapters::builtin_breeds;
//! let dogs = builtin_breeds::dog_breeds();
//! assert!(dogs.iter().any(|b| b.is_named("beagle")));
//! ```

use tracing::{debug, instrument};

use breeders_core::{
    domain::{Breed, WireFormat},
    error::BreedersResult,
};

use crate::remote::{StaticTransport, json, xml};

// ── Catalogue ─────────────────────────────────────────────────────────────────

pub fn dog_breeds() -> Vec<Breed> {
    vec![
        Breed::named("Beagle")
            .weight_range(20, 30)
            .lifespan(15)
            .details("Merry, curious scent hound bred for tracking hare.")
            .alternate_names("English Beagle")
            .origin("United Kingdom"),
        Breed::named("Border Collie")
            .weight_range(30, 55)
            .lifespan(15)
            .details("Energetic herding dog, widely regarded as the most trainable breed.")
            .origin("Scotland"),
        Breed::named("German Shepherd")
            .weight_range(50, 90)
            .lifespan(13)
            .details("Confident working dog used in police and service roles.")
            .alternate_names("Alsatian")
            .origin("Germany"),
        Breed::named("Labrador Retriever")
            .weight_range(55, 80)
            .lifespan(12)
            .details("Friendly, outgoing retriever and a popular family companion.")
            .alternate_names("Labrador, Lab")
            .origin("Canada"),
        Breed::named("Shiba Inu")
            .weight_range(17, 23)
            .lifespan(16)
            .details("Small, alert spitz-type dog with a bold temperament.")
            .origin("Japan"),
    ]
}

pub fn cat_breeds() -> Vec<Breed> {
    vec![
        Breed::named("Abyssinian")
            .weight_range(7, 10)
            .lifespan(15)
            .details("Active, playful cat with a distinctive ticked coat.")
            .alternate_names("Aby")
            .origin("Egypt"),
        Breed::named("Maine Coon")
            .weight_range(10, 25)
            .lifespan(15)
            .details("Large, gentle longhair with a thick water-resistant coat.")
            .alternate_names("Coon Cat")
            .origin("United States"),
        Breed::named("Persian")
            .weight_range(7, 12)
            .lifespan(17)
            .details("Quiet, affectionate longhair with a round face.")
            .origin("Iran"),
        Breed::named("Siamese")
            .weight_range(8, 15)
            .lifespan(20)
            .details("Vocal, social cat with a pointed coat and blue eyes.")
            .alternate_names("Meezer")
            .origin("Thailand"),
    ]
}

// ── Offline provider ──────────────────────────────────────────────────────────

/// A transport that serves the built-in cat catalogue in `format`, laid out
/// on the same endpoints the remote breed service uses.
#[instrument]
pub fn cat_transport(format: WireFormat) -> BreedersResult<StaticTransport> {
    let breeds = cat_breeds();

    let encode_all = |breeds: &[Breed]| match format {
        WireFormat::Json => json::encode_all(breeds),
        WireFormat::Xml => xml::encode_all(breeds),
    };
    let encode_one = |breed: &Breed| match format {
        WireFormat::Json => json::encode(breed),
        WireFormat::Xml => xml::encode(breed),
    };

    let mut transport =
        StaticTransport::new().with_response(&crate::remote::all_path(format), encode_all(&breeds)?);
    for breed in &breeds {
        transport = transport.with_response(
            &crate::remote::breed_path(&breed.name, format),
            encode_one(breed)?,
        );
    }

    debug!(count = breeds.len(), "Offline cat catalogue prepared");
    Ok(transport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use breeders_core::domain::DomainValidator;

    #[test]
    fn catalogue_breeds_are_valid() {
        for breed in dog_breeds().into_iter().chain(cat_breeds()) {
            assert!(
                DomainValidator::validate_breed(&breed).is_ok(),
                "{} is invalid",
                breed.name
            );
        }
    }

    #[test]
    fn catalogue_has_both_species() {
        assert!(!dog_breeds().is_empty());
        assert!(!cat_breeds().is_empty());
    }

    #[test]
    fn cat_transport_serves_every_breed_in_both_formats() {
        for format in [WireFormat::Json, WireFormat::Xml] {
            let transport = cat_transport(format).unwrap();
            for breed in cat_breeds() {
                assert!(transport.contains(&crate::remote::breed_path(&breed.name, format)));
            }
        }
    }
}
