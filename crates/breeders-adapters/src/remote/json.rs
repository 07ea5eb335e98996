//! JSON dialect of the remote breed service.
//!
//! Records look like:
//!
//! ```json
//! {
//!   "name": "Abyssinian",
//!   "weight": { "imperial": "7 - 10" },
//!   "average_weight": 9,
//!   "life_span": "14 - 15",
//!   "origin": "Egypt",
//!   "description": "...",
//!   "alt_names": "Aby"
//! }
//! ```
//!
//! Ranges become low/high bounds; lifespan keeps the upper bound.
//! `average_weight` is optional: an explicit value wins, otherwise the
//! midpoint of the weight range is used.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use breeders_core::{
    application::{ApplicationError, RemoteBreedAdapter},
    domain::{Breed, DomainError, Species, WireFormat},
    error::{BreedersError, BreedersResult, Context as _},
};

use super::{BreedTransport, all_path, breed_path, range};

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Serialize, Deserialize)]
struct CatBreedJson {
    name: String,
    #[serde(default)]
    weight: WeightJson,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    average_weight: Option<u32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    life_span: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    origin: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    alt_names: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct WeightJson {
    #[serde(default)]
    imperial: String,
}

impl CatBreedJson {
    fn into_breed(self) -> BreedersResult<Breed> {
        let weight = range::parse(&self.weight.imperial).map_err(malformed)?;
        let life_span = range::parse(&self.life_span).map_err(malformed)?;

        let mut breed = Breed::named(self.name)
            .details(self.description)
            .alternate_names(self.alt_names)
            .origin(self.origin);
        if let Some((low, high)) = weight {
            breed = breed.weight_range(low, high);
        }
        if let Some(average) = self.average_weight {
            breed = breed.average_weight(average);
        }
        if let Some((_, high)) = life_span {
            breed = breed.lifespan(high);
        }
        Ok(breed)
    }

    fn from_breed(breed: &Breed) -> Self {
        Self {
            name: breed.name.clone(),
            weight: WeightJson {
                imperial: range::format(breed.weight_low_lbs, breed.weight_high_lbs),
            },
            average_weight: breed.average_weight,
            life_span: breed.lifespan.map(|y| y.to_string()).unwrap_or_default(),
            origin: breed.geographic_origin.clone(),
            description: breed.details.clone(),
            alt_names: breed.alternate_names.clone(),
        }
    }
}

fn malformed(reason: impl ToString) -> BreedersError {
    ApplicationError::MalformedPayload {
        format: WireFormat::Json,
        reason: reason.to_string(),
    }
    .into()
}

// ── Codec ─────────────────────────────────────────────────────────────────────

/// Decode a single-breed payload. A `null` body means "no match".
pub fn decode(payload: &str) -> BreedersResult<Option<Breed>> {
    let record: Option<CatBreedJson> = serde_json::from_str(payload).map_err(malformed)?;
    record.map(CatBreedJson::into_breed).transpose()
}

pub fn decode_all(payload: &str) -> BreedersResult<Vec<Breed>> {
    let records: Vec<CatBreedJson> = serde_json::from_str(payload).map_err(malformed)?;
    records.into_iter().map(CatBreedJson::into_breed).collect()
}

pub fn encode(breed: &Breed) -> BreedersResult<String> {
    serde_json::to_string(&CatBreedJson::from_breed(breed))
        .context("encoding cat breed as JSON")
}

pub fn encode_all(breeds: &[Breed]) -> BreedersResult<String> {
    let records: Vec<_> = breeds.iter().map(CatBreedJson::from_breed).collect();
    serde_json::to_string(&records).context("encoding cat breeds as JSON")
}

// ── Adapter ───────────────────────────────────────────────────────────────────

/// Remote adapter for the JSON endpoints.
pub struct JsonBreedAdapter {
    transport: Box<dyn BreedTransport>,
}

impl JsonBreedAdapter {
    pub fn new(transport: Box<dyn BreedTransport>) -> Self {
        Self { transport }
    }
}

impl RemoteBreedAdapter for JsonBreedAdapter {
    #[instrument(skip(self), fields(format = "json"))]
    fn get_breed_by_name(&self, name: &str) -> BreedersResult<Breed> {
        let not_found = || -> BreedersError {
            DomainError::BreedNotFound {
                species: Species::Cat,
                name: name.to_string(),
            }
            .into()
        };

        let payload = self
            .transport
            .get(&breed_path(name, WireFormat::Json))?
            .ok_or_else(not_found)?;
        decode(&payload)?.ok_or_else(not_found)
    }

    #[instrument(skip(self), fields(format = "json"))]
    fn all_breeds(&self) -> BreedersResult<Vec<Breed>> {
        match self.transport.get(&all_path(WireFormat::Json))? {
            Some(payload) => decode_all(&payload),
            None => Ok(Vec::new()),
        }
    }

    fn format(&self) -> WireFormat {
        WireFormat::Json
    }
}
