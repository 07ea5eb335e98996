//! XML dialect of the remote breed service.
//!
//! ```xml
//! <cat_breed>
//!   <breed>Abyssinian</breed>
//!   <weight_low_lbs>7</weight_low_lbs>
//!   <weight_high_lbs>10</weight_high_lbs>
//!   <average_weight>8</average_weight>
//!   <lifespan>15</lifespan>
//!   <details>...</details>
//!   <alternate_names>Aby</alternate_names>
//!   <geographic_origin>Egypt</geographic_origin>
//! </cat_breed>
//! ```
//!
//! The listing endpoint wraps records in `<cat_breeds>`.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use breeders_core::{
    application::{ApplicationError, RemoteBreedAdapter},
    domain::{Breed, DomainError, Species, WireFormat},
    error::{BreedersError, BreedersResult, Context as _},
};

use super::{BreedTransport, all_path, breed_path};

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "cat_breed")]
struct CatBreedXml {
    breed: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight_low_lbs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight_high_lbs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    average_weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lifespan: Option<u32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    details: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    alternate_names: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    geographic_origin: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "cat_breeds")]
struct CatBreedsXml {
    #[serde(rename = "cat_breed", default)]
    breeds: Vec<CatBreedXml>,
}

impl CatBreedXml {
    fn into_breed(self) -> BreedersResult<Breed> {
        let mut breed = Breed::named(self.breed)
            .details(self.details)
            .alternate_names(self.alternate_names)
            .origin(self.geographic_origin);

        match (self.weight_low_lbs, self.weight_high_lbs) {
            (Some(low), Some(high)) if low > high => {
                return Err(malformed(format!(
                    "weight_low_lbs {low} exceeds weight_high_lbs {high}"
                )));
            }
            (Some(low), Some(high)) => breed = breed.weight_range(low, high),
            (Some(only), None) | (None, Some(only)) => breed = breed.weight_range(only, only),
            (None, None) => {}
        }
        if let Some(average) = self.average_weight {
            breed = breed.average_weight(average);
        }
        if let Some(years) = self.lifespan {
            breed = breed.lifespan(years);
        }
        Ok(breed)
    }

    fn from_breed(breed: &Breed) -> Self {
        Self {
            breed: breed.name.clone(),
            weight_low_lbs: breed.weight_low_lbs,
            weight_high_lbs: breed.weight_high_lbs,
            average_weight: breed.average_weight,
            lifespan: breed.lifespan,
            details: breed.details.clone(),
            alternate_names: breed.alternate_names.clone(),
            geographic_origin: breed.geographic_origin.clone(),
        }
    }
}

fn malformed(reason: impl ToString) -> BreedersError {
    ApplicationError::MalformedPayload {
        format: WireFormat::Xml,
        reason: reason.to_string(),
    }
    .into()
}

// ── Codec ─────────────────────────────────────────────────────────────────────

pub fn decode(payload: &str) -> BreedersResult<Breed> {
    let record: CatBreedXml = quick_xml::de::from_str(payload).map_err(malformed)?;
    record.into_breed()
}

pub fn decode_all(payload: &str) -> BreedersResult<Vec<Breed>> {
    let list: CatBreedsXml = quick_xml::de::from_str(payload).map_err(malformed)?;
    list.breeds.into_iter().map(CatBreedXml::into_breed).collect()
}

pub fn encode(breed: &Breed) -> BreedersResult<String> {
    quick_xml::se::to_string(&CatBreedXml::from_breed(breed))
        .context("encoding cat breed as XML")
}

pub fn encode_all(breeds: &[Breed]) -> BreedersResult<String> {
    let list = CatBreedsXml {
        breeds: breeds.iter().map(CatBreedXml::from_breed).collect(),
    };
    quick_xml::se::to_string(&list).context("encoding cat breeds as XML")
}

// ── Adapter ───────────────────────────────────────────────────────────────────

/// Remote adapter for the XML endpoints.
pub struct XmlBreedAdapter {
    transport: Box<dyn BreedTransport>,
}

impl XmlBreedAdapter {
    pub fn new(transport: Box<dyn BreedTransport>) -> Self {
        Self { transport }
    }
}

impl RemoteBreedAdapter for XmlBreedAdapter {
    #[instrument(skip(self), fields(format = "xml"))]
    fn get_breed_by_name(&self, name: &str) -> BreedersResult<Breed> {
        let payload = self
            .transport
            .get(&breed_path(name, WireFormat::Xml))?
            .ok_or_else(|| DomainError::BreedNotFound {
                species: Species::Cat,
                name: name.to_string(),
            })?;
        decode(&payload)
    }

    #[instrument(skip(self), fields(format = "xml"))]
    fn all_breeds(&self) -> BreedersResult<Vec<Breed>> {
        match self.transport.get(&all_path(WireFormat::Xml))? {
            Some(payload) => decode_all(&payload),
            None => Ok(Vec::new()),
        }
    }

    fn format(&self) -> WireFormat {
        WireFormat::Xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{StaticTransport, json};

    const SIAMESE: &str = "<cat_breed>\
        <breed>Siamese</breed>\
        <weight_low_lbs>8</weight_low_lbs>\
        <weight_high_lbs>15</weight_high_lbs>\
        <lifespan>20</lifespan>\
        <details>Vocal</details>\
        <geographic_origin>Thailand</geographic_origin>\
        </cat_breed>";

    #[test]
    fn decodes_provider_record() {
        let breed = decode(SIAMESE).unwrap();
        assert_eq!(breed.name, "Siamese");
        assert_eq!(breed.weight_low_lbs, Some(8));
        assert_eq!(breed.weight_high_lbs, Some(15));
        assert_eq!(breed.average_weight, Some(11));
        assert_eq!(breed.lifespan, Some(20));
        assert_eq!(breed.details, "Vocal");
        assert!(breed.alternate_names.is_empty());
    }

    #[test]
    fn explicit_average_wins() {
        let breed = decode(
            "<cat_breed><breed>X</breed><weight_low_lbs>4</weight_low_lbs>\
             <weight_high_lbs>10</weight_high_lbs><average_weight>9</average_weight></cat_breed>",
        )
        .unwrap();
        assert_eq!(breed.average_weight, Some(9));
    }

    #[test]
    fn inverted_weights_are_malformed() {
        let err = decode(
            "<cat_breed><breed>X</breed><weight_low_lbs>10</weight_low_lbs>\
             <weight_high_lbs>4</weight_high_lbs></cat_breed>",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BreedersError::Application(ApplicationError::MalformedPayload {
                format: WireFormat::Xml,
                ..
            })
        ));
    }

    #[test]
    fn json_is_malformed_xml() {
        assert!(decode(r#"{"name": "Siamese"}"#).is_err());
    }

    #[test]
    fn decodes_listing() {
        let payload = format!("<cat_breeds>{SIAMESE}<cat_breed><breed>Persian</breed></cat_breed></cat_breeds>");
        let names: Vec<_> = decode_all(&payload)
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, ["Siamese", "Persian"]);
    }

    // Both dialects must normalise to the same record.
    #[test]
    fn json_and_xml_agree() {
        let xml_breed = decode(SIAMESE).unwrap();
        let json_breed = json::decode(
            r#"{"name": "Siamese", "weight": {"imperial": "8 - 15"},
                "life_span": "18 - 20", "origin": "Thailand", "description": "Vocal"}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(xml_breed, json_breed);
    }

    #[test]
    fn encode_then_decode_preserves_breed() {
        let breed = crate::builtin_breeds::cat_breeds().remove(0);
        assert_eq!(decode(&encode(&breed).unwrap()).unwrap(), breed);
    }

    #[test]
    fn adapter_resolves_through_transport() {
        let transport =
            StaticTransport::new().with_response(&breed_path("Siamese", WireFormat::Xml), SIAMESE);
        let adapter = XmlBreedAdapter::new(Box::new(transport));
        assert_eq!(adapter.get_breed_by_name("SIAMESE").unwrap().name, "Siamese");
        assert_eq!(adapter.format(), WireFormat::Xml);
    }

    #[test]
    fn adapter_unknown_breed_is_not_found() {
        let adapter = XmlBreedAdapter::new(Box::new(StaticTransport::new()));
        assert!(adapter.get_breed_by_name("Lion").unwrap_err().is_not_found());
    }

    #[test]
    fn adapter_transport_failure_is_unavailable() {
        let adapter = XmlBreedAdapter::new(Box::new(StaticTransport::unavailable("down")));
        assert!(matches!(
            adapter.all_breeds().unwrap_err(),
            BreedersError::Application(ApplicationError::RemoteUnavailable { .. })
        ));
    }
}
