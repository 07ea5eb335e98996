//! Domain value objects: Species.
//!
//! # Design
//!
//! `Species` is a closed set. Each variant maps to exactly one breed-lookup
//! path (dogs from the local store, cats from the remote provider); see
//! `Species::breed_source`.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a factory in `application/services/pet_factory.rs`
//! 4. The compiler points at every exhaustive match that still needs an arm

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Species ──────────────────────────────────────────────────────────────────

/// A supported kind of pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    /// Every supported species, in display order.
    pub const ALL: [Species; 2] = [Species::Dog, Species::Cat];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
        }
    }

    /// Where breed records for this species come from.
    pub const fn breed_source(&self) -> BreedSource {
        match self {
            Self::Dog => BreedSource::LocalStore,
            Self::Cat => BreedSource::RemoteProvider,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dog" | "dogs" => Ok(Self::Dog),
            "cat" | "cats" => Ok(Self::Cat),
            _ => Err(DomainError::InvalidSpecies {
                species: s.to_string(),
            }),
        }
    }
}

// ── BreedSource ──────────────────────────────────────────────────────────────

/// The backing source a species resolves its breeds against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreedSource {
    /// Durable relational store owned by this deployment.
    LocalStore,
    /// External breed-information service behind an adapter.
    RemoteProvider,
}

impl fmt::Display for BreedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalStore => f.write_str("local store"),
            Self::RemoteProvider => f.write_str("remote provider"),
        }
    }
}

// ── WireFormat ───────────────────────────────────────────────────────────────

/// Encoding spoken by the remote breed provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    #[default]
    Json,
    Xml,
}

impl WireFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WireFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            _ => Err(DomainError::UnknownWireFormat {
                format: s.to_string(),
            }),
        }
    }
}
