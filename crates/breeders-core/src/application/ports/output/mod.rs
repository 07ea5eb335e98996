//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `breeders-adapters` crate provides implementations.

use crate::domain::{Breed, WireFormat};
use crate::error::BreedersResult;

/// Port for the local breed store.
///
/// Implemented by:
/// - `breeders_adapters::store::SqliteBreedStore` (production)
/// - `breeders_adapters::store::InMemoryBreedStore` (built-in catalogue, testing)
///
/// ## Error contract
///
/// - `DomainError::BreedNotFound` when the name does not resolve
/// - `ApplicationError::LookupUnavailable` when the backing store fails
///
/// Implementations own their connection handling; callers never open or
/// close connections.
#[cfg_attr(test, mockall::automock)]
pub trait BreedStore: Send + Sync {
    /// All known breeds, in storage order.
    fn all(&self) -> BreedersResult<Vec<Breed>>;

    /// A single breed by name (case-insensitive).
    fn get_breed_by_name(&self, name: &str) -> BreedersResult<Breed>;
}

/// Port for the remote breed provider.
///
/// One implementation exists per wire format; the active one is chosen at
/// startup and never switched per call.
///
/// Implemented by:
/// - `breeders_adapters::remote::JsonBreedAdapter`
/// - `breeders_adapters::remote::XmlBreedAdapter`
///
/// ## Error contract
///
/// - `DomainError::BreedNotFound` when the provider reports no match
/// - `ApplicationError::RemoteUnavailable` on transport failure
/// - `ApplicationError::MalformedPayload` when the payload cannot be decoded
///
/// Adapters translate only: no caching, retry, or backoff.
#[cfg_attr(test, mockall::automock)]
pub trait RemoteBreedAdapter: Send + Sync {
    /// Look up one breed by name.
    fn get_breed_by_name(&self, name: &str) -> BreedersResult<Breed>;

    /// Every breed the provider knows about.
    fn all_breeds(&self) -> BreedersResult<Vec<Breed>>;

    /// The wire format this adapter decodes.
    fn format(&self) -> WireFormat;
}
