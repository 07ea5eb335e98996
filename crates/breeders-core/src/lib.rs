//! Breeders Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Breeders
//! pet-creation subsystem, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          breeders-cli (CLI)             │
//! │     (Owns ContextCell, startup)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (PetService, BreedService, factories)  │
//! │     read Arc<SharedContext>             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (BreedStore, RemoteBreedAdapter)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    breeders-adapters (Infrastructure)   │
//! │  (SqliteBreedStore, Json/XmlAdapter)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Species, Pet, PetBuilder, Breed)      │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use breeders_core::prelude::*;
//!
//! # fn store() -> Arc<dyn BreedStore> { unimplemented!() }
//! let cell = ContextCell::new();
//! let ctx = cell.initialize(|| Ok(SharedContext::new(store()))).unwrap();
//!
//! let service = PetService::new(ctx);
//! let dog = service.create_with_breed_from_factory("dog", "Beagle").unwrap();
//! println!("{}", dog.describe());
//!
//! let pet = Pet::builder()
//!     .species("dog")
//!     .breed("mixed breed")
//!     .weight(15)
//!     .build()
//!     .unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BreedService, ContextCell, PetFactory, PetService, SharedContext,
        ports::{BreedStore, RemoteBreedAdapter},
    };
    pub use crate::domain::{
        Animal, Breed, CatFromFactory, Describe, DogFromFactory, Pet, PetBuilder, Species,
        WireFormat,
    };
    pub use crate::error::{BreedersError, BreedersResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
