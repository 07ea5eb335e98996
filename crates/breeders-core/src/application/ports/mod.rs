//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `breeders-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `BreedStore`: Local relational breed records (dogs)
//!   - `RemoteBreedAdapter`: Remote breed provider behind a wire-format adapter (cats)
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{BreedStore, RemoteBreedAdapter};

#[cfg(test)]
pub use output::{MockBreedStore, MockRemoteBreedAdapter};
