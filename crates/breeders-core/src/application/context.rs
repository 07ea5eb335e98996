//! Shared context - the once-initialised aggregate every factory reads from.
//!
//! [`SharedContext`] holds the local breed store (dogs) and, when configured,
//! the remote breed adapter (cats). It is built once during startup and then
//! handed to services as an `Arc<SharedContext>`; there is no process-global
//! instance.
//!
//! [`ContextCell`] is the exactly-once slot the startup phase initialises:
//!
//! ```text
//! thread A ──initialize(setup)──▶ runs setup ──▶ stores Arc ──▶ returns Arc
//! thread B ──initialize(setup)──▶ blocks ..................... ▶ returns same Arc
//! thread C ──get_instance()──────────────────────────────────▶ returns same Arc
//! ```
//!
//! # Sharp edges
//!
//! - There is no reset. A second `initialize` with a different store is
//!   ignored: its setup closure is dropped unrun and the original instance
//!   is returned.
//! - A failing setup leaves the cell empty, so a later `initialize` may try
//!   again.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{debug, info};

use crate::{
    application::{
        ApplicationError,
        ports::{BreedStore, RemoteBreedAdapter},
    },
    error::BreedersResult,
};

/// Store handle plus breed-lookup capabilities, shared by all factories.
///
/// Immutable after construction; no locking is needed to read it.
#[derive(Clone)]
pub struct SharedContext {
    dog_breeds: Arc<dyn BreedStore>,
    cat_breeds: Option<Arc<dyn RemoteBreedAdapter>>,
}

impl SharedContext {
    /// Context with only the local store wired up.
    pub fn new(store: Arc<dyn BreedStore>) -> Self {
        Self {
            dog_breeds: store,
            cat_breeds: None,
        }
    }

    /// Attach the remote adapter used for cat breeds.
    pub fn with_remote(mut self, adapter: Arc<dyn RemoteBreedAdapter>) -> Self {
        self.cat_breeds = Some(adapter);
        self
    }

    /// The local breed store.
    pub fn dog_breeds(&self) -> &dyn BreedStore {
        self.dog_breeds.as_ref()
    }

    /// The remote breed adapter.
    ///
    /// # Errors
    ///
    /// `AdapterNotConfigured` when no remote adapter was attached.
    pub fn cat_breeds(&self) -> BreedersResult<&dyn RemoteBreedAdapter> {
        self.cat_breeds
            .as_deref()
            .ok_or_else(|| {
                ApplicationError::AdapterNotConfigured {
                    name: "remote breed adapter",
                }
                .into()
            })
    }

    pub fn has_remote(&self) -> bool {
        self.cat_breeds.is_some()
    }
}

impl fmt::Debug for SharedContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedContext")
            .field(
                "remote_format",
                &self.cat_breeds.as_ref().map(|a| a.format()),
            )
            .finish_non_exhaustive()
    }
}

/// Exactly-once slot for the [`SharedContext`].
///
/// Concurrent first callers race into `initialize`; exactly one runs its
/// setup closure and the rest block until it completes, then observe the
/// same instance.
#[derive(Debug, Default)]
pub struct ContextCell {
    slot: OnceCell<Arc<SharedContext>>,
}

impl ContextCell {
    pub const fn new() -> Self {
        Self {
            slot: OnceCell::new(),
        }
    }

    /// Initialise the context on first call; later calls return the
    /// existing instance without running `setup`.
    ///
    /// # Errors
    ///
    /// Whatever `setup` returns. The cell stays empty in that case.
    pub fn initialize<F>(&self, setup: F) -> BreedersResult<Arc<SharedContext>>
    where
        F: FnOnce() -> BreedersResult<SharedContext>,
    {
        let mut ran = false;
        let ctx = self.slot.get_or_try_init(|| {
            ran = true;
            let ctx = setup()?;
            info!(remote = ctx.has_remote(), "Shared context initialized");
            Ok::<_, crate::error::BreedersError>(Arc::new(ctx))
        })?;

        if !ran {
            debug!("Shared context already initialized; ignoring setup");
        }

        Ok(Arc::clone(ctx))
    }

    /// The initialised context.
    ///
    /// # Errors
    ///
    /// `ContextNotInitialized` before the first successful `initialize`.
    pub fn get_instance(&self) -> BreedersResult<Arc<SharedContext>> {
        self.slot
            .get()
            .cloned()
            .ok_or_else(|| ApplicationError::ContextNotInitialized.into())
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }
}
