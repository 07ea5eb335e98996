//! Wiring configured adapters into the shared context.
//!
//! Building the context does no I/O: the store and the remote transport are
//! opened on their first lookup. A broken store or remote URL therefore only
//! fails the operations that actually read breed data, and `pet new` without
//! a breed succeeds whatever the configuration points at.

use std::{sync::Arc, time::Duration};

use once_cell::sync::OnceCell;
use tracing::{debug, instrument};

use breeders_adapters::{
    HttpTransport, InMemoryBreedStore, SqliteBreedStore, adapter_for,
    builtin_breeds::cat_transport,
    remote::BreedTransport,
};
use breeders_core::{
    application::{BreedStore, ContextCell, RemoteBreedAdapter, SharedContext},
    domain::{Breed, WireFormat},
    error::BreedersResult,
};

use crate::config::{AppConfig, RemoteConfig, StoreBackend, StoreConfig};

/// The process-wide context, initialised from `config` on first use.
pub fn context(cell: &ContextCell, config: &AppConfig) -> BreedersResult<Arc<SharedContext>> {
    cell.initialize(|| Ok(shared_context(config)))
}

/// Build a fresh [`SharedContext`] from configuration.
#[instrument(skip_all, fields(backend = ?config.store.backend))]
pub fn shared_context(config: &AppConfig) -> SharedContext {
    let context = SharedContext::new(Arc::new(LazyBreedStore::new(config.store.clone())));

    if config.remote.offline || config.remote.base_url.is_some() {
        context.with_remote(Arc::new(LazyRemote::new(config.remote.clone())))
    } else {
        debug!("No remote breed source configured");
        context
    }
}

// ── lazy handles ──────────────────────────────────────────────────────────────

/// Dog store opened on first lookup; a failed open is retried next call.
struct LazyBreedStore {
    config: StoreConfig,
    store: OnceCell<Arc<dyn BreedStore>>,
}

impl LazyBreedStore {
    fn new(config: StoreConfig) -> Self {
        Self {
            config,
            store: OnceCell::new(),
        }
    }

    fn store(&self) -> BreedersResult<&dyn BreedStore> {
        self.store
            .get_or_try_init(|| open_dog_store(&self.config))
            .map(|store| store.as_ref())
    }
}

impl BreedStore for LazyBreedStore {
    fn all(&self) -> BreedersResult<Vec<Breed>> {
        self.store()?.all()
    }

    fn get_breed_by_name(&self, name: &str) -> BreedersResult<Breed> {
        self.store()?.get_breed_by_name(name)
    }
}

/// Remote adapter whose transport is built on first lookup.
struct LazyRemote {
    config: RemoteConfig,
    adapter: OnceCell<Arc<dyn RemoteBreedAdapter>>,
}

impl LazyRemote {
    fn new(config: RemoteConfig) -> Self {
        Self {
            config,
            adapter: OnceCell::new(),
        }
    }

    fn adapter(&self) -> BreedersResult<&dyn RemoteBreedAdapter> {
        self.adapter
            .get_or_try_init(|| open_remote(&self.config))
            .map(|adapter| adapter.as_ref())
    }
}

impl RemoteBreedAdapter for LazyRemote {
    fn get_breed_by_name(&self, name: &str) -> BreedersResult<Breed> {
        self.adapter()?.get_breed_by_name(name)
    }

    fn all_breeds(&self) -> BreedersResult<Vec<Breed>> {
        self.adapter()?.all_breeds()
    }

    fn format(&self) -> WireFormat {
        self.config.format
    }
}

fn open_dog_store(config: &StoreConfig) -> BreedersResult<Arc<dyn BreedStore>> {
    Ok(match config.backend {
        StoreBackend::Memory => Arc::new(InMemoryBreedStore::with_builtin()?),
        StoreBackend::Sqlite => {
            let path = config.database_path();
            debug!(path = %path.display(), "Opening SQLite breed store");
            Arc::new(
                SqliteBreedStore::open(&path)?
                    .with_busy_timeout(Duration::from_millis(config.busy_timeout_ms))?,
            )
        }
    })
}

fn open_remote(config: &RemoteConfig) -> BreedersResult<Arc<dyn RemoteBreedAdapter>> {
    let transport: Box<dyn BreedTransport> = match config.base_url.as_deref() {
        Some(url) if !config.offline => Box::new(HttpTransport::new(
            url,
            Duration::from_secs(config.timeout_secs),
        )?),
        _ => Box::new(cat_transport(config.format)?),
    };

    debug!(format = %config.format, offline = config.offline, "Remote breed source ready");
    Ok(adapter_for(config.format, transport))
}

#[cfg(test)]
mod tests {
    use super::*;
    use breeders_core::{application::ApplicationError, error::BreedersError};

    fn offline(format: WireFormat) -> AppConfig {
        let mut config = AppConfig::default();
        config.remote.offline = true;
        config.remote.format = format;
        config
    }

    fn unopenable_sqlite() -> (tempfile::TempDir, AppConfig) {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.store.backend = StoreBackend::Sqlite;
        config.store.path = Some(dir.path().join("missing").join("dogs.db"));
        (dir, config)
    }

    #[test]
    fn default_config_has_dogs_but_no_cats() {
        let ctx = shared_context(&AppConfig::default());
        assert!(!ctx.has_remote());
        assert!(ctx.dog_breeds().get_breed_by_name("Beagle").is_ok());
        assert!(matches!(
            ctx.cat_breeds(),
            Err(BreedersError::Application(
                ApplicationError::AdapterNotConfigured { .. }
            ))
        ));
    }

    #[test]
    fn offline_serves_cats_in_both_formats() {
        for format in [WireFormat::Json, WireFormat::Xml] {
            let ctx = shared_context(&offline(format));
            let remote = ctx.cat_breeds().unwrap();
            assert_eq!(remote.format(), format);
            let breed = remote.get_breed_by_name("Siamese").unwrap();
            assert_eq!(breed.geographic_origin, "Thailand");
        }
    }

    #[test]
    fn bad_base_url_fails_on_first_cat_lookup() {
        let mut config = AppConfig::default();
        config.remote.base_url = Some("not a url".into());

        let ctx = shared_context(&config);
        assert!(ctx.has_remote());
        let err = ctx
            .cat_breeds()
            .unwrap()
            .get_breed_by_name("Siamese")
            .unwrap_err();
        assert!(matches!(err, BreedersError::Configuration { .. }));
    }

    #[test]
    fn unopenable_store_fails_on_lookup_not_on_build() {
        let (_dir, config) = unopenable_sqlite();
        let cell = ContextCell::new();

        let ctx = context(&cell, &config).unwrap();
        let err = ctx.dog_breeds().get_breed_by_name("Beagle").unwrap_err();
        assert!(err.is_retryable());
        assert!(cell.is_initialized());
    }

    #[test]
    fn sqlite_backend_opens_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dogs.db");
        let seeded = SqliteBreedStore::open(&path).unwrap();
        seeded.bootstrap_schema().unwrap();
        seeded
            .seed(&breeders_adapters::builtin_breeds::dog_breeds())
            .unwrap();

        let mut config = AppConfig::default();
        config.store.backend = StoreBackend::Sqlite;
        config.store.path = Some(path);

        let ctx = shared_context(&config);
        assert_eq!(ctx.dog_breeds().all().unwrap().len(), 5);
    }

    #[test]
    fn cell_initialises_once() {
        let cell = ContextCell::new();
        let first = context(&cell, &AppConfig::default()).unwrap();
        let second = context(&cell, &offline(WireFormat::Json)).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(!second.has_remote());
    }
}
