//! SQLite breed store for dog breeds.
//!
//! Reads the `dog_breeds` table. The connection is owned by the store and
//! serialised behind a mutex; callers never open or close it.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, info, instrument};

use breeders_core::{
    application::{ApplicationError, ports::BreedStore},
    domain::{Breed, DomainError, DomainValidator as validator, Species},
    error::{BreedersError, BreedersResult},
};

const SELECT_COLUMNS: &str = "SELECT id, breed, weight_low_lbs, weight_high_lbs, \
     average_weight, lifespan, details, alternate_names, geographic_origin \
     FROM dog_breeds";

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS dog_breeds (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        breed TEXT NOT NULL,
        weight_low_lbs INTEGER,
        weight_high_lbs INTEGER,
        average_weight INTEGER,
        lifespan INTEGER,
        details TEXT,
        alternate_names TEXT,
        geographic_origin TEXT
    );
";

/// Persistent breed store backed by SQLite.
#[derive(Clone)]
pub struct SqliteBreedStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteBreedStore {
    /// Opens (or creates) the database at `path`. The schema is not touched;
    /// call [`bootstrap_schema`](Self::bootstrap_schema) for a fresh file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> BreedersResult<Self> {
        let conn = Connection::open(path.as_ref())
            .map_err(|e| unavailable(format!("failed to open breed store: {e}")))?;
        debug!("Breed store opened");
        Ok(Self::from_connection(conn))
    }

    /// Opens an in-memory database with the schema in place.
    pub fn open_in_memory() -> BreedersResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| unavailable(format!("failed to open in-memory breed store: {e}")))?;
        let store = Self::from_connection(conn);
        store.bootstrap_schema()?;
        Ok(store)
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Wait up to `timeout` for a locked database before failing.
    pub fn with_busy_timeout(self, timeout: Duration) -> BreedersResult<Self> {
        self.lock()?
            .busy_timeout(timeout)
            .map_err(|e| unavailable(format!("failed to set busy timeout: {e}")))?;
        Ok(self)
    }

    /// Creates the `dog_breeds` table if it does not exist.
    pub fn bootstrap_schema(&self) -> BreedersResult<()> {
        self.lock()?
            .execute_batch(SCHEMA)
            .map_err(|e| unavailable(format!("failed to init breed schema: {e}")))?;
        Ok(())
    }

    /// Inserts a breed and returns its row id.
    pub fn insert(&self, breed: &Breed) -> BreedersResult<i64> {
        validator::validate_breed(breed)?;

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO dog_breeds (breed, weight_low_lbs, weight_high_lbs, average_weight, \
             lifespan, details, alternate_names, geographic_origin) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                breed.name,
                breed.weight_low_lbs,
                breed.weight_high_lbs,
                breed.average_weight,
                breed.lifespan,
                breed.details,
                breed.alternate_names,
                breed.geographic_origin,
            ],
        )
        .map_err(|e| unavailable(format!("failed to insert breed: {e}")))?;
        Ok(conn.last_insert_rowid())
    }

    /// Inserts every breed that is not already present by name.
    #[instrument(skip_all, fields(count = breeds.len()))]
    pub fn seed(&self, breeds: &[Breed]) -> BreedersResult<usize> {
        let mut inserted = 0;
        for breed in breeds {
            match self.get_breed_by_name(&breed.name) {
                Ok(_) => continue,
                Err(e) if e.is_not_found() => {
                    self.insert(breed)?;
                    inserted += 1;
                }
                Err(e) => return Err(e),
            }
        }
        info!(inserted, "Breed store seeded");
        Ok(inserted)
    }

    fn lock(&self) -> BreedersResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

impl BreedStore for SqliteBreedStore {
    #[instrument(skip(self))]
    fn all(&self) -> BreedersResult<Vec<Breed>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .map_err(|e| unavailable(format!("failed to query breeds: {e}")))?;
        let rows = stmt
            .query_map([], breed_from_row)
            .map_err(|e| unavailable(format!("failed to query breeds: {e}")))?;

        let breeds = rows
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| unavailable(format!("failed to read breed row: {e}")))?;
        debug!(count = breeds.len(), "Breeds loaded from store");
        Ok(breeds)
    }

    #[instrument(skip(self))]
    fn get_breed_by_name(&self, name: &str) -> BreedersResult<Breed> {
        let conn = self.lock()?;
        conn.query_row(
            &format!("{SELECT_COLUMNS} WHERE lower(breed) = lower(?1) ORDER BY id LIMIT 1"),
            params![name.trim()],
            breed_from_row,
        )
        .optional()
        .map_err(|e| unavailable(format!("failed to query breed: {e}")))?
        .ok_or_else(|| {
            DomainError::BreedNotFound {
                species: Species::Dog,
                name: name.to_string(),
            }
            .into()
        })
    }
}

fn breed_from_row(row: &Row<'_>) -> rusqlite::Result<Breed> {
    Ok(Breed {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        weight_low_lbs: row.get(2)?,
        weight_high_lbs: row.get(3)?,
        average_weight: row.get(4)?,
        lifespan: row.get(5)?,
        details: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        alternate_names: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
        geographic_origin: row.get::<_, Option<String>>(8)?.unwrap_or_default(),
    })
}

fn unavailable(reason: String) -> BreedersError {
    ApplicationError::LookupUnavailable { reason }.into()
}
