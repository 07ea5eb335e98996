//! `breeders init` - create a default configuration file and, optionally,
//! the SQLite breed store.

use std::path::Path;

use tracing::{debug, instrument};

use breeders_adapters::{SqliteBreedStore, builtin_breeds};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, StoreBackend},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the config file, then seed the database if asked.
#[instrument(skip_all, fields(force = args.force, seed_db = args.seed_db))]
pub fn execute(
    args: InitArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = global
        .config
        .clone()
        .unwrap_or_else(AppConfig::config_path);

    let keep_existing = config_path.exists() && !args.force;
    if keep_existing {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
    } else {
        let mut fresh = AppConfig::default();
        if args.seed_db {
            fresh.store.backend = StoreBackend::Sqlite;
        }
        write_config(&config_path, &fresh)?;
        output.success(&format!(
            "Configuration created at {}",
            config_path.display(),
        ))?;
    }

    if args.seed_db {
        let db_path = config.store.database_path();
        let added = seed_database(&db_path)?;
        output.success(&format!(
            "Seeded {added} dog breeds into {}",
            db_path.display(),
        ))?;

        // the kept file still decides which store is read
        if keep_existing && config.store.backend != StoreBackend::Sqlite {
            output.warning(&format!(
                "{} still reads the built-in breeds; set store.backend = \"sqlite\" to use the seeded store",
                config_path.display(),
            ))?;
        }
    }

    Ok(())
}

fn write_config(path: &Path, config: &AppConfig) -> CliResult<()> {
    let toml = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

/// Create the schema and load the built-in dog breeds; existing names are
/// left alone, so running twice is harmless.
fn seed_database(path: &Path) -> CliResult<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create data directory '{}'", parent.display())
        })?;
    }

    let store = SqliteBreedStore::open(path)?;
    store
        .bootstrap_schema()
        .with_cli_context(|| "creating dog_breeds table")?;
    let added = store
        .seed(&builtin_breeds::dog_breeds())
        .with_cli_context(|| "seeding dog breeds")?;

    debug!(path = %path.display(), added, "Seed complete");
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use breeders_core::application::BreedStore;

    #[test]
    fn write_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        write_config(&path, &AppConfig::default()).unwrap();

        let loaded = AppConfig::load(Some(&path), true).unwrap();
        assert_eq!(loaded.store, AppConfig::default().store);
    }

    #[test]
    fn seeding_twice_adds_nothing_new() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("breeders.db");

        assert_eq!(seed_database(&path).unwrap(), 5);
        assert_eq!(seed_database(&path).unwrap(), 0);

        let store = SqliteBreedStore::open(&path).unwrap();
        assert!(store.get_breed_by_name("beagle").is_ok());
    }
}
