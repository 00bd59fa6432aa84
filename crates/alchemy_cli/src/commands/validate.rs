use anyhow::{Context, Result};
use alchemy_ingest::{read_clients, read_tasks, read_workers};
use alchemy_validator::DataStore;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(
    clients: Option<&Path>,
    workers: Option<&Path>,
    tasks: Option<&Path>,
    strict: bool,
    format: &str,
) -> Result<()> {
    info!("Strict mode: {}", strict);

    let store = load_store(clients, workers, tasks)?;

    let empty = store.is_empty();
    if empty {
        output::print_info("No datasets provided; nothing to validate");
    }

    output::print_validation_report(store.validations(), format);

    // An empty run passes trivially; strict mode treats that as a failure
    if !store.validations().is_clean() || (strict && empty) {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads whichever datasets were provided into a fresh store. The store
/// revalidates everything after each load, so the final snapshot reflects
/// the complete cross-entity state regardless of load order.
pub fn load_store(
    clients: Option<&Path>,
    workers: Option<&Path>,
    tasks: Option<&Path>,
) -> Result<DataStore> {
    let mut store = DataStore::new();

    if let Some(path) = workers {
        let rows = read_workers(path)
            .with_context(|| format!("Failed to read workers file: {}", path.display()))?;
        info!("Loaded {} worker rows from {}", rows.len(), path.display());
        store.load_workers(rows);
    }

    if let Some(path) = tasks {
        let rows = read_tasks(path)
            .with_context(|| format!("Failed to read tasks file: {}", path.display()))?;
        info!("Loaded {} task rows from {}", rows.len(), path.display());
        store.load_tasks(rows);
    }

    if let Some(path) = clients {
        let rows = read_clients(path)
            .with_context(|| format!("Failed to read clients file: {}", path.display()))?;
        info!("Loaded {} client rows from {}", rows.len(), path.display());
        store.load_clients(rows);
    }

    Ok(store)
}
