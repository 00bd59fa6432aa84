use anyhow::{Context, Result, bail};
use alchemy_ingest::{write_clients, write_tasks, write_workers};
use std::fs;
use std::path::Path;

use crate::commands::validate::load_store;
use crate::output;

pub fn execute(
    clients: Option<&Path>,
    workers: Option<&Path>,
    tasks: Option<&Path>,
    out: &Path,
) -> Result<()> {
    let store = load_store(clients, workers, tasks)?;

    if store.is_empty() {
        bail!("No data to export");
    }

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    if !store.clients().is_empty() {
        let path = out.join("clients.csv");
        write_clients(&path, store.clients())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        output::print_success(&format!("Wrote {}", path.display()));
    }

    if !store.workers().is_empty() {
        let path = out.join("workers.csv");
        write_workers(&path, store.workers())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        output::print_success(&format!("Wrote {}", path.display()));
    }

    if !store.tasks().is_empty() {
        let path = out.join("tasks.csv");
        write_tasks(&path, store.tasks())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        output::print_success(&format!("Wrote {}", path.display()));
    }

    let validations = store.validations();
    if validations.is_clean() {
        output::print_success("All exported rows passed validation");
    } else {
        output::print_info(&format!(
            "Exported with {} rows still carrying findings",
            validations.total_rows()
        ));
    }

    Ok(())
}
