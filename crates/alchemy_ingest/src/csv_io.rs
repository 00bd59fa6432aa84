//! CSV read/write for the three entity types.

use alchemy_core::{ClientRow, TaskRow, WorkerRow};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading or writing dataset files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV syntax or deserialization failure
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a Client CSV. Headers must match the source column names; missing
/// columns decode to empty strings.
pub fn read_clients(path: &Path) -> Result<Vec<ClientRow>> {
    read_rows(path)
}

/// Reads a Worker CSV.
pub fn read_workers(path: &Path) -> Result<Vec<WorkerRow>> {
    read_rows(path)
}

/// Reads a Task CSV.
pub fn read_tasks(path: &Path) -> Result<Vec<TaskRow>> {
    read_rows(path)
}

/// Writes a Client CSV with the source column headers. The in-memory row id
/// is not written.
pub fn write_clients(path: &Path, rows: &[ClientRow]) -> Result<()> {
    write_rows(path, rows)
}

/// Writes a Worker CSV.
pub fn write_workers(path: &Path, rows: &[WorkerRow]) -> Result<()> {
    write_rows(path, rows)
}

/// Writes a Task CSV.
pub fn write_tasks(path: &Path, rows: &[TaskRow]) -> Result<()> {
    write_rows(path, rows)
}
