//! In-memory data store and revalidation trigger.
//!
//! The store owns the three collections plus the current [`Validations`]
//! snapshot. Every mutation (bulk load, clear, or single-row edit)
//! rebuilds the reference index and re-runs all three validators before
//! returning, so a caller never observes a half-updated snapshot. Client
//! and Task validation depend on Worker/Task state, which is why a change
//! to any one collection refreshes all three finding lists.

use crate::{ReferenceSets, validate_clients, validate_tasks, validate_workers};
use alchemy_core::{
    ClientRow, EntityKind, Result, RowFindings, StoreError, TaskRow, Validations, WorkerRow,
};
use tracing::debug;

/// Holds the current snapshot of all three collections and their findings.
#[derive(Debug, Default)]
pub struct DataStore {
    clients: Vec<ClientRow>,
    workers: Vec<WorkerRow>,
    tasks: Vec<TaskRow>,
    validations: Validations,
}

impl DataStore {
    /// Creates an empty store with a clean validation snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current Client collection.
    pub fn clients(&self) -> &[ClientRow] {
        &self.clients
    }

    /// Current Worker collection.
    pub fn workers(&self) -> &[WorkerRow] {
        &self.workers
    }

    /// Current Task collection.
    pub fn tasks(&self) -> &[TaskRow] {
        &self.tasks
    }

    /// Current validation snapshot.
    pub fn validations(&self) -> &Validations {
        &self.validations
    }

    /// True if none of the collections hold any rows.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty() && self.workers.is_empty() && self.tasks.is_empty()
    }

    /// Replaces the Client collection, assigning positional row ids.
    pub fn load_clients(&mut self, mut rows: Vec<ClientRow>) {
        for (index, row) in rows.iter_mut().enumerate() {
            row.id = Some(index);
        }
        self.clients = rows;
        self.revalidate();
    }

    /// Replaces the Worker collection, assigning positional row ids.
    pub fn load_workers(&mut self, mut rows: Vec<WorkerRow>) {
        for (index, row) in rows.iter_mut().enumerate() {
            row.id = Some(index);
        }
        self.workers = rows;
        self.revalidate();
    }

    /// Replaces the Task collection, assigning positional row ids.
    pub fn load_tasks(&mut self, mut rows: Vec<TaskRow>) {
        for (index, row) in rows.iter_mut().enumerate() {
            row.id = Some(index);
        }
        self.tasks = rows;
        self.revalidate();
    }

    /// Empties one collection.
    pub fn clear(&mut self, kind: EntityKind) {
        match kind {
            EntityKind::Clients => self.clients.clear(),
            EntityKind::Workers => self.workers.clear(),
            EntityKind::Tasks => self.tasks.clear(),
        }
        self.revalidate();
    }

    /// Replaces one Client row in place, preserving its assigned id.
    pub fn update_client(&mut self, index: usize, mut row: ClientRow) -> Result<()> {
        let len = self.clients.len();
        let slot = self
            .clients
            .get_mut(index)
            .ok_or(StoreError::RowOutOfBounds {
                kind: EntityKind::Clients,
                index,
                len,
            })?;
        row.id = slot.id;
        *slot = row;
        self.revalidate();
        Ok(())
    }

    /// Replaces one Worker row in place, preserving its assigned id.
    pub fn update_worker(&mut self, index: usize, mut row: WorkerRow) -> Result<()> {
        let len = self.workers.len();
        let slot = self
            .workers
            .get_mut(index)
            .ok_or(StoreError::RowOutOfBounds {
                kind: EntityKind::Workers,
                index,
                len,
            })?;
        row.id = slot.id;
        *slot = row;
        self.revalidate();
        Ok(())
    }

    /// Replaces one Task row in place, preserving its assigned id.
    pub fn update_task(&mut self, index: usize, mut row: TaskRow) -> Result<()> {
        let len = self.tasks.len();
        let slot = self.tasks.get_mut(index).ok_or(StoreError::RowOutOfBounds {
            kind: EntityKind::Tasks,
            index,
            len,
        })?;
        row.id = slot.id;
        *slot = row;
        self.revalidate();
        Ok(())
    }

    /// Findings for one collection.
    pub fn findings(&self, kind: EntityKind) -> &[RowFindings] {
        match kind {
            EntityKind::Clients => &self.validations.clients,
            EntityKind::Workers => &self.validations.workers,
            EntityKind::Tasks => &self.validations.tasks,
        }
    }

    /// Full synchronous recomputation over the current snapshot. Reference
    /// sets are rebuilt from scratch; nothing is cached across mutations.
    fn revalidate(&mut self) {
        let refs = ReferenceSets::build(&self.workers, &self.tasks);
        debug!(
            clients = self.clients.len(),
            workers = self.workers.len(),
            tasks = self.tasks.len(),
            "revalidating all collections"
        );

        self.validations = Validations {
            clients: validate_clients(&self.clients, &refs.task_ids, &self.workers),
            workers: validate_workers(&self.workers),
            tasks: validate_tasks(&self.tasks, Some(&refs.worker_skills)),
        };
    }
}
