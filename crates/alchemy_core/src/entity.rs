//! Entity row types for the three datasets.
//!
//! Field names mirror the source column headers (`ClientID`, `WorkerID`,
//! `TaskID`, ...) through serde renames, so CSV ingestion and export can use
//! serde directly. All cells are kept as raw strings; numeric and JSON-typed
//! fields are interpreted by the validators.

use serde::{Deserialize, Serialize};

/// Which of the three collections a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Client dataset
    Clients,
    /// Worker dataset
    Workers,
    /// Task dataset
    Tasks,
}

impl EntityKind {
    /// Lowercase name, matching the source dataset keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Clients => "clients",
            EntityKind::Workers => "workers",
            EntityKind::Tasks => "tasks",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single Client row.
///
/// `PriorityLevel` is expected to hold an integer 1 to 5, `RequestedTaskIDs`
/// a comma-separated list of Task IDs, and `AttributesJSON` a JSON document,
/// all as raw strings. None of that is enforced here; the Client validator
/// reports violations as findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRow {
    /// Positional identifier assigned by the store at load time.
    ///
    /// Not part of the tabular record: skipped by serde so it never appears
    /// in CSV or JSON output. `None` for rows that have not been through a
    /// store load.
    #[serde(skip)]
    pub id: Option<usize>,

    /// Client identifier
    #[serde(rename = "ClientID", default)]
    pub client_id: String,

    /// Human-readable client name
    #[serde(rename = "ClientName", default)]
    pub client_name: String,

    /// Expected integer 1 to 5, as a raw string
    #[serde(rename = "PriorityLevel", default)]
    pub priority_level: String,

    /// Comma-separated Task IDs this client requests
    #[serde(rename = "RequestedTaskIDs", default)]
    pub requested_task_ids: String,

    /// Optional worker-group tag; empty means absent
    #[serde(rename = "GroupTag", default)]
    pub group_tag: String,

    /// Arbitrary attributes, expected to parse as JSON
    #[serde(rename = "AttributesJSON", default)]
    pub attributes_json: String,
}

/// A single Worker row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerRow {
    /// Positional identifier assigned by the store at load time.
    #[serde(skip)]
    pub id: Option<usize>,

    /// Worker identifier
    #[serde(rename = "WorkerID", default)]
    pub worker_id: String,

    /// Human-readable worker name
    #[serde(rename = "WorkerName", default)]
    pub worker_name: String,

    /// Comma-separated skill tokens
    #[serde(rename = "Skills", default)]
    pub skills: String,

    /// Expected JSON array of numbers, as a raw string
    #[serde(rename = "AvailableSlots", default)]
    pub available_slots: String,

    /// Expected positive integer, as a raw string
    #[serde(rename = "MaxLoadPerPhase", default)]
    pub max_load_per_phase: String,

    /// Free-form group tag; empty means absent
    #[serde(rename = "WorkerGroup", default)]
    pub worker_group: String,
}

/// A single Task row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    /// Positional identifier assigned by the store at load time.
    #[serde(skip)]
    pub id: Option<usize>,

    /// Task identifier
    #[serde(rename = "TaskID", default)]
    pub task_id: String,

    /// Human-readable task name
    #[serde(rename = "TaskName", default)]
    pub task_name: String,

    /// Expected integer >= 1, as a raw string
    #[serde(rename = "Duration", default)]
    pub duration: String,

    /// Comma-separated skill tokens a worker must cover
    #[serde(rename = "RequiredSkills", default)]
    pub required_skills: String,

    /// Either a "start-end" range string or a JSON array of numbers
    #[serde(rename = "PreferredPhases", default)]
    pub preferred_phases: String,

    /// Expected integer >= 1, as a raw string
    #[serde(rename = "MaxConcurrent", default)]
    pub max_concurrent: String,
}

impl ClientRow {
    /// Effective row index for error attribution: the assigned id when
    /// present, otherwise the positional index supplied by the caller.
    pub fn row_index(&self, position: usize) -> usize {
        self.id.unwrap_or(position)
    }
}

impl WorkerRow {
    /// Effective row index for error attribution.
    pub fn row_index(&self, position: usize) -> usize {
        self.id.unwrap_or(position)
    }
}

impl TaskRow {
    /// Effective row index for error attribution.
    pub fn row_index(&self, position: usize) -> usize {
        self.id.unwrap_or(position)
    }
}
