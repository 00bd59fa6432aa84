//! Validation result model.
//!
//! The validators report findings, never errors: a malformed cell is data to
//! describe, not a fault to propagate. Each offending row yields one
//! [`RowFindings`] carrying a field→message map plus an optional row-level
//! message, kept as two explicit channels so a real column named `_rowLevel`
//! could never collide with the reserved key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Findings for a single offending row.
///
/// Rows without findings produce no entry at all; a validator's output is a
/// list of these, ordered by input row order. The field map is a `BTreeMap`
/// so serializing the same snapshot twice yields byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFindings {
    /// Row identifier: the store-assigned id when present, else the row's
    /// position at validation time.
    #[serde(rename = "rowIndex")]
    pub row_index: usize,

    /// Field name → human-readable message
    #[serde(rename = "errors")]
    pub fields: BTreeMap<String, String>,

    /// Whole-row message; serialized under the reserved `_rowLevel` key
    #[serde(rename = "_rowLevel", skip_serializing_if = "Option::is_none", default)]
    pub row_level: Option<String>,
}

impl RowFindings {
    /// Creates an empty findings record for a row.
    pub fn new(row_index: usize) -> Self {
        Self {
            row_index,
            fields: BTreeMap::new(),
            row_level: None,
        }
    }

    /// Records a field-level message, replacing any earlier message for the
    /// same field; when several rules hit one field, the last one wins.
    pub fn set_field(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.insert(field.into(), message.into());
    }

    /// Records the whole-row message.
    pub fn set_row_level(&mut self, message: impl Into<String>) {
        self.row_level = Some(message.into());
    }

    /// True if neither channel holds a finding.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.row_level.is_none()
    }

    /// Message recorded for a field, if any.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Validation snapshot for all three collections.
///
/// Replaced wholesale on every revalidation; it has no lifecycle of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validations {
    /// Findings for the Client collection
    pub clients: Vec<RowFindings>,
    /// Findings for the Worker collection
    pub workers: Vec<RowFindings>,
    /// Findings for the Task collection
    pub tasks: Vec<RowFindings>,
}

impl Validations {
    /// True if no collection has findings.
    pub fn is_clean(&self) -> bool {
        self.clients.is_empty() && self.workers.is_empty() && self.tasks.is_empty()
    }

    /// Total number of offending rows across the three collections.
    pub fn total_rows(&self) -> usize {
        self.clients.len() + self.workers.len() + self.tasks.len()
    }
}
