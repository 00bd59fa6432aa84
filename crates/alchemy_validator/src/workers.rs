//! Worker validation.

use crate::num::parse_int;
use alchemy_core::{RowFindings, WorkerRow};
use std::collections::HashSet;

/// Validates the Worker collection. No cross-entity dependency.
///
/// Duplicate WorkerIDs are detected with a seen-set scanned in row order:
/// only rows after the first occurrence are flagged. This asymmetry with
/// Task duplicate handling (where every occurrence is flagged) is
/// deliberate and covered by tests in both modules.
pub fn validate_workers(workers: &[WorkerRow]) -> Vec<RowFindings> {
    let mut findings = Vec::new();
    let mut seen_ids: HashSet<&str> = HashSet::new();

    for (position, worker) in workers.iter().enumerate() {
        let mut row = RowFindings::new(worker.row_index(position));

        if worker.worker_id.is_empty() {
            row.set_field("WorkerID", "Missing WorkerID");
        }
        if worker.worker_name.is_empty() {
            row.set_field("WorkerName", "Missing WorkerName");
        }
        if worker.skills.is_empty() {
            row.set_field("Skills", "Missing Skills");
        }
        if worker.available_slots.is_empty() {
            row.set_field("AvailableSlots", "Missing AvailableSlots");
        }
        if worker.max_load_per_phase.is_empty() {
            row.set_field("MaxLoadPerPhase", "Missing MaxLoadPerPhase");
        }

        if !seen_ids.insert(worker.worker_id.as_str()) {
            row.set_field("WorkerID", "Duplicate WorkerID");
        }

        match serde_json::from_str::<serde_json::Value>(&worker.available_slots) {
            Ok(slots) => {
                let all_numbers = slots
                    .as_array()
                    .is_some_and(|arr| arr.iter().all(serde_json::Value::is_number));
                if !all_numbers {
                    row.set_field("AvailableSlots", "Must be a JSON array of numbers");
                }
            }
            Err(_) => row.set_field("AvailableSlots", "Invalid JSON in AvailableSlots"),
        }

        match parse_int(&worker.max_load_per_phase) {
            Some(load) if load > 0 => {}
            _ => row.set_field("MaxLoadPerPhase", "Invalid MaxLoadPerPhase (must be > 0)"),
        }

        if !row.is_empty() {
            findings.push(row);
        }
    }

    findings
}
