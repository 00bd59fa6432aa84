//! Client validation.

use crate::num::parse_int;
use alchemy_core::{ClientRow, RowFindings, WorkerRow};
use std::collections::HashSet;

/// Validates the Client collection against field rules and the cross-entity
/// reference state.
///
/// `task_ids` is the Task-ID reference set; group membership is derived from
/// the full Worker collection on demand. All per-row rules are independent,
/// so a row may accumulate several field findings. Rows without findings
/// produce no entry.
pub fn validate_clients(
    clients: &[ClientRow],
    task_ids: &HashSet<String>,
    workers: &[WorkerRow],
) -> Vec<RowFindings> {
    let worker_groups: HashSet<&str> = workers
        .iter()
        .map(|w| w.worker_group.trim())
        .filter(|g| !g.is_empty())
        .collect();

    let mut findings = Vec::new();

    for (position, client) in clients.iter().enumerate() {
        let mut row = RowFindings::new(client.row_index(position));

        if client.client_id.is_empty() {
            row.set_field("ClientID", "Missing ClientID");
        }
        if client.client_name.is_empty() {
            row.set_field("ClientName", "Missing ClientName");
        }

        match parse_int(&client.priority_level) {
            Some(priority) if (1..=5).contains(&priority) => {}
            _ => row.set_field("PriorityLevel", "Invalid priority level (1-5)"),
        }

        if client.requested_task_ids.is_empty() {
            row.set_field("RequestedTaskIDs", "Missing RequestedTaskIDs");
        } else {
            let invalid: Vec<&str> = client
                .requested_task_ids
                .split(',')
                .map(str::trim)
                .filter(|id| !task_ids.contains(*id))
                .collect();
            if !invalid.is_empty() {
                row.set_field(
                    "RequestedTaskIDs",
                    format!("Invalid TaskID(s): {}", invalid.join(", ")),
                );
            }
        }

        // An empty string is not valid JSON, so a blank cell fails here too.
        if serde_json::from_str::<serde_json::Value>(&client.attributes_json).is_err() {
            row.set_field("AttributesJSON", "Invalid JSON in AttributesJSON");
        }

        if !client.group_tag.is_empty() && !worker_groups.contains(client.group_tag.trim()) {
            row.set_field(
                "GroupTag",
                format!("No workers available in group '{}'", client.group_tag),
            );
        }

        if !row.is_empty() {
            findings.push(row);
        }
    }

    findings
}
