//! Task validation.

use crate::num::parse_int;
use alchemy_core::{RowFindings, TaskRow};
use std::collections::{HashMap, HashSet};

/// Validates the Task collection.
///
/// `worker_skills` is the Worker-skill reference set; when `None`, skill
/// coverage checking is skipped entirely (a valid configuration, not an
/// error). Duplicate TaskIDs are counted in a first pass so that **every**
/// row bearing a duplicated ID is flagged, including the first (unlike
/// Worker duplicate handling).
pub fn validate_tasks(
    tasks: &[TaskRow],
    worker_skills: Option<&HashSet<String>>,
) -> Vec<RowFindings> {
    let mut id_counts: HashMap<&str, usize> = HashMap::new();
    for task in tasks {
        *id_counts.entry(task.task_id.as_str()).or_insert(0) += 1;
    }
    let duplicate_ids: HashSet<&str> = id_counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id)
        .collect();

    let mut findings = Vec::new();

    for (position, task) in tasks.iter().enumerate() {
        let mut row = RowFindings::new(task.row_index(position));

        if task.task_id.is_empty() {
            row.set_field("TaskID", "Missing TaskID");
        }
        if task.task_name.is_empty() {
            row.set_field("TaskName", "Missing TaskName");
        }
        if task.duration.is_empty() {
            row.set_field("Duration", "Missing Duration");
        }
        if task.required_skills.is_empty() {
            row.set_field("RequiredSkills", "Missing RequiredSkills");
        }
        if task.preferred_phases.is_empty() {
            row.set_field("PreferredPhases", "Missing PreferredPhases");
        }
        if task.max_concurrent.is_empty() {
            row.set_field("MaxConcurrent", "Missing MaxConcurrent");
        }

        let is_duplicate = duplicate_ids.contains(task.task_id.as_str());
        if is_duplicate {
            row.set_field("TaskID", "Duplicate TaskID");
        }

        // A present-but-non-numeric Duration or MaxConcurrent parses to
        // nothing and is accepted as-is; only parseable values below 1 are
        // findings.
        if let Some(duration) = parse_int(&task.duration)
            && duration < 1
        {
            row.set_field("Duration", "Invalid Duration (must be >= 1)");
        }
        if let Some(concurrent) = parse_int(&task.max_concurrent)
            && concurrent < 1
        {
            row.set_field("MaxConcurrent", "Invalid MaxConcurrent (must be >= 1)");
        }

        // Duplicated tasks are exempt from coverage checking; flagging the
        // same unmatched skills on every copy would only repeat the noise.
        if !task.required_skills.is_empty()
            && !is_duplicate
            && let Some(skills) = worker_skills
        {
            let unmatched: Vec<&str> = task
                .required_skills
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter(|s| !skills.contains(*s))
                .collect();
            if !unmatched.is_empty() {
                row.set_field(
                    "RequiredSkills",
                    format!("Skill(s) not covered by any worker: {}", unmatched.join(", ")),
                );
                row.set_row_level("Unassignable task: no workers cover required skills");
            }
        }

        if !task.preferred_phases.is_empty() {
            check_preferred_phases(task.preferred_phases.trim(), &mut row);
        }

        if !row.is_empty() {
            findings.push(row);
        }
    }

    findings
}

/// Two accepted syntaxes: a "start-end" range when the value contains a
/// hyphen, otherwise a JSON array of numbers.
fn check_preferred_phases(value: &str, row: &mut RowFindings) {
    if value.contains('-') {
        let valid_range = value.split_once('-').is_some_and(|(start, end)| {
            match (parse_int(start), parse_int(end)) {
                (Some(start), Some(end)) => start <= end,
                _ => false,
            }
        });
        if !valid_range {
            row.set_field("PreferredPhases", "Invalid range in PreferredPhases");
        }
        return;
    }

    match serde_json::from_str::<serde_json::Value>(value) {
        Ok(parsed) => {
            let all_numbers = parsed
                .as_array()
                .is_some_and(|arr| arr.iter().all(serde_json::Value::is_number));
            if !all_numbers {
                row.set_field("PreferredPhases", "PreferredPhases must be a numeric array");
            }
        }
        Err(_) => row.set_field("PreferredPhases", "Invalid format in PreferredPhases"),
    }
}
