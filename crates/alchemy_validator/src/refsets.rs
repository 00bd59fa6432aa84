//! Reference index builder.
//!
//! Lookup sets derived from the current Worker and Task collections. The
//! sets have no state of their own and must be rebuilt before every
//! validation pass; caching them across mutations would let Client and
//! Task validation observe stale cross-entity state.

use alchemy_core::{TaskRow, WorkerRow};
use std::collections::HashSet;

/// Lookup sets for cross-entity checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSets {
    /// Every TaskID in the Task collection, duplicates collapsed
    pub task_ids: HashSet<String>,
    /// Distinct trimmed skill tokens across all Workers
    pub worker_skills: HashSet<String>,
    /// Distinct trimmed non-empty WorkerGroup tags
    pub worker_groups: HashSet<String>,
}

impl ReferenceSets {
    /// Derives the sets from the current collections. Empty inputs yield
    /// empty sets; there are no error conditions.
    pub fn build(workers: &[WorkerRow], tasks: &[TaskRow]) -> Self {
        let task_ids = tasks.iter().map(|t| t.task_id.clone()).collect();

        let worker_skills = workers
            .iter()
            .flat_map(|w| w.skills.split(','))
            .map(|s| s.trim().to_string())
            .collect();

        let worker_groups = workers
            .iter()
            .map(|w| w.worker_group.trim())
            .filter(|g| !g.is_empty())
            .map(String::from)
            .collect();

        Self {
            task_ids,
            worker_skills,
            worker_groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn worker(id: &str, skills: &str, group: &str) -> WorkerRow {
        WorkerRow {
            id: None,
            worker_id: id.to_string(),
            worker_name: format!("{id} name"),
            skills: skills.to_string(),
            available_slots: "[1]".to_string(),
            max_load_per_phase: "1".to_string(),
            worker_group: group.to_string(),
        }
    }

    fn task(id: &str) -> TaskRow {
        TaskRow {
            id: None,
            task_id: id.to_string(),
            task_name: format!("{id} name"),
            duration: "1".to_string(),
            required_skills: String::new(),
            preferred_phases: String::new(),
            max_concurrent: "1".to_string(),
        }
    }

    #[test]
    fn empty_inputs_yield_empty_sets() {
        let refs = ReferenceSets::build(&[], &[]);
        assert!(refs.task_ids.is_empty());
        assert!(refs.worker_skills.is_empty());
        assert!(refs.worker_groups.is_empty());
    }

    #[test]
    fn duplicate_task_ids_collapse() {
        let refs = ReferenceSets::build(&[], &[task("T1"), task("T1"), task("T2")]);
        assert_eq!(refs.task_ids.len(), 2);
        assert!(refs.task_ids.contains("T1"));
        assert!(refs.task_ids.contains("T2"));
    }

    #[test]
    fn skills_are_split_and_trimmed() {
        let workers = vec![
            worker("W1", "welding, cooking", "alpha"),
            worker("W2", "cooking", "alpha"),
        ];
        let refs = ReferenceSets::build(&workers, &[]);
        assert!(refs.worker_skills.contains("welding"));
        assert!(refs.worker_skills.contains("cooking"));
        assert!(!refs.worker_skills.contains(" cooking"));
    }

    #[test]
    fn blank_groups_are_excluded() {
        let workers = vec![
            worker("W1", "welding", "  alpha "),
            worker("W2", "cooking", ""),
            worker("W3", "cooking", "   "),
        ];
        let refs = ReferenceSets::build(&workers, &[]);
        assert_eq!(refs.worker_groups.len(), 1);
        assert!(refs.worker_groups.contains("alpha"));
    }
}
