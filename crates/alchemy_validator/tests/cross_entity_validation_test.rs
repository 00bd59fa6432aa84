//! End-to-end validation scenarios across the three collections.
//!
//! Exercises the engine the way the application drives it: load realistic
//! datasets into the store, then assert on the per-row finding maps.

use alchemy_core::{ClientRow, EntityKind, TaskRow, WorkerRow};
use alchemy_validator::{DataStore, ReferenceSets, validate_clients, validate_tasks};
use pretty_assertions::assert_eq;

fn client(id: &str, name: &str, priority: &str, requested: &str, group: &str) -> ClientRow {
    ClientRow {
        id: None,
        client_id: id.to_string(),
        client_name: name.to_string(),
        priority_level: priority.to_string(),
        requested_task_ids: requested.to_string(),
        group_tag: group.to_string(),
        attributes_json: r#"{"tier":"gold"}"#.to_string(),
    }
}

fn worker(id: &str, name: &str, skills: &str, group: &str) -> WorkerRow {
    WorkerRow {
        id: None,
        worker_id: id.to_string(),
        worker_name: name.to_string(),
        skills: skills.to_string(),
        available_slots: "[1,2,3]".to_string(),
        max_load_per_phase: "2".to_string(),
        worker_group: group.to_string(),
    }
}

fn task(id: &str, name: &str, skills: &str, phases: &str) -> TaskRow {
    TaskRow {
        id: None,
        task_id: id.to_string(),
        task_name: name.to_string(),
        duration: "2".to_string(),
        required_skills: skills.to_string(),
        preferred_phases: phases.to_string(),
        max_concurrent: "1".to_string(),
    }
}

#[test]
fn clean_datasets_produce_a_clean_snapshot() {
    let mut store = DataStore::new();
    store.load_workers(vec![
        worker("W1", "Ada", "welding,assembly", "mechanical"),
        worker("W2", "Grace", "cooking", "catering"),
    ]);
    store.load_tasks(vec![
        task("T1", "Frame", "welding", "1-3"),
        task("T2", "Lunch", "cooking", "[1,2]"),
    ]);
    store.load_clients(vec![
        client("C1", "Acme", "5", "T1,T2", "mechanical"),
        client("C2", "Globex", "1", "T2", ""),
    ]);

    assert!(store.validations().is_clean());
}

#[test]
fn unresolved_references_surface_per_entity() {
    let mut store = DataStore::new();
    store.load_workers(vec![worker("W1", "Ada", "welding", "mechanical")]);
    store.load_tasks(vec![task("T1", "Frame", "welding", "1-3")]);
    store.load_clients(vec![
        client("C1", "Acme", "3", "T1,T9", "catering"),
        client("C2", "Globex", "3", "T1", ""),
    ]);

    let findings = store.findings(EntityKind::Clients);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].row_index, 0);
    assert_eq!(
        findings[0].field("RequestedTaskIDs"),
        Some("Invalid TaskID(s): T9")
    );
    assert_eq!(
        findings[0].field("GroupTag"),
        Some("No workers available in group 'catering'")
    );
}

#[test]
fn duplicate_policies_differ_between_workers_and_tasks() {
    let mut store = DataStore::new();
    store.load_workers(vec![
        worker("W1", "Ada", "welding", "a"),
        worker("W1", "Grace", "welding", "a"),
    ]);
    store.load_tasks(vec![
        task("T1", "Frame", "welding", "1-3"),
        task("T1", "Frame again", "welding", "1-3"),
    ]);

    // Workers: first occurrence unflagged.
    let worker_rows: Vec<usize> = store
        .findings(EntityKind::Workers)
        .iter()
        .map(|f| f.row_index)
        .collect();
    assert_eq!(worker_rows, vec![1]);

    // Tasks: every occurrence flagged.
    let task_rows: Vec<usize> = store
        .findings(EntityKind::Tasks)
        .iter()
        .map(|f| f.row_index)
        .collect();
    assert_eq!(task_rows, vec![0, 1]);
}

#[test]
fn unassignable_task_reports_field_and_row_level() {
    let mut store = DataStore::new();
    store.load_workers(vec![worker("W1", "Ada", "cooking", "catering")]);
    store.load_tasks(vec![task("T1", "Frame", "welding,cooking", "1-3")]);

    let findings = store.findings(EntityKind::Tasks);
    assert_eq!(findings.len(), 1);
    assert_eq!(
        findings[0].field("RequiredSkills"),
        Some("Skill(s) not covered by any worker: welding")
    );
    assert_eq!(
        findings[0].row_level.as_deref(),
        Some("Unassignable task: no workers cover required skills")
    );
}

#[test]
fn validators_are_deterministic_over_a_snapshot() {
    let workers = vec![worker("W1", "Ada", "welding", "mechanical")];
    let tasks = vec![
        task("T1", "Frame", "welding", "1-3"),
        task("T2", "Pipe", "plumbing", "bad phases"),
    ];
    let clients = vec![client("C1", "Acme", "7", "T1,T3", "nowhere")];

    let refs = ReferenceSets::build(&workers, &tasks);

    let clients_a = validate_clients(&clients, &refs.task_ids, &workers);
    let clients_b = validate_clients(&clients, &refs.task_ids, &workers);
    assert_eq!(clients_a, clients_b);

    let tasks_a = validate_tasks(&tasks, Some(&refs.worker_skills));
    let tasks_b = validate_tasks(&tasks, Some(&refs.worker_skills));
    assert_eq!(tasks_a, tasks_b);

    // Byte-identical once serialized, too.
    assert_eq!(
        serde_json::to_string(&tasks_a).unwrap(),
        serde_json::to_string(&tasks_b).unwrap()
    );
}

#[test]
fn single_row_edit_recomputes_the_whole_snapshot() {
    let mut store = DataStore::new();
    store.load_workers(vec![worker("W1", "Ada", "welding", "mechanical")]);
    store.load_tasks(vec![task("T1", "Frame", "welding", "1-3")]);
    store.load_clients(vec![client("C1", "Acme", "3", "T1", "mechanical")]);
    assert!(store.validations().is_clean());

    // Renaming the task invalidates the client's reference and the client's
    // group check still holds; the snapshot reflects both immediately.
    store
        .update_task(0, task("T9", "Frame", "welding", "1-3"))
        .unwrap();

    let findings = store.findings(EntityKind::Clients);
    assert_eq!(findings.len(), 1);
    assert_eq!(
        findings[0].field("RequestedTaskIDs"),
        Some("Invalid TaskID(s): T1")
    );
    assert!(store.findings(EntityKind::Tasks).is_empty());
}
