//! # Data Alchemy Validator
//!
//! Validation engine for the three related tabular datasets: Clients,
//! Workers, Tasks. Enforces per-field constraints and cross-entity
//! referential integrity, and reports results as per-row error maps a caller
//! can use to highlight invalid cells.
//!
//! The engine is pure and synchronous: each validator is a function from a
//! complete snapshot of the relevant collections to a fresh finding list.
//! Invalid data never raises an error; every failure mode is a finding.
//!
//! - [`ReferenceSets`]: lookup sets derived from the current Worker/Task
//!   collections, rebuilt on every pass
//! - [`validate_clients`], [`validate_workers`], [`validate_tasks`]: one
//!   entry point per entity
//! - [`DataStore`]: in-memory store that re-runs all three validators on
//!   every mutation
//!
//! ## Example
//!
//! ```rust
//! use alchemy_core::TaskRow;
//! use alchemy_validator::validate_tasks;
//!
//! let tasks = vec![TaskRow {
//!     id: None,
//!     task_id: "T1".to_string(),
//!     task_name: "Assemble".to_string(),
//!     duration: "0".to_string(),
//!     required_skills: "welding".to_string(),
//!     preferred_phases: "1-3".to_string(),
//!     max_concurrent: "2".to_string(),
//! }];
//!
//! let findings = validate_tasks(&tasks, None);
//! assert_eq!(findings.len(), 1);
//! assert!(findings[0].field("Duration").is_some());
//! ```

mod clients;
mod num;
mod refsets;
mod store;
mod tasks;
mod workers;

pub use clients::validate_clients;
pub use refsets::ReferenceSets;
pub use store::DataStore;
pub use tasks::validate_tasks;
pub use workers::validate_workers;
