//! # Data Alchemy Core
//!
//! Core data structures and types for the Data Alchemy validation engine.
//!
//! This crate provides the fundamental building blocks for working with the
//! three tabular datasets the engine understands. Every cell arrives as a raw
//! string, because the source data is tabular text (CSV/XLSX); typed
//! interpretation of numeric and JSON-valued fields happens during
//! validation, never during ingestion.
//!
//! ## Key Concepts
//!
//! - **Entity rows**: [`ClientRow`], [`WorkerRow`], [`TaskRow`], one struct
//!   per dataset, string-typed fields named after the source column headers
//! - **Row findings**: [`RowFindings`], the per-row error map produced by
//!   the validators, with separate field-level and row-level channels
//! - **Entity kind**: [`EntityKind`], which of the three collections a
//!   value belongs to
//!
//! ## Example
//!
//! ```rust
//! use alchemy_core::ClientRow;
//!
//! let client = ClientRow {
//!     id: None,
//!     client_id: "C1".to_string(),
//!     client_name: "Acme".to_string(),
//!     priority_level: "3".to_string(),
//!     requested_task_ids: "T1,T2".to_string(),
//!     group_tag: "alpha".to_string(),
//!     attributes_json: "{}".to_string(),
//! };
//! assert!(!client.client_id.is_empty());
//! ```

pub mod entity;
pub mod error;
pub mod result;

pub use entity::*;
pub use error::*;
pub use result::*;
