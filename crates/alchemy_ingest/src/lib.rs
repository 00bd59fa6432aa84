//! # Data Alchemy Ingest
//!
//! CSV decoding and encoding for the three datasets, plus the
//! natural-language rule stub.
//!
//! Ingestion is deliberately dumb: headers are matched against the source
//! column names (`ClientID`, `WorkerID`, ...), blank cells become empty
//! strings, and malformed *values* are never ingest errors: they flow to
//! the validators, which report them as findings. Only structural problems
//! (unreadable file, malformed CSV) produce an [`IngestError`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use alchemy_ingest::read_clients;
//!
//! let clients = read_clients(Path::new("clients.csv")).expect("readable CSV");
//! println!("{} client rows", clients.len());
//! ```

mod csv_io;
mod rules;

pub use csv_io::{
    IngestError, Result, read_clients, read_tasks, read_workers, write_clients, write_tasks,
    write_workers,
};
pub use rules::translate_rule;
