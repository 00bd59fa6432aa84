//! Error types shared across the workspace.
//!
//! Only structural failures live here. Data-validity problems (malformed
//! JSON cells, out-of-range numbers, unresolved references) are findings in
//! the [`crate::RowFindings`] maps, never errors.

use crate::EntityKind;
use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by the in-memory data store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A row edit addressed an index outside the current collection
    #[error("Row index {index} out of bounds for {kind} (len {len})")]
    RowOutOfBounds {
        /// Collection being edited
        kind: EntityKind,
        /// Requested index
        index: usize,
        /// Current collection length
        len: usize,
    },
}
