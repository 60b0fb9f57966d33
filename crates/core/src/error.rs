//! Workflow error model.

use thiserror::Error;

/// Result type used across the workflow crates.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Workflow-level error.
///
/// Only genuinely unrecoverable conditions live here. A missing catalog file
/// and an unmatched product identifier are tolerated-and-journaled outcomes,
/// not errors.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Appending a record to the action journal failed (e.g. unwritable path).
    #[error("journal append failed: {0}")]
    Journal(#[source] std::io::Error),

    /// The catalog file exists but could not be read.
    #[error("catalog read failed: {0}")]
    Catalog(#[source] std::io::Error),
}

impl WorkflowError {
    pub fn journal(source: std::io::Error) -> Self {
        Self::Journal(source)
    }

    pub fn catalog(source: std::io::Error) -> Self {
        Self::Catalog(source)
    }
}
