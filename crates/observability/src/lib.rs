//! Process diagnostics setup for ordermill binaries.
//!
//! Distinct from the domain journal: the journal is a product artifact, this
//! is operator-facing tracing output.

pub mod tracing;

/// Initialize process-wide tracing.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
