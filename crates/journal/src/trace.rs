//! Execution tracing for journaled operations.

use ordermill_core::WorkflowResult;

use crate::Journal;

/// Run `op`, then append the generic `Executed <name>` trace record.
///
/// Every tracked workflow operation goes through this wrapper, so each call
/// produces a uniform trace line after whatever records the operation wrote
/// on its own. A failed operation short-circuits without a trace record.
pub fn traced<T>(
    journal: &Journal,
    name: &str,
    op: impl FnOnce() -> WorkflowResult<T>,
) -> WorkflowResult<T> {
    let out = op()?;
    journal.append(&format!("Executed {name}"))?;
    Ok(out)
}
