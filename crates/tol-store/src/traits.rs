use tol_types::Record;

use crate::error::StoreResult;

/// Durable storage for the append-only record log.
///
/// All implementations must satisfy these invariants:
/// - The log is one ordered sequence of records; `write` replaces the
///   whole sequence in a single operation.
/// - `read` distinguishes "no log yet" (`Ok(None)`, a fresh start) from
///   "log present but unreadable" (`Err`, fatal to whatever needed it).
/// - Single writer. TOL assumes one process owns the log; coordinating
///   concurrent writers is the embedder's problem.
/// - All I/O errors are propagated, never silently ignored.
pub trait LogStore: Send + Sync {
    /// Read the full record sequence in storage order.
    ///
    /// Returns `Ok(None)` if no log exists yet. Returns `Err` if the log
    /// exists but cannot be read or parsed — including a blank file, which
    /// is reported as `StoreError::EmptyLog` rather than guessed to mean
    /// an empty sequence.
    fn read(&self) -> StoreResult<Option<Vec<Record>>>;

    /// Replace the log content with `records`, in order.
    fn write(&self, records: &[Record]) -> StoreResult<()>;

    /// Reset the log to an explicitly empty sequence.
    ///
    /// After a reset, `read` returns `Ok(Some(vec![]))`, not `Ok(None)`:
    /// the log exists and records that its history was deliberately
    /// cleared.
    fn reset(&self) -> StoreResult<()> {
        self.write(&[])
    }
}
