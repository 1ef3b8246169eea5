use std::sync::RwLock;

use tol_types::Record;

use crate::error::StoreResult;
use crate::traits::LogStore;

/// In-memory log store.
///
/// Intended for tests and embedding. `None` models a log that does not
/// exist yet, mirroring the absent-file case of [`crate::FileLogStore`].
/// Records are cloned on read and write.
pub struct InMemoryLogStore {
    records: RwLock<Option<Vec<Record>>>,
}

impl InMemoryLogStore {
    /// Create a store with no log at all.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(None),
        }
    }

    /// Create a store pre-seeded with a record sequence.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(Some(records)),
        }
    }

    /// Number of records currently stored (0 if no log exists).
    pub fn len(&self) -> usize {
        self.records
            .read()
            .expect("lock poisoned")
            .as_ref()
            .map_or(0, Vec::len)
    }

    /// Returns `true` if no log exists or the log has no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop the log entirely, back to the "does not exist" state.
    pub fn clear(&self) {
        *self.records.write().expect("lock poisoned") = None;
    }
}

impl Default for InMemoryLogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LogStore for InMemoryLogStore {
    fn read(&self) -> StoreResult<Option<Vec<Record>>> {
        Ok(self.records.read().expect("lock poisoned").clone())
    }

    fn write(&self, records: &[Record]) -> StoreResult<()> {
        *self.records.write().expect("lock poisoned") = Some(records.to_vec());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryLogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryLogStore")
            .field("records", &self.len())
            .finish()
    }
}
