use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use tol_types::Record;

use crate::error::{StoreError, StoreResult};
use crate::traits::LogStore;

/// File-backed log store.
///
/// The log is a single pretty-printed JSON array so it can be inspected
/// and diffed by hand. Writes go to a sibling `.tmp` file which is then
/// renamed over the log, so a crash mid-write leaves the previous content
/// intact and a reader never observes a half-written file.
#[derive(Clone, Debug)]
pub struct FileLogStore {
    path: PathBuf,
}

impl FileLogStore {
    /// Create a store backed by the file at `path`. The file itself is
    /// not touched until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogStore for FileLogStore {
    fn read(&self) -> StoreResult<Option<Vec<Record>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no log file yet");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return Err(StoreError::EmptyLog {
                path: self.path.clone(),
            });
        }

        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(|err| StoreError::Corrupt {
                path: self.path.clone(),
                reason: err.to_string(),
            })?;

        debug!(path = %self.path.display(), records = records.len(), "log read");
        Ok(Some(records))
    }

    fn write(&self, records: &[Record]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut data = serde_json::to_vec_pretty(records)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        data.push(b'\n');

        let tmp = self.path.with_extension("tmp");
        {
            let mut file = File::create(&tmp)?;
            file.write_all(&data)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), records = records.len(), "log written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileLogStore {
        FileLogStore::new(dir.path().join("stream-log.json"))
    }

    #[test]
    fn absent_log_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let records = vec![Record::mint("T1", "A1"), Record::transfer("T1", "A1", "A2")];
        store.write(&records).unwrap();
        assert_eq!(store.read().unwrap(), Some(records));
    }

    #[test]
    fn write_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.write(&[Record::mint("T1", "A1")]).unwrap();
        store.write(&[Record::mint("T2", "A2")]).unwrap();
        assert_eq!(store.read().unwrap(), Some(vec![Record::mint("T2", "A2")]));
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileLogStore::new(dir.path().join("nested/deeper/log.json"));
        store.write(&[Record::burn("T1")]).unwrap();
        assert_eq!(store.read().unwrap(), Some(vec![Record::burn("T1")]));
    }

    #[test]
    fn blank_file_is_an_error_not_an_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "  \n").unwrap();
        let err = store.read().unwrap_err();
        assert!(matches!(err, StoreError::EmptyLog { .. }));
        assert!(err.to_string().contains("exists but is empty"));
    }

    #[test]
    fn unparseable_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "{ not a record sequence").unwrap();
        let err = store.read().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert!(err.to_string().contains("corrupt log file"));
    }

    #[test]
    fn reset_leaves_an_explicitly_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.write(&[Record::mint("T1", "A1")]).unwrap();
        store.reset().unwrap();
        assert_eq!(store.read().unwrap(), Some(vec![]));

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content.trim(), "[]");
    }

    #[test]
    fn log_file_is_a_readable_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.write(&[Record::mint("T1", "A1")]).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with('['));
        assert!(content.contains("\"type\": \"Mint\""));
        assert!(content.contains("\"tokenId\": \"T1\""));
    }

    #[test]
    fn no_temp_file_lingers_after_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.write(&[Record::mint("T1", "A1")]).unwrap();
        assert!(!store.path().with_extension("tmp").exists());
    }
}
