use std::path::PathBuf;

/// Errors from log store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The log exists but contains nothing at all.
    ///
    /// Distinct from an absent log (a fresh start): a zero-length file
    /// means something truncated it, and guessing "empty sequence" could
    /// silently discard history.
    #[error("log file {} exists but is empty", path.display())]
    EmptyLog { path: PathBuf },

    /// The log exists but its content is not a valid record sequence.
    #[error("corrupt log file {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// Serialization failure while preparing records for storage.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
