//! High-level API for the Token Ownership Ledger.
//!
//! Provides a unified entry point for applications embedding TOL: open a
//! log, ingest batches of transitions, query ownership. This is the only
//! crate an embedder normally needs.

pub mod error;
pub mod processor;

pub use error::{SdkError, SdkResult};
pub use processor::{IngestReport, LedgerSummary, LoadedLog, Tol};

// Re-export key types
pub use tol_ledger::{Ledger, LedgerError};
pub use tol_store::{FileLogStore, InMemoryLogStore, LogStore, StoreError};
pub use tol_types::{Address, Event, EventKind, Record, TokenId, TypeError};
