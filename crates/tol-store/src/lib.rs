//! Storage backends for the Token Ownership Ledger record log.
//!
//! The log is the only durable artifact in TOL: one ordered sequence of
//! records, replaced wholesale on every accepted append. The ownership
//! mapping is always derived from it by replay and is never stored.
//!
//! # Backends
//!
//! All backends implement the [`LogStore`] trait:
//!
//! - [`FileLogStore`] -- a pretty-printed JSON array on disk, replaced
//!   atomically via a write-then-rename
//! - [`InMemoryLogStore`] -- for tests and embedding
//!
//! # Contract
//!
//! 1. An absent log is a fresh start and reads as `Ok(None)`.
//! 2. A blank log file is an error, not an empty sequence: something
//!    truncated it, and guessing would silently discard history.
//! 3. `write` replaces the whole sequence in a single operation.
//! 4. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use file::FileLogStore;
pub use memory::InMemoryLogStore;
pub use traits::LogStore;
