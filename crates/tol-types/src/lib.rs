//! Foundation types for the Token Ownership Ledger (TOL).
//!
//! This crate provides the vocabulary shared by every other TOL crate.
//!
//! # Key Types
//!
//! - [`TokenId`] / [`Address`] — opaque string identities for tokens and owners
//! - [`Record`] — the flat wire/storage form of one transition, and the
//!   parser for raw ingested text
//! - [`Event`] — the typed in-memory form (Mint / Burn / Transfer)
//! - [`EventKind`] — the kind tag shared by records and events

pub mod error;
pub mod event;
pub mod identity;
pub mod record;

pub use error::TypeError;
pub use event::{Event, EventKind};
pub use identity::{Address, TokenId};
pub use record::Record;
