//! Core ledger logic for the Token Ownership Ledger.
//!
//! Everything here is pure: no I/O, no clocks, no globals. The crate
//! provides:
//! - The record ↔ event codec, with collect-all batch helpers
//!   ([`decode_batch`], [`encode_batch`])
//! - The ownership state machine ([`Ledger`])
//! - Deterministic replay of a stored record sequence ([`replay`])
//! - The all-or-nothing append pipeline ([`append_events`])
//!
//! Storage lives in `tol-store`; the `tol-sdk` crate wires the two
//! together.

pub mod append;
pub mod codec;
pub mod error;
pub mod replay;
pub mod state;

pub use append::{append_events, AppendOutcome};
pub use codec::{decode, decode_batch, encode, encode_batch, DecodeReport, EncodeReport};
pub use error::LedgerError;
pub use replay::replay;
pub use state::Ledger;
