use std::path::PathBuf;

use tracing::debug;

use tol_ledger::{append_events, decode_batch, replay, Ledger};
use tol_store::{FileLogStore, LogStore};
use tol_types::{Address, Event, Record, TokenId};

use crate::error::SdkResult;

/// A loaded log: the stored records plus the ledger replayed from them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedLog {
    /// The full record sequence, oldest first.
    pub records: Vec<Record>,
    /// The ownership mapping as of the last record.
    pub ledger: Ledger,
}

/// Outcome of a successful ingest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IngestReport {
    /// Events accepted and appended by this call.
    pub accepted: usize,
    /// Records in the log after the call.
    pub total_records: usize,
    /// Live tokens after the call.
    pub live_tokens: usize,
}

/// Totals for an existing log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerSummary {
    /// Records in the log.
    pub records: usize,
    /// Live (minted, not yet burned) tokens.
    pub live_tokens: usize,
}

/// High-level TOL API: one log store, the full pipeline on top of it.
///
/// Every operation re-reads the log and replays it from scratch, so the
/// log stays the single source of truth and there is no cached state to
/// drift. The type assumes single-process ownership of the log; see the
/// `tol-store` contract.
pub struct Tol<S: LogStore> {
    store: S,
}

impl Tol<FileLogStore> {
    /// A ledger backed by the log file at `path`.
    ///
    /// Nothing is touched on disk until the first operation; a missing
    /// file is a valid empty ledger.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_store(FileLogStore::new(path))
    }
}

impl<S: LogStore> Tol<S> {
    /// A ledger on top of an arbitrary store backend.
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    // ---- Loading ----

    /// Read the log and rebuild the ownership mapping by full replay.
    ///
    /// An absent log loads as an empty sequence. A log that exists but
    /// fails to read or replay is fatal to the calling operation.
    pub fn load(&self) -> SdkResult<LoadedLog> {
        let records = self.store.read()?.unwrap_or_default();
        let ledger = replay(&records)?;
        debug!(records = records.len(), live = ledger.len(), "log loaded");
        Ok(LoadedLog { records, ledger })
    }

    // ---- Ingest ----

    /// Parse raw input text and ingest the result as a single batch.
    pub fn ingest_text(&self, text: &str) -> SdkResult<IngestReport> {
        let records = Record::parse_input(text)?;
        self.ingest_records(&records)
    }

    /// Decode candidate records and ingest them as a single batch.
    pub fn ingest_records(&self, records: &[Record]) -> SdkResult<IngestReport> {
        let events = decode_batch(records).into_result()?;
        self.ingest_events(&events)
    }

    /// Validate a batch of events against the current ledger and, if all
    /// of them pass, append them to the log in one write.
    ///
    /// All-or-nothing: the first failing event aborts the whole batch and
    /// the log is left exactly as it was. An empty batch reports zero
    /// accepted and never writes.
    pub fn ingest_events(&self, events: &[Event]) -> SdkResult<IngestReport> {
        let loaded = self.load()?;

        if events.is_empty() {
            debug!("empty batch, log untouched");
            return Ok(IngestReport {
                accepted: 0,
                total_records: loaded.records.len(),
                live_tokens: loaded.ledger.len(),
            });
        }

        let outcome = append_events(&loaded.records, &loaded.ledger, events)?;
        self.store.write(&outcome.records)?;
        debug!(
            accepted = outcome.accepted,
            total = outcome.records.len(),
            "batch appended"
        );
        Ok(IngestReport {
            accepted: outcome.accepted,
            total_records: outcome.records.len(),
            live_tokens: outcome.ledger.len(),
        })
    }

    // ---- Queries ----

    /// Current owner of `token_id`, if the token exists.
    pub fn owner_of(&self, token_id: &TokenId) -> SdkResult<Option<Address>> {
        let loaded = self.load()?;
        Ok(loaded.ledger.owner_of(token_id).cloned())
    }

    /// Every token currently owned by `address`, in token id order.
    pub fn tokens_owned_by(&self, address: &Address) -> SdkResult<Vec<TokenId>> {
        let loaded = self.load()?;
        Ok(loaded.ledger.tokens_owned_by(address))
    }

    /// The full stored record sequence, oldest first.
    pub fn history(&self) -> SdkResult<Vec<Record>> {
        let loaded = self.load()?;
        Ok(loaded.records)
    }

    /// Totals for the current log.
    pub fn summary(&self) -> SdkResult<LedgerSummary> {
        let loaded = self.load()?;
        Ok(LedgerSummary {
            records: loaded.records.len(),
            live_tokens: loaded.ledger.len(),
        })
    }

    // ---- Administration ----

    /// Discard all history: replace the log with an explicitly empty
    /// sequence. This is the only way to remove accepted records.
    pub fn reset(&self) -> SdkResult<()> {
        self.store.reset()?;
        debug!("log reset");
        Ok(())
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
