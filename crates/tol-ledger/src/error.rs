use tol_types::EventKind;

/// Errors produced by decoding, validating, or replaying events.
///
/// Batch and replay failures wrap the underlying error together with the
/// 0-based index of the offending item, so a caller sees both where and
/// why a sequence went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// A record carried a known event type but was missing a required field.
    #[error("incomplete {0} event")]
    IncompleteEvent(EventKind),

    /// A record's type tag matched no known event type.
    #[error("invalid event")]
    InvalidEvent,

    /// An event variant this build does not know how to handle.
    #[error("unknown event type")]
    UnknownEventType,

    /// Mint of a token id that already exists in the ledger.
    #[error("attempt to mint an existing token")]
    DuplicateMint,

    /// Burn or transfer of a token the ledger does not contain.
    #[error("attempt to {0} non existent token")]
    UnknownToken(EventKind),

    /// Transfer whose `from` address is not the token's current owner.
    #[error("attempt to transfer unowned token")]
    NotOwner,

    /// An item in a candidate batch failed validation or encoding.
    #[error("error at index {index}: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<LedgerError>,
    },

    /// An item in a batch could not be converted back into a record.
    #[error("error converting item at index {index}: {source}")]
    ConvertAtIndex {
        index: usize,
        #[source]
        source: Box<LedgerError>,
    },

    /// A stored record failed to replay. The log itself is suspect: either
    /// it was corrupted after the fact or it was written by something that
    /// skipped validation.
    #[error("error in ledger at index {index}: {source}")]
    ReplayAtIndex {
        index: usize,
        #[source]
        source: Box<LedgerError>,
    },
}
