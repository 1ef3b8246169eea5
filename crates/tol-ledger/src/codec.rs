//! Conversion between stored records and typed events.
//!
//! Decoding dispatches on the record's free-form type tag and checks that
//! every field the event shape needs is present. Encoding is the inverse
//! and only fails for event variants this build does not know, which the
//! compiler forces us to account for because [`Event`] is non-exhaustive.

use tol_types::{Event, EventKind, Record};

use crate::error::LedgerError;

/// Decode a single stored record into its typed event.
///
/// Fields beyond the ones the event shape needs are ignored, so a burn
/// record that also carries an address still decodes as a burn.
pub fn decode(record: &Record) -> Result<Event, LedgerError> {
    match record.kind.as_str() {
        "Mint" => match &record.address {
            Some(address) => Ok(Event::Mint {
                token_id: record.token_id.clone(),
                address: address.clone(),
            }),
            None => Err(LedgerError::IncompleteEvent(EventKind::Mint)),
        },
        "Burn" => Ok(Event::Burn {
            token_id: record.token_id.clone(),
        }),
        "Transfer" => match (&record.from, &record.to) {
            (Some(from), Some(to)) => Ok(Event::Transfer {
                token_id: record.token_id.clone(),
                from: from.clone(),
                to: to.clone(),
            }),
            _ => Err(LedgerError::IncompleteEvent(EventKind::Transfer)),
        },
        _ => Err(LedgerError::InvalidEvent),
    }
}

/// Encode a typed event back into its storage record.
pub fn encode(event: &Event) -> Result<Record, LedgerError> {
    match event {
        Event::Mint { token_id, address } => Ok(Record::mint(token_id.clone(), address.clone())),
        Event::Burn { token_id } => Ok(Record::burn(token_id.clone())),
        Event::Transfer { token_id, from, to } => Ok(Record::transfer(
            token_id.clone(),
            from.clone(),
            to.clone(),
        )),
        _ => Err(LedgerError::UnknownEventType),
    }
}

/// Outcome of decoding a whole batch of records.
///
/// Decoding keeps going past failures: `events` holds every record that
/// decoded, in input order, and `error` holds the first failure annotated
/// with its 0-based index. Callers that need all-or-nothing semantics must
/// gate on [`DecodeReport::into_result`] instead of using `events` directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeReport {
    pub events: Vec<Event>,
    pub error: Option<LedgerError>,
}

impl DecodeReport {
    /// The decoded events, or the first error if any record failed.
    pub fn into_result(self) -> Result<Vec<Event>, LedgerError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.events),
        }
    }
}

/// Decode every record in `records`, collecting successes and the first
/// failure.
pub fn decode_batch(records: &[Record]) -> DecodeReport {
    let mut events = Vec::with_capacity(records.len());
    let mut error = None;
    for (index, record) in records.iter().enumerate() {
        match decode(record) {
            Ok(event) => events.push(event),
            Err(source) => {
                if error.is_none() {
                    error = Some(LedgerError::AtIndex {
                        index,
                        source: Box::new(source),
                    });
                }
            }
        }
    }
    DecodeReport { events, error }
}

/// Outcome of encoding a whole batch of events. Same collect-all,
/// report-first shape as [`DecodeReport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeReport {
    pub records: Vec<Record>,
    pub error: Option<LedgerError>,
}

impl EncodeReport {
    /// The encoded records, or the first error if any event failed.
    pub fn into_result(self) -> Result<Vec<Record>, LedgerError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.records),
        }
    }
}

/// Encode every event in `events`, collecting successes and the first
/// failure.
pub fn encode_batch(events: &[Event]) -> EncodeReport {
    let mut records = Vec::with_capacity(events.len());
    let mut error = None;
    for (index, event) in events.iter().enumerate() {
        match encode(event) {
            Ok(record) => records.push(record),
            Err(source) => {
                if error.is_none() {
                    error = Some(LedgerError::ConvertAtIndex {
                        index,
                        source: Box::new(source),
                    });
                }
            }
        }
    }
    EncodeReport { records, error }
}
