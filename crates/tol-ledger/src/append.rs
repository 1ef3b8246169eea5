use tol_types::{Event, Record};

use crate::codec;
use crate::error::LedgerError;
use crate::state::Ledger;

/// Result of validating a batch of events against an existing log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppendOutcome {
    /// The full record sequence: the existing records, in their original
    /// order, followed by one record per accepted event.
    pub records: Vec<Record>,
    /// The ledger as of the end of the batch.
    pub ledger: Ledger,
    /// How many new records the batch contributed.
    pub accepted: usize,
}

/// Validate a candidate batch against the current ledger and produce the
/// extended record sequence.
///
/// The batch is all-or-nothing. Events are applied in order to a working
/// copy of `ledger`, so later events in the batch see the effects of
/// earlier ones; the first event that fails to apply or encode aborts the
/// whole batch with that event's 0-based index, and the caller's ledger is
/// never touched. Nothing is persisted here: the caller writes the
/// returned sequence in a single operation, or writes nothing at all.
///
/// An empty batch is valid and yields the existing records unchanged with
/// `accepted == 0`.
pub fn append_events(
    records: &[Record],
    ledger: &Ledger,
    events: &[Event],
) -> Result<AppendOutcome, LedgerError> {
    if events.is_empty() {
        return Ok(AppendOutcome {
            records: records.to_vec(),
            ledger: ledger.clone(),
            accepted: 0,
        });
    }

    let mut working = ledger.clone();
    let mut appended = Vec::with_capacity(events.len());
    for (index, event) in events.iter().enumerate() {
        let record = working
            .apply(event)
            .and_then(|()| codec::encode(event))
            .map_err(|source| LedgerError::AtIndex {
                index,
                source: Box::new(source),
            })?;
        appended.push(record);
    }

    let mut extended = records.to_vec();
    extended.extend(appended);
    Ok(AppendOutcome {
        records: extended,
        ledger: working,
        accepted: events.len(),
    })
}

#[cfg(test)]
mod tests {
    use tol_types::EventKind;

    use super::*;
    use crate::replay;

    #[test]
    fn empty_batch_changes_nothing() {
        let records = vec![Record::mint("T1", "A1")];
        let ledger = replay(&records).unwrap();

        let outcome = append_events(&records, &ledger, &[]).unwrap();
        assert_eq!(outcome.records, records);
        assert_eq!(outcome.ledger, ledger);
        assert_eq!(outcome.accepted, 0);
    }

    #[test]
    fn accepted_events_extend_the_log_in_order() {
        let records = vec![Record::mint("T1", "A1")];
        let ledger = replay(&records).unwrap();

        let batch = vec![Event::mint("T2", "A2"), Event::burn("T1")];
        let outcome = append_events(&records, &ledger, &batch).unwrap();

        assert_eq!(
            outcome.records,
            vec![
                Record::mint("T1", "A1"),
                Record::mint("T2", "A2"),
                Record::burn("T1"),
            ]
        );
        assert_eq!(outcome.accepted, 2);
        assert_eq!(outcome.ledger.owner_of(&"T2".into()), Some(&"A2".into()));
        assert!(!outcome.ledger.contains(&"T1".into()));
    }

    #[test]
    fn later_events_see_earlier_effects() {
        // A mint and a transfer of the same token can share a batch.
        let batch = vec![
            Event::mint("T1", "A1"),
            Event::transfer("T1", "A1", "A2"),
        ];
        let outcome = append_events(&[], &Ledger::new(), &batch).unwrap();
        assert_eq!(outcome.ledger.owner_of(&"T1".into()), Some(&"A2".into()));
        assert_eq!(outcome.accepted, 2);
    }

    #[test]
    fn first_failure_rejects_the_whole_batch() {
        let records = vec![Record::mint("T1", "A1")];
        let ledger = replay(&records).unwrap();

        let batch = vec![
            Event::mint("T2", "A2"),
            Event::burn("T9"),
            Event::mint("T3", "A3"),
        ];
        let err = append_events(&records, &ledger, &batch).unwrap_err();
        assert_eq!(
            err,
            LedgerError::AtIndex {
                index: 1,
                source: Box::new(LedgerError::UnknownToken(EventKind::Burn)),
            }
        );
        assert_eq!(
            err.to_string(),
            "error at index 1: attempt to burn non existent token"
        );
        // Nothing observable changed: the input ledger still replays from
        // the input records alone.
        assert_eq!(replay(&records).unwrap(), ledger);
    }

    #[test]
    fn batch_conflicting_with_itself_is_rejected() {
        let batch = vec![Event::mint("T1", "A1"), Event::mint("T1", "A2")];
        let err = append_events(&[], &Ledger::new(), &batch).unwrap_err();
        assert_eq!(
            err.to_string(),
            "error at index 1: attempt to mint an existing token"
        );
    }

    #[test]
    fn validation_runs_against_the_existing_ledger() {
        let records = vec![Record::mint("T1", "A1")];
        let ledger = replay(&records).unwrap();

        // A1 owns T1, so a transfer claiming A2 as sender must fail.
        let err = append_events(
            &records,
            &ledger,
            &[Event::transfer("T1", "A2", "A3")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            LedgerError::AtIndex {
                index: 0,
                source: Box::new(LedgerError::NotOwner),
            }
        );
    }

    #[test]
    fn extended_sequence_replays_to_the_outcome_ledger() {
        let records = vec![Record::mint("T1", "A1"), Record::mint("T2", "A2")];
        let ledger = replay(&records).unwrap();

        let batch = vec![
            Event::transfer("T2", "A2", "A1"),
            Event::mint("T3", "A3"),
            Event::burn("T1"),
        ];
        let outcome = append_events(&records, &ledger, &batch).unwrap();
        assert_eq!(replay(&outcome.records).unwrap(), outcome.ledger);
    }
}
