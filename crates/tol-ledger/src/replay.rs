use tol_types::Record;

use crate::codec;
use crate::error::LedgerError;
use crate::state::Ledger;

/// Rebuild the ownership ledger by replaying stored records in order.
///
/// Replay starts from an empty mapping, decodes each record, and applies
/// the event. The first record that fails either step aborts with its
/// 0-based index: historical content was validated when it was appended,
/// so a replay failure means the log is corrupt or was written by
/// something that skipped validation, and the resulting ledger cannot be
/// trusted. An empty sequence is a valid log and replays to an empty
/// ledger.
///
/// Cost is linear in the length of the log and is paid on every load; the
/// mapping is never persisted, so the log remains the single source of
/// truth.
pub fn replay(records: &[Record]) -> Result<Ledger, LedgerError> {
    let mut ledger = Ledger::new();
    for (index, record) in records.iter().enumerate() {
        if let Err(source) = codec::decode(record).and_then(|event| ledger.apply(&event)) {
            return Err(LedgerError::ReplayAtIndex {
                index,
                source: Box::new(source),
            });
        }
    }
    Ok(ledger)
}
