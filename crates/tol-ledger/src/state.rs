//! The ownership state machine.

use std::collections::BTreeMap;

use tol_types::{Address, Event, EventKind, TokenId};

use crate::error::LedgerError;

/// The derived token → owner mapping.
///
/// Absence of a key means the token does not exist: it was never minted,
/// or it was burned. The mapping is never persisted on its own; it is
/// rebuilt by replaying the record log, which stays the single source of
/// truth. Keys iterate in lexicographic token order, so anything derived
/// from the ledger is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    owners: BTreeMap<TokenId, Address>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single event, enforcing the ownership invariants.
    ///
    /// On error the mapping is left exactly as it was; an event is never
    /// partially applied.
    pub fn apply(&mut self, event: &Event) -> Result<(), LedgerError> {
        match event {
            Event::Mint { token_id, address } => {
                if self.owners.contains_key(token_id) {
                    return Err(LedgerError::DuplicateMint);
                }
                self.owners.insert(token_id.clone(), address.clone());
                Ok(())
            }
            Event::Burn { token_id } => match self.owners.remove(token_id) {
                Some(_) => Ok(()),
                None => Err(LedgerError::UnknownToken(EventKind::Burn)),
            },
            Event::Transfer { token_id, from, to } => {
                let Some(owner) = self.owners.get_mut(token_id) else {
                    return Err(LedgerError::UnknownToken(EventKind::Transfer));
                };
                if *owner != *from {
                    return Err(LedgerError::NotOwner);
                }
                *owner = to.clone();
                Ok(())
            }
            _ => Err(LedgerError::UnknownEventType),
        }
    }

    /// Current owner of `token_id`, if the token exists.
    pub fn owner_of(&self, token_id: &TokenId) -> Option<&Address> {
        self.owners.get(token_id)
    }

    /// Every token currently owned by `address`, in token id order.
    pub fn tokens_owned_by(&self, address: &Address) -> Vec<TokenId> {
        self.owners
            .iter()
            .filter(|(_, owner)| *owner == address)
            .map(|(token, _)| token.clone())
            .collect()
    }

    pub fn contains(&self, token_id: &TokenId) -> bool {
        self.owners.contains_key(token_id)
    }

    /// Number of live (minted, not yet burned) tokens.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Iterate over `(token, owner)` pairs in token id order.
    pub fn iter(&self) -> impl Iterator<Item = (&TokenId, &Address)> {
        self.owners.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(pairs: &[(&str, &str)]) -> Ledger {
        let mut ledger = Ledger::new();
        for (token, owner) in pairs {
            ledger.apply(&Event::mint(*token, *owner)).unwrap();
        }
        ledger
    }

    #[test]
    fn mint_inserts_the_owner() {
        let mut ledger = Ledger::new();
        ledger.apply(&Event::mint("T1", "A1")).unwrap();
        assert_eq!(ledger.owner_of(&"T1".into()), Some(&"A1".into()));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn minting_an_existing_token_is_rejected() {
        let mut ledger = ledger_with(&[("T1", "A1")]);
        let before = ledger.clone();

        let err = ledger.apply(&Event::mint("T1", "A2")).unwrap_err();
        assert_eq!(err, LedgerError::DuplicateMint);
        assert_eq!(err.to_string(), "attempt to mint an existing token");
        assert_eq!(ledger, before);
        assert_eq!(ledger.owner_of(&"T1".into()), Some(&"A1".into()));
    }

    #[test]
    fn burn_removes_the_token() {
        let mut ledger = ledger_with(&[("T1", "A1")]);
        ledger.apply(&Event::burn("T1")).unwrap();
        assert!(!ledger.contains(&"T1".into()));
        assert!(ledger.is_empty());
    }

    #[test]
    fn burning_a_missing_token_is_rejected() {
        let mut ledger = ledger_with(&[("T1", "A1")]);
        ledger.apply(&Event::burn("T1")).unwrap();

        let err = ledger.apply(&Event::burn("T1")).unwrap_err();
        assert_eq!(err, LedgerError::UnknownToken(EventKind::Burn));
        assert_eq!(err.to_string(), "attempt to burn non existent token");
    }

    #[test]
    fn transfer_reassigns_ownership() {
        let mut ledger = ledger_with(&[("T1", "A1")]);
        ledger.apply(&Event::transfer("T1", "A1", "A2")).unwrap();
        assert_eq!(ledger.owner_of(&"T1".into()), Some(&"A2".into()));
    }

    #[test]
    fn transfer_of_a_missing_token_is_rejected() {
        let mut ledger = Ledger::new();
        let err = ledger
            .apply(&Event::transfer("T1", "A1", "A2"))
            .unwrap_err();
        assert_eq!(err, LedgerError::UnknownToken(EventKind::Transfer));
        assert_eq!(err.to_string(), "attempt to transfer non existent token");
    }

    #[test]
    fn transfer_from_a_non_owner_is_rejected() {
        let mut ledger = ledger_with(&[("T1", "A1")]);
        ledger.apply(&Event::transfer("T1", "A1", "A2")).unwrap();

        // Replaying the same transfer must fail: A1 no longer owns T1.
        let err = ledger
            .apply(&Event::transfer("T1", "A1", "A2"))
            .unwrap_err();
        assert_eq!(err, LedgerError::NotOwner);
        assert_eq!(err.to_string(), "attempt to transfer unowned token");
        assert_eq!(ledger.owner_of(&"T1".into()), Some(&"A2".into()));
    }

    #[test]
    fn failed_events_leave_the_mapping_untouched() {
        let mut ledger = ledger_with(&[("T1", "A1"), ("T2", "A2")]);
        let before = ledger.clone();

        assert!(ledger.apply(&Event::mint("T2", "A9")).is_err());
        assert!(ledger.apply(&Event::burn("T9")).is_err());
        assert!(ledger.apply(&Event::transfer("T1", "A2", "A3")).is_err());
        assert_eq!(ledger, before);
    }

    #[test]
    fn tokens_owned_by_lists_holdings_in_id_order() {
        let ledger = ledger_with(&[("T3", "A1"), ("T1", "A2"), ("T2", "A2")]);

        let holdings = ledger.tokens_owned_by(&"A2".into());
        assert_eq!(holdings, vec![TokenId::from("T1"), TokenId::from("T2")]);

        assert_eq!(ledger.tokens_owned_by(&"A1".into()), vec![TokenId::from("T3")]);
        assert!(ledger.tokens_owned_by(&"A9".into()).is_empty());
    }

    #[test]
    fn iteration_is_in_token_order() {
        let ledger = ledger_with(&[("T2", "A1"), ("T1", "A1")]);
        let tokens: Vec<_> = ledger.iter().map(|(token, _)| token.clone()).collect();
        assert_eq!(tokens, vec![TokenId::from("T1"), TokenId::from("T2")]);
    }
}
