use std::fmt;

use crate::identity::{Address, TokenId};

/// Kind tag of a transition event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Mint,
    Burn,
    Transfer,
}

impl EventKind {
    /// The `type` value used on the wire for this kind.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Mint => "Mint",
            Self::Burn => "Burn",
            Self::Transfer => "Transfer",
        }
    }
}

impl fmt::Display for EventKind {
    /// Lowercase form, as used in diagnostics ("incomplete mint event").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mint => f.write_str("mint"),
            Self::Burn => f.write_str("burn"),
            Self::Transfer => f.write_str("transfer"),
        }
    }
}

/// A validated ownership transition for a single token.
///
/// Events are self-contained facts: each names the one token it affects and
/// never references the ledger. The enum is non-exhaustive — downstream
/// matches must carry a fallback arm so new transition kinds cannot silently
/// fall through an old match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event {
    /// Bring `token_id` into existence, owned by `address`.
    Mint { token_id: TokenId, address: Address },
    /// Remove `token_id` from existence.
    Burn { token_id: TokenId },
    /// Move `token_id` from its current owner `from` to `to`.
    Transfer {
        token_id: TokenId,
        from: Address,
        to: Address,
    },
}

impl Event {
    pub fn mint(token_id: impl Into<TokenId>, address: impl Into<Address>) -> Self {
        Self::Mint {
            token_id: token_id.into(),
            address: address.into(),
        }
    }

    pub fn burn(token_id: impl Into<TokenId>) -> Self {
        Self::Burn {
            token_id: token_id.into(),
        }
    }

    pub fn transfer(
        token_id: impl Into<TokenId>,
        from: impl Into<Address>,
        to: impl Into<Address>,
    ) -> Self {
        Self::Transfer {
            token_id: token_id.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// The kind tag of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Mint { .. } => EventKind::Mint,
            Self::Burn { .. } => EventKind::Burn,
            Self::Transfer { .. } => EventKind::Transfer,
        }
    }

    /// The token this event is about. Every event carries exactly one.
    pub fn token_id(&self) -> &TokenId {
        match self {
            Self::Mint { token_id, .. }
            | Self::Burn { token_id }
            | Self::Transfer { token_id, .. } => token_id,
        }
    }
}
