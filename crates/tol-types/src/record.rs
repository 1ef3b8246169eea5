use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::identity::{Address, TokenId};

/// Wire and storage form of one ownership transition.
///
/// A record is the flat shape that travels and persists: a `type` tag plus
/// the token id, with the owner fields present only when the tag requires
/// them. The tag is a free-form string so that unknown tags survive a
/// storage read and fail at decode time ("invalid event") rather than at
/// parse time. Records are the only form ever persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(rename = "type")]
    pub kind: String,
    pub token_id: TokenId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
}

impl Record {
    /// A well-formed mint record.
    pub fn mint(token_id: impl Into<TokenId>, address: impl Into<Address>) -> Self {
        Self {
            kind: "Mint".to_owned(),
            token_id: token_id.into(),
            address: Some(address.into()),
            from: None,
            to: None,
        }
    }

    /// A well-formed burn record.
    pub fn burn(token_id: impl Into<TokenId>) -> Self {
        Self {
            kind: "Burn".to_owned(),
            token_id: token_id.into(),
            address: None,
            from: None,
            to: None,
        }
    }

    /// A well-formed transfer record.
    pub fn transfer(
        token_id: impl Into<TokenId>,
        from: impl Into<Address>,
        to: impl Into<Address>,
    ) -> Self {
        Self {
            kind: "Transfer".to_owned(),
            token_id: token_id.into(),
            address: None,
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }

    /// Parse raw ingested text into an ordered record batch.
    ///
    /// The text is sniffed after trimming and after stripping one surrounding
    /// single-quote pair (a shell-quoting artifact): a leading `[` means an
    /// array of records, a leading `{` a single record, anything else fails
    /// with "not valid input". Text that fails to parse and contains single
    /// quotes is retried with them normalized to double quotes, so
    /// `{'type':'Mint','tokenId':'T9'}` is accepted; valid JSON is never
    /// altered.
    pub fn parse_input(text: &str) -> Result<Vec<Self>, TypeError> {
        let trimmed = text.trim();
        let body = trimmed
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix('\''))
            .unwrap_or(trimmed);

        match body.as_bytes().first() {
            Some(b'[') => parse_json::<Vec<Self>>(body),
            Some(b'{') => parse_json::<Self>(body).map(|record| vec![record]),
            _ => Err(TypeError::NotValidInput),
        }
    }
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, TypeError> {
    match serde_json::from_str(body) {
        Ok(value) => Ok(value),
        Err(_) if body.contains('\'') => {
            serde_json::from_str(&body.replace('\'', "\"")).map_err(|_| TypeError::NotValidInput)
        }
        Err(_) => Err(TypeError::NotValidInput),
    }
}
