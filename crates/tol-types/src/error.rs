use thiserror::Error;

/// Errors produced while parsing ingested text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// The text is not a recognizable record or record-array shape.
    #[error("not valid input")]
    NotValidInput,
}
