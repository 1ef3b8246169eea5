use thiserror::Error;

/// Errors surfaced by the high-level API.
///
/// Core messages pass through unchanged: a caller printing the error gets
/// the single descriptive line the underlying layer produced, index
/// annotations included.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Raw input text could not be parsed into records at all.
    #[error(transparent)]
    Input(#[from] tol_types::TypeError),

    /// Decode, validation, or replay failure from the core.
    #[error(transparent)]
    Ledger(#[from] tol_ledger::LedgerError),

    /// Storage failure, surfaced verbatim.
    #[error(transparent)]
    Store(#[from] tol_store::StoreError),
}

pub type SdkResult<T> = Result<T, SdkError>;
