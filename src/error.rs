use thiserror::Error;

/// Errors surfaced by connection management and batch submission.
///
/// Engine failures inside a running batch never show up here; they are
/// captured per statement in [`StatementOutcome`](crate::StatementOutcome).
#[derive(Debug, Error)]
pub enum SqliteBatchError {
    /// A write-classified statement was submitted in read-only mode. The
    /// statement never reaches the engine; the `Display` text of this variant
    /// is the exact error string recorded in the statement's outcome.
    #[error("read-only: not authorized")]
    ReadOnlyViolation,

    #[error(transparent)]
    Engine(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Malformed batch input, e.g. a request with no SQL text. The whole call
    /// fails before any statement executes.
    #[error("Contract violation: {0}")]
    ContractViolation(String),
}
