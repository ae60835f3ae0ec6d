//! Error types for the beacon-store crate.
//!
//! All storage operations return [`StoreError`] via [`StoreResult`].
//! The set is closed and non-retryable at this layer; retry policy, if
//! any, belongs to the caller. A missing row or null column is *not* an
//! error — it surfaces as `None` at the executor and binding level.

use thiserror::Error;

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in the persistence client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The database file could not be opened or created.
    #[error("database can't be open")]
    DatabaseCantBeOpen,

    /// SQL text failed to compile into a prepared statement. Also covers
    /// malformed SQL and references to missing tables or columns.
    #[error("statement preparation failed")]
    StatementPreparationFailed,

    /// Stepping the statement did not report completion.
    #[error("step execution failed")]
    StepExecutionFailed,

    /// Result-column data could not be read. Reserved: extraction
    /// currently reports absence instead.
    #[error("data extraction failed")]
    DataExtractionFailed,

    /// A query-level operation above single-step granularity failed,
    /// such as binding a parameter.
    #[error("query failed")]
    QueryFailed,
}
