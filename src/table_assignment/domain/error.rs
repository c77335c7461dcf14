//! Error types for table assignment domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing table assignment domain values.
///
/// Every variant represents malformed caller input and is never retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableAssignmentDomainError {
    /// The party size is zero, negative or too large to seat.
    #[error("invalid party size {0}, expected a positive integer")]
    InvalidPartySize(i64),

    /// The restaurant scope is empty after trimming.
    #[error("restaurant scope must not be empty")]
    EmptyScope,

    /// The table capacity is zero.
    #[error("invalid table capacity {0}, expected a positive integer")]
    InvalidCapacity(u32),

    /// The table name is empty after trimming.
    #[error("table name must not be empty")]
    EmptyTableName,
}

/// Error returned while parsing table statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown table status: {0}")]
pub struct ParseTableStatusError(pub String);
