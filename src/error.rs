//! Error types for grapheme-cluster addressing.

use thiserror::Error;

/// Errors raised by the fail-fast string operations.
///
/// The clamping operations never produce these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("Negative cluster ordinal: {value}")]
    NegativeOrdinal { value: i64 },

    #[error("Negative cluster length: {value}")]
    NegativeLength { value: i64 },

    #[error("Cluster ordinal {ordinal} out of range for {count} clusters")]
    OrdinalOutOfRange { ordinal: usize, count: usize },
}

/// Result type for grapheme-cluster addressing.
pub type TextResult<T> = std::result::Result<T, TextError>;
