//! Error types for Arbor

use thiserror::Error;

use crate::kind::Kind;

/// Arbor error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArborError {
    /// Root value handed to the entry point was not a container.
    #[error("root value must be a mapping or sequence, got {kind}")]
    InvalidRoot {
        /// Classified kind of the rejected root
        kind: Kind,
    },
    /// Read of a key or index that is not present.
    #[error("no entry '{key}' in {kind}")]
    KeyNotFound {
        /// The missing key, or the index rendered as text
        key: String,
        /// Kind of the container the read went through
        kind: Kind,
    },
    /// Asked to wrap a value that has no proxy representation.
    #[error("cannot wrap {kind} value")]
    CannotWrap {
        /// Classified kind of the offending value
        kind: Kind,
    },
    /// Splice offset fell before the start of the sequence.
    #[error("offset {offset} is before the start of a sequence of length {len}")]
    OffsetOutOfRange {
        /// Offset as supplied by the caller
        offset: i64,
        /// Sequence length at the time of the call
        len: usize,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ArborError>;
