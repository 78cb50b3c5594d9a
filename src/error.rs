//! Error types
//!
//! The primality predicate itself is total and never fails; the only
//! error condition in the crate lives at the argument boundary, where a
//! raw CLI value may fail to parse as an integer.

use thiserror::Error;

/// Errors raised at the crate's input boundary
#[derive(Debug, Error)]
pub enum PrimecheckError {
    /// The supplied value does not parse as a signed 64-bit integer
    #[error("invalid argument: `{input}` is not an integer")]
    InvalidArgument {
        /// The raw value as received
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Convenience result alias for boundary operations
pub type Result<T> = std::result::Result<T, PrimecheckError>;
