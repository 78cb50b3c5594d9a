#![forbid(unsafe_code)]

//! # Primecheck
//!
//! Trial-division primality checking: a pure library predicate plus the
//! command layer the `primecheck` binary dispatches into.
//!
//! The predicate is total over `i64`: negative candidates, zero, and one
//! are simply not prime. It is referentially transparent, with no state,
//! no I/O, and no error paths. Input validation and result rendering live
//! in the command layer, never in the predicate.
//!
//! ## Example
//!
//! ```rust
//! use primecheck::is_prime;
//!
//! assert!(is_prime(29));
//! assert!(!is_prime(100));
//! ```

pub mod commands;
pub mod error;
pub mod primality;

// Re-exports
pub use commands::{execute_check, parse_candidate, CheckOptions, CheckReport};
pub use error::{PrimecheckError, Result};
pub use primality::is_prime;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
