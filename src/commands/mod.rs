//! Commands
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod check;

pub use check::{execute_check, parse_candidate, CheckOptions, CheckReport};
