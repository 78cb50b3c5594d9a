//! Check command
//!
//! Parses the raw candidate argument, runs the primality predicate, and
//! renders the result. Exit status is 0 whether or not the candidate is
//! prime; only a malformed argument fails the command.

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::error::PrimecheckError;
use crate::primality::is_prime;

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Raw candidate value as received from the command line
    pub candidate: String,
    /// Output as JSON (default: human-readable)
    pub json: bool,
}

/// Result of checking one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// The candidate that was checked
    pub candidate: i64,
    /// Whether the candidate is prime
    pub prime: bool,
}

/// Parse a raw candidate string into an `i64`.
///
/// Tolerates surrounding whitespace. Anything that does not parse as a
/// signed 64-bit integer is rejected with
/// [`PrimecheckError::InvalidArgument`] before the predicate ever runs.
pub fn parse_candidate(raw: &str) -> crate::error::Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|source| PrimecheckError::InvalidArgument {
            input: raw.to_string(),
            source,
        })
}

/// Execute the check command
pub fn execute_check(options: CheckOptions) -> Result<()> {
    let candidate = parse_candidate(&options.candidate)?;
    tracing::debug!(candidate, "checking primality");

    let report = CheckReport {
        candidate,
        prime: is_prime(candidate),
    };

    if options.json {
        println!("{}", serde_json::to_string(&report)?);
    } else if report.prime {
        println!("{} {} is prime", style("✓").green(), report.candidate);
    } else {
        println!("{} {} is not prime", style("✗").red(), report.candidate);
    }

    Ok(())
}
