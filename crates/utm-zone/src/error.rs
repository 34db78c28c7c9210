//! Error types for zone lookups.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors that can occur when converting to a [`Zone`](crate::Zone).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    /// The code is not a WGS 84 UTM SRID.
    #[error("SRID {0} is not a UTM zone (expected 32601-32660 or 32701-32760)")]
    InvalidSrid(i64),

    /// Designator is shorter than a number plus a band letter.
    #[error("zone designator {0:?} is too short")]
    TooShort(String),

    /// The part before the band letter is not an integer.
    #[error("invalid zone number in {input:?}: {source}")]
    InvalidNumber {
        /// The full designator.
        input: String,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },

    /// The trailing character is not a UTM band letter.
    #[error("invalid band letter {letter:?} in {input:?}")]
    InvalidLetter {
        /// The full designator.
        input: String,
        /// The rejected character.
        letter: char,
    },
}
