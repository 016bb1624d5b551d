//! Errors reported when parsing HSL color strings.

use std::num::ParseFloatError;

use crate::grammar::MIN_LENGTH;

/// Reasons a string could not be parsed as an HSL color.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input is shorter than the shortest possible color.
    #[error("hsl color too short: {len} bytes, need at least {}", MIN_LENGTH)]
    TooShort {
        /// Length of the trimmed input in bytes.
        len: usize,
    },

    /// The input does not follow the `hsl()`/`hsla()` grammar.
    #[error("not a valid hsl() or hsla() color")]
    Syntax,

    /// A matched numeric token could not be read as a number.
    #[error("invalid number in hsl color: {0}")]
    Number(#[from] ParseFloatError),
}
