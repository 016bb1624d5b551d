//! Entry points for validating and parsing HSL color strings.

use tracing::trace;

use crate::{
    color::{Component, Hsl},
    grammar::{self, MIN_LENGTH},
    ParseError,
};

/// The result of [`parse`], shaped as requested by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Parsed {
    /// Labeled components.
    Record(Hsl),
    /// Components in `[hue, saturation, lightness, alpha]` order.
    Array([Component; 4]),
}

impl Parsed {
    /// Return the components in `[hue, saturation, lightness, alpha]` order,
    /// whatever the shape.
    pub fn to_array(&self) -> [Component; 4] {
        match self {
            Self::Record(hsl) => hsl.to_array(),
            Self::Array(array) => *array,
        }
    }

    /// Return the labeled components, if this is a record.
    pub fn hsl(&self) -> Option<&Hsl> {
        match self {
            Self::Record(hsl) => Some(hsl),
            Self::Array(_) => None,
        }
    }
}

/// Parse an HSL color string into its normalized components. Leading and
/// trailing whitespace is ignored.
///
/// ```rust
/// use hsl_parser::parse_hsl;
/// let c = parse_hsl("hsl(0.5turn 150% 50% / 40%)").unwrap();
/// assert_eq!(c.to_array(), [180.0, 100.0, 50.0, 0.4]);
/// ```
pub fn parse_hsl(input: &str) -> Result<Hsl, ParseError> {
    let input = input.trim();

    // No string this short can match the grammar.
    if input.len() < MIN_LENGTH {
        trace!(len = input.len(), "hsl: rejected short input");
        return Err(ParseError::TooShort { len: input.len() });
    }

    let Some(raw) = grammar::recognize(input) else {
        trace!(input, "hsl: rejected input");
        return Err(ParseError::Syntax);
    };

    trace!(syntax = ?raw.syntax, unit = ?raw.unit, "hsl: matched");
    Hsl::from_raw(&raw)
}

/// Parse an HSL color string, returning `None` if it is not a valid color.
/// When `as_array` is set the components are returned in an array instead of
/// an [`Hsl`].
pub fn parse(input: &str, as_array: bool) -> Option<Parsed> {
    let hsl = parse_hsl(input).ok()?;
    Some(if as_array {
        Parsed::Array(hsl.to_array())
    } else {
        Parsed::Record(hsl)
    })
}

/// Test if a string is a valid HSL color string.
pub fn is_valid(input: &str) -> bool {
    grammar::recognize(input.trim()).is_some()
}
