//! hsl-parser reads colors written with the CSS `hsl()` and `hsla()`
//! functional notations, in both the legacy comma separated and the modern
//! space separated syntax, and normalizes their components.
//!
//! ```rust
//! use hsl_parser::{is_valid, parse, Parsed};
//!
//! assert!(is_valid("hsl(120deg 50% 50% / 0.5)"));
//! assert_eq!(
//!     parse("hsla(-10, 50%, 150%, 50%)", true),
//!     Some(Parsed::Array([350.0, 50.0, 100.0, 0.5])),
//! );
//! ```

#![deny(missing_docs)]

mod color;
mod error;
mod grammar;
mod math;
mod parse;

pub use color::{Component, Flags, Hsl};
pub use error::ParseError;
pub use parse::{is_valid, parse, parse_hsl, Parsed};
