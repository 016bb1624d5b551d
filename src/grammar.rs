//! Recognizer for the `hsl()`/`hsla()` functional notation.
//! <https://drafts.csswg.org/css-color-4/#the-hsl-notation>
//!
//! Two rules are supported, each anchored to the whole input:
//!
//! ```text
//! hsl(<hue> <percentage> <percentage> [/ <alpha>])      modern
//! hsl(<hue>, <percentage>, <percentage>[, <alpha>])     legacy
//! ```
//!
//! The function name may be written in any case and `hsla` is an alias of
//! `hsl`. The recognizer only splits the input into raw tokens, normalizing
//! them is left to [`crate::Hsl`].

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::Component;

/// The shortest string that can possibly match, e.g. `hsl(0 0%0%)`. Measured
/// in bytes: a multi-byte whitespace character only makes a string longer.
pub const MIN_LENGTH: usize = 11;

/// A signed decimal number without an exponent.
const NUMBER: &str = r"[+-]?[0-9]*\.?[0-9]+";

const ANGLE_UNIT: &str = r"(deg|grad|rad|turn)?";

static MODERN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?i:hsla?)\(\s*({n}){u}\s+({n})%\s*({n})%(?:\s*/\s*({n}%?))?\s*\)$",
        n = NUMBER,
        u = ANGLE_UNIT,
    ))
    .expect("grammar: modern hsl pattern must compile")
});

static LEGACY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?i:hsla?)\(\s*({n}){u}\s*,\s*({n})%\s*,\s*({n})%(?:\s*,\s*({n}%?))?\s*\)$",
        n = NUMBER,
        u = ANGLE_UNIT,
    ))
    .expect("grammar: legacy hsl pattern must compile")
});

/// The separator style a color was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Syntax {
    /// Space separated components with an optional `/ alpha`.
    Modern,
    /// Comma separated components with an optional `, alpha`.
    Legacy,
}

/// Unit attached to the hue component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleUnit {
    /// A bare number, interpreted as degrees.
    None,
    /// Degrees, 360 to a full turn.
    Deg,
    /// Gradians, 400 to a full turn.
    Grad,
    /// Radians, 2π to a full turn.
    Rad,
    /// Turns.
    Turn,
}

impl AngleUnit {
    fn from_suffix(suffix: Option<&str>) -> Self {
        match suffix {
            Some("deg") => Self::Deg,
            Some("grad") => Self::Grad,
            Some("rad") => Self::Rad,
            Some("turn") => Self::Turn,
            _ => Self::None,
        }
    }

    /// The number of degrees in one of this unit.
    pub fn degrees(&self) -> Component {
        match self {
            Self::None | Self::Deg => 1.0,
            Self::Grad => 0.9,
            Self::Rad => 180.0 / std::f64::consts::PI,
            Self::Turn => 360.0,
        }
    }
}

/// The alpha token, with any `%` sign already removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alpha<'a> {
    /// No alpha was given.
    Absent,
    /// A bare number, e.g. `0.5`.
    Number(&'a str),
    /// A percentage, e.g. `50%`, holding only the number.
    Percentage(&'a str),
}

impl<'a> Alpha<'a> {
    fn from_token(token: Option<&'a str>) -> Self {
        match token {
            None => Self::Absent,
            Some(token) => match token.strip_suffix('%') {
                Some(number) => Self::Percentage(number),
                None => Self::Number(token),
            },
        }
    }
}

/// The tokens of a matched color, before any normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawHsl<'a> {
    pub syntax: Syntax,
    pub hue: &'a str,
    pub unit: AngleUnit,
    pub saturation: &'a str,
    pub lightness: &'a str,
    pub alpha: Alpha<'a>,
}

impl<'a> RawHsl<'a> {
    fn from_captures(syntax: Syntax, captures: Captures<'a>) -> Option<Self> {
        let token = |i: usize| captures.get(i).map(|m| m.as_str());

        Some(Self {
            syntax,
            hue: token(1)?,
            unit: AngleUnit::from_suffix(token(2)),
            saturation: token(3)?,
            lightness: token(4)?,
            alpha: Alpha::from_token(token(5)),
        })
    }
}

/// Match the whole of `input` against the modern and then the legacy rule.
/// Surrounding whitespace is not trimmed here.
pub fn recognize(input: &str) -> Option<RawHsl<'_>> {
    if input.len() < MIN_LENGTH {
        return None;
    }

    if let Some(captures) = MODERN_RE.captures(input) {
        return RawHsl::from_captures(Syntax::Modern, captures);
    }

    LEGACY_RE
        .captures(input)
        .and_then(|captures| RawHsl::from_captures(Syntax::Legacy, captures))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_tokens() {
        let raw = recognize("hsl(120deg 50% 25% / 0.5)").unwrap();
        assert_eq!(
            raw,
            RawHsl {
                syntax: Syntax::Modern,
                hue: "120",
                unit: AngleUnit::Deg,
                saturation: "50",
                lightness: "25",
                alpha: Alpha::Number("0.5"),
            }
        );
    }

    #[test]
    fn legacy_tokens() {
        let raw = recognize("hsla(-.5turn, +10%, 20.25%, 40%)").unwrap();
        assert_eq!(
            raw,
            RawHsl {
                syntax: Syntax::Legacy,
                hue: "-.5",
                unit: AngleUnit::Turn,
                saturation: "+10",
                lightness: "20.25",
                alpha: Alpha::Percentage("40"),
            }
        );
    }

    #[test]
    fn alpha_is_optional() {
        assert_eq!(recognize("hsl(0 0% 0%)").unwrap().alpha, Alpha::Absent);
        assert_eq!(recognize("hsl(0, 0%, 0%)").unwrap().alpha, Alpha::Absent);
    }

    #[test]
    fn minimal_string() {
        assert_eq!("hsl(0 0%0%)".len(), MIN_LENGTH);
        assert!(recognize("hsl(0 0%0%)").is_some());
        assert!(recognize("hsl(0,0%,0%)").is_some());
    }

    #[test]
    fn function_name_is_case_insensitive() {
        for name in ["hsl", "hsla", "HSL", "HSLA", "HsL", "hSlA"] {
            let input = format!("{name}(10 20% 30%)");
            assert!(recognize(&input).is_some(), "{input}");
        }
    }

    #[test]
    fn units_are_case_sensitive() {
        assert!(recognize("hsl(10DEG 20% 30%)").is_none());
        assert!(recognize("hsl(1Turn 20% 30%)").is_none());
    }

    #[test]
    fn irregular_whitespace() {
        assert!(recognize("hsl(  10   20%   30%   /   1  )").is_some());
        assert!(recognize("hsl(10 ,20%  ,  30%,1)").is_some());
        assert!(recognize("hsl(\t10\n20%\t30%)").is_some());
    }

    #[test]
    fn unicode_whitespace() {
        assert!(recognize("hsl(0\u{a0}0%0%)").is_some());
        assert!(recognize("hsl(0\u{2003}0%\u{2003}0%)").is_some());
        assert!("hsl(0\u{a0}0%0%)".len() > MIN_LENGTH);
    }

    #[test]
    fn rejects_mixed_separators() {
        assert!(recognize("hsl(120, 50% 50%)").is_none());
        assert!(recognize("hsl(120 50%, 50%)").is_none());
        assert!(recognize("hsl(120 50% 50%, 0.5)").is_none());
        assert!(recognize("hsl(120, 50%, 50% / 0.5)").is_none());
    }

    #[test]
    fn rejects_malformed_components() {
        // Missing `%` on saturation or lightness.
        assert!(recognize("hsl(120 50 50%)").is_none());
        assert!(recognize("hsl(120, 50%, 50)").is_none());
        // Hue never takes a percentage.
        assert!(recognize("hsl(120% 50% 50%)").is_none());
        // Modern form needs whitespace after the hue.
        assert!(recognize("hsl(120deg50% 50%)").is_none());
        // No exponents, no trailing dots, no unicode digits.
        assert!(recognize("hsl(1e2 50% 50%)").is_none());
        assert!(recognize("hsl(120. 50% 50%)").is_none());
        assert!(recognize("hsl(١٢٠ 50% 50%)").is_none());
        // Unknown units.
        assert!(recognize("hsl(120px 50% 50%)").is_none());
    }

    #[test]
    fn anchored_to_whole_input() {
        assert!(recognize("hsl(120 50% 50%)x").is_none());
        assert!(recognize("xhsl(120 50% 50%)").is_none());
        assert!(recognize(" hsl(120 50% 50%)").is_none());
        assert!(recognize("hsl(120 50% 50%)\n").is_none());
    }

    #[test]
    fn short_inputs_are_rejected() {
        assert!(recognize("").is_none());
        assert!(recognize("hsl()").is_none());
        assert!(recognize("hsl(0 0%0%").is_none());
    }

    #[test]
    fn unit_degrees() {
        assert_eq!(AngleUnit::None.degrees(), 1.0);
        assert_eq!(AngleUnit::Deg.degrees(), 1.0);
        assert_eq!(AngleUnit::Grad.degrees(), 0.9);
        assert_eq!(AngleUnit::Turn.degrees(), 360.0);
        assert!((AngleUnit::Rad.degrees() * std::f64::consts::PI - 180.0).abs() < 1e-12);
    }
}
