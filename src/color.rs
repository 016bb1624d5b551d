//! An [`Hsl`] holds the normalized components of a color written with the
//! `hsl()` or `hsla()` functional notation.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::{
    grammar::{Alpha, RawHsl, Syntax},
    math::{clamp, wrap_hue},
    ParseError,
};

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

bitflags! {
    /// Flags describing how a parsed [`Hsl`] was written.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// Set when the alpha component was omitted and defaulted to 1.
        const ALPHA_IS_NONE = 1 << 0;
        /// Set when the color used the comma separated legacy syntax.
        const LEGACY_SYNTAX = 1 << 1;
    }
}

/// A color specified with the HSL notation. Two colors are equal when their
/// components are equal, regardless of how they were written.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hsl {
    /// The hue in degrees, in the range `[0, 360)`.
    #[cfg_attr(feature = "serde", serde(rename = "h"))]
    pub hue: Component,
    /// The saturation as a percentage, in the range `[0, 100]`.
    #[cfg_attr(feature = "serde", serde(rename = "s"))]
    pub saturation: Component,
    /// The lightness as a percentage, in the range `[0, 100]`.
    #[cfg_attr(feature = "serde", serde(rename = "l"))]
    pub lightness: Component,
    /// The alpha component, in the range `[0, 1]`.
    #[cfg_attr(feature = "serde", serde(rename = "a"))]
    pub alpha: Component,
    /// Holds any flags that might be enabled for this color.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub flags: Flags,
}

impl Hsl {
    /// Create a new color, bringing each component into its range. The hue
    /// wraps around the color wheel, the other components are clamped.
    pub fn new(
        hue: Component,
        saturation: Component,
        lightness: Component,
        alpha: Component,
    ) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: clamp(saturation, 0.0, 100.0),
            lightness: clamp(lightness, 0.0, 100.0),
            alpha: clamp(alpha, 0.0, 1.0),
            flags: Flags::empty(),
        }
    }

    /// Normalize the raw tokens of a matched color.
    pub(crate) fn from_raw(raw: &RawHsl) -> Result<Self, ParseError> {
        let mut flags = Flags::empty();
        if raw.syntax == Syntax::Legacy {
            flags |= Flags::LEGACY_SYNTAX;
        }

        let hue = raw.hue.parse::<Component>()? * raw.unit.degrees();
        let saturation = raw.saturation.parse::<Component>()?;
        let lightness = raw.lightness.parse::<Component>()?;

        let alpha = match raw.alpha {
            Alpha::Absent => {
                flags |= Flags::ALPHA_IS_NONE;
                1.0
            }
            Alpha::Number(number) => number.parse::<Component>()?,
            Alpha::Percentage(number) => {
                clamp(number.parse::<Component>()?, 0.0, 100.0) / 100.0
            }
        };

        Ok(Self {
            flags,
            ..Self::new(hue, saturation, lightness, alpha)
        })
    }

    /// Return the components in `[hue, saturation, lightness, alpha]` order.
    pub fn to_array(&self) -> [Component; 4] {
        [self.hue, self.saturation, self.lightness, self.alpha]
    }

    /// Return the alpha component, or `None` if it was omitted.
    pub fn explicit_alpha(&self) -> Option<Component> {
        if self.flags.contains(Flags::ALPHA_IS_NONE) {
            None
        } else {
            Some(self.alpha)
        }
    }
}

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl From<Hsl> for [Component; 4] {
    fn from(value: Hsl) -> Self {
        value.to_array()
    }
}

impl FromStr for Hsl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_hsl(s)
    }
}

/// Writes the color with the modern syntax, e.g. `hsl(120 50% 25% / 0.5)`.
/// The output parses back to the same components.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({} {}% {}% / {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}
