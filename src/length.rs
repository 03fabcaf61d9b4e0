//! CSS length: a magnitude with a unit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::css::format_number;
use crate::error::{LongShadowError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    #[default]
    Px,
    Em,
    Rem,
    Percent,
    Vw,
    Vh,
    Vmin,
    Vmax,
    Pt,
    Pc,
    Cm,
    Mm,
    In,
    Ch,
    Ex,
}

// Longer suffixes first so "rem" is not read as "em".
static UNITS: [(LengthUnit, &str); 15] = [
    (LengthUnit::Vmin, "vmin"),
    (LengthUnit::Vmax, "vmax"),
    (LengthUnit::Rem, "rem"),
    (LengthUnit::Px, "px"),
    (LengthUnit::Em, "em"),
    (LengthUnit::Vw, "vw"),
    (LengthUnit::Vh, "vh"),
    (LengthUnit::Pt, "pt"),
    (LengthUnit::Pc, "pc"),
    (LengthUnit::Cm, "cm"),
    (LengthUnit::Mm, "mm"),
    (LengthUnit::In, "in"),
    (LengthUnit::Ch, "ch"),
    (LengthUnit::Ex, "ex"),
    (LengthUnit::Percent, "%"),
];

impl LengthUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
            LengthUnit::Percent => "%",
            LengthUnit::Vw => "vw",
            LengthUnit::Vh => "vh",
            LengthUnit::Vmin => "vmin",
            LengthUnit::Vmax => "vmax",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::In => "in",
            LengthUnit::Ch => "ch",
            LengthUnit::Ex => "ex",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = LongShadowError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();
        if token.is_empty() {
            return Ok(LengthUnit::Px);
        }
        UNITS
            .iter()
            .find(|(_, suffix)| *suffix == token)
            .map(|(unit, _)| *unit)
            .ok_or_else(|| LongShadowError::InvalidLength(s.to_string()))
    }
}

/// A linear magnitude such as `40px` or `2.5em`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LengthRepr", into = "String")]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    pub const fn zero(unit: LengthUnit) -> Self {
        Self::new(0.0, unit)
    }

    /// Same unit, value multiplied by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.value * factor, self.unit)
    }

    /// Ensure the magnitude is finite and strictly positive.
    pub fn validate_positive(&self) -> Result<()> {
        if self.value.is_finite() && self.value > 0.0 {
            Ok(())
        } else {
            Err(LongShadowError::NonPositiveLength(self.value))
        }
    }
}

impl fmt::Display for Length {
    /// Zero prints without a unit, matching CSS minifier output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = format_number(self.value);
        if number == "0" {
            f.write_str("0")
        } else {
            write!(f, "{}{}", number, self.unit.as_str())
        }
    }
}

impl FromStr for Length {
    type Err = LongShadowError;

    /// Parse `<number><unit>`; a bare number is taken as pixels.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();
        let split = token
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e')))
            .unwrap_or(token.len());

        // "1em" would otherwise swallow the "e" of the unit as an exponent.
        let split = match token[..split].rfind('e') {
            Some(e) if token[e..].parse::<LengthUnit>().is_ok() => e,
            _ => split,
        };

        let (number, unit) = token.split_at(split);
        let value: f32 = number
            .trim()
            .parse()
            .map_err(|_| LongShadowError::InvalidLength(s.to_string()))?;
        let unit: LengthUnit = unit
            .parse()
            .map_err(|_| LongShadowError::InvalidLength(s.to_string()))?;

        Ok(Length::new(value, unit))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LengthRepr {
    Pixels(f32),
    Token(String),
}

impl TryFrom<LengthRepr> for Length {
    type Error = LongShadowError;

    fn try_from(repr: LengthRepr) -> Result<Self> {
        match repr {
            LengthRepr::Pixels(px) => Ok(Length::px(px)),
            LengthRepr::Token(token) => token.parse(),
        }
    }
}

/// Full-precision form with the unit always present. [`fmt::Display`] is
/// the rounded CSS form and is not used for serialization.
impl From<Length> for String {
    fn from(length: Length) -> Self {
        format!("{}{}", length.value, length.unit.as_str())
    }
}
