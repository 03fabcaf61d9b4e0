//! Shadow direction: a numeric angle or a CSS-style `to ...` keyword.
//!
//! Angles run clockwise from the downward axis, so `0deg` casts the shadow
//! straight down and `90deg` casts it to the right. Offsets are derived as
//! `x = sin(angle) * step`, `y = cos(angle) * step`.
//!
//! ## Keyword Table
//!
//! | Keyword | Degrees |
//! |---------|---------|
//! | `to bottom` | 0 |
//! | `to bottom right`, `to right bottom` | 45 |
//! | `to right` | 90 |
//! | `to top right`, `to right top` | 135 |
//! | `to top` | 180 |
//! | `to top left`, `to left top` | 225 |
//! | `to left` | 270 |
//! | `to bottom left`, `to left bottom` | 315 |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::css::format_number;
use crate::error::{LongShadowError, Result};

/// One of the twelve named directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectionKeyword {
    ToTop,
    ToTopRight,
    ToRightTop,
    ToRight,
    ToBottomRight,
    ToRightBottom,
    ToBottom,
    ToBottomLeft,
    ToLeftBottom,
    ToLeft,
    ToLeftTop,
    ToTopLeft,
}

impl DirectionKeyword {
    pub const ALL: [DirectionKeyword; 12] = [
        DirectionKeyword::ToTop,
        DirectionKeyword::ToTopRight,
        DirectionKeyword::ToRightTop,
        DirectionKeyword::ToRight,
        DirectionKeyword::ToBottomRight,
        DirectionKeyword::ToRightBottom,
        DirectionKeyword::ToBottom,
        DirectionKeyword::ToBottomLeft,
        DirectionKeyword::ToLeftBottom,
        DirectionKeyword::ToLeft,
        DirectionKeyword::ToLeftTop,
        DirectionKeyword::ToTopLeft,
    ];

    /// Fixed angle in degrees for this keyword.
    pub fn degrees(self) -> f32 {
        match self {
            DirectionKeyword::ToBottom => 0.0,
            DirectionKeyword::ToBottomRight | DirectionKeyword::ToRightBottom => 45.0,
            DirectionKeyword::ToRight => 90.0,
            DirectionKeyword::ToTopRight | DirectionKeyword::ToRightTop => 135.0,
            DirectionKeyword::ToTop => 180.0,
            DirectionKeyword::ToTopLeft | DirectionKeyword::ToLeftTop => 225.0,
            DirectionKeyword::ToLeft => 270.0,
            DirectionKeyword::ToBottomLeft | DirectionKeyword::ToLeftBottom => 315.0,
        }
    }

    /// CSS spelling, e.g. `"to top right"`.
    pub fn as_str(self) -> &'static str {
        match self {
            DirectionKeyword::ToTop => "to top",
            DirectionKeyword::ToTopRight => "to top right",
            DirectionKeyword::ToRightTop => "to right top",
            DirectionKeyword::ToRight => "to right",
            DirectionKeyword::ToBottomRight => "to bottom right",
            DirectionKeyword::ToRightBottom => "to right bottom",
            DirectionKeyword::ToBottom => "to bottom",
            DirectionKeyword::ToBottomLeft => "to bottom left",
            DirectionKeyword::ToLeftBottom => "to left bottom",
            DirectionKeyword::ToLeft => "to left",
            DirectionKeyword::ToLeftTop => "to left top",
            DirectionKeyword::ToTopLeft => "to top left",
        }
    }

    /// Look up a keyword by its whitespace-normalized, lowercase spelling.
    pub fn lookup(token: &str) -> Option<DirectionKeyword> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == token)
    }
}

/// Direction a long shadow is cast toward.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DirectionRepr", into = "DirectionRepr")]
pub enum Direction {
    /// Angle in degrees, clockwise from straight down.
    Degrees(f32),
    Keyword(DirectionKeyword),
}

impl Direction {
    /// Resolve to an angle in degrees, rejecting non-finite values.
    pub fn resolve_degrees(&self) -> Result<f32> {
        match *self {
            Direction::Keyword(kw) => Ok(kw.degrees()),
            Direction::Degrees(deg) if deg.is_finite() => Ok(deg),
            Direction::Degrees(deg) => Err(LongShadowError::InvalidAngle(deg)),
        }
    }
}

impl From<DirectionKeyword> for Direction {
    fn from(kw: DirectionKeyword) -> Self {
        Direction::Keyword(kw)
    }
}

impl From<f32> for Direction {
    fn from(deg: f32) -> Self {
        Direction::Degrees(deg)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Degrees(deg) => write!(f, "{}deg", format_number(*deg)),
            Direction::Keyword(kw) => f.write_str(kw.as_str()),
        }
    }
}

impl FromStr for Direction {
    type Err = LongShadowError;

    /// Parse `to <side> [<side>]` keywords or an angle with a `deg`, `grad`,
    /// `rad` or `turn` suffix. A bare number is taken as degrees.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();

        if let Some(kw) = DirectionKeyword::lookup(&normalized) {
            return Ok(Direction::Keyword(kw));
        }

        let unrecognized = || LongShadowError::UnrecognizedDirection(s.to_string());

        // Order matters: "grad" also ends with "rad".
        let (number, scale) = if let Some(n) = normalized.strip_suffix("deg") {
            (n, 1.0)
        } else if let Some(n) = normalized.strip_suffix("grad") {
            (n, 0.9)
        } else if let Some(n) = normalized.strip_suffix("rad") {
            (n, 180.0 / std::f32::consts::PI)
        } else if let Some(n) = normalized.strip_suffix("turn") {
            (n, 360.0)
        } else {
            (normalized.as_str(), 1.0)
        };

        let value: f32 = number.trim().parse().map_err(|_| unrecognized())?;
        let degrees = value * scale;
        if !degrees.is_finite() {
            return Err(LongShadowError::InvalidAngle(degrees));
        }
        Ok(Direction::Degrees(degrees))
    }
}

/// Serialized form: a bare number of degrees or a CSS token.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DirectionRepr {
    Degrees(f32),
    Token(String),
}

impl TryFrom<DirectionRepr> for Direction {
    type Error = LongShadowError;

    fn try_from(repr: DirectionRepr) -> Result<Self> {
        match repr {
            DirectionRepr::Degrees(deg) => Ok(Direction::Degrees(deg)),
            DirectionRepr::Token(token) => token.parse(),
        }
    }
}

impl From<Direction> for DirectionRepr {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Degrees(deg) => DirectionRepr::Degrees(deg),
            Direction::Keyword(kw) => DirectionRepr::Token(kw.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_resolve_to_compass_angles() {
        let allowed = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];
        for kw in DirectionKeyword::ALL {
            assert!(allowed.contains(&kw.degrees()), "{kw:?}");
            assert_eq!(DirectionKeyword::lookup(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn test_keyword_spellings_are_distinct() {
        let mut names: Vec<&str> = DirectionKeyword::ALL.iter().map(|kw| kw.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_keyword_table_values() {
        assert_eq!(DirectionKeyword::ToBottom.degrees(), 0.0);
        assert_eq!(DirectionKeyword::ToRightBottom.degrees(), 45.0);
        assert_eq!(DirectionKeyword::ToRight.degrees(), 90.0);
        assert_eq!(DirectionKeyword::ToRightTop.degrees(), 135.0);
        assert_eq!(DirectionKeyword::ToTop.degrees(), 180.0);
        assert_eq!(DirectionKeyword::ToLeftTop.degrees(), 225.0);
        assert_eq!(DirectionKeyword::ToLeft.degrees(), 270.0);
        assert_eq!(DirectionKeyword::ToLeftBottom.degrees(), 315.0);
    }

    #[test]
    fn test_swapped_sides_agree() {
        assert_eq!(DirectionKeyword::ToTopRight.degrees(), DirectionKeyword::ToRightTop.degrees());
        assert_eq!(DirectionKeyword::ToBottomLeft.degrees(), DirectionKeyword::ToLeftBottom.degrees());
        assert_eq!(DirectionKeyword::ToTopLeft.degrees(), DirectionKeyword::ToLeftTop.degrees());
        assert_eq!(DirectionKeyword::ToBottomRight.degrees(), DirectionKeyword::ToRightBottom.degrees());
    }

    #[test]
    fn test_parse_keyword_tolerates_case_and_spacing() {
        let d: Direction = "  To   Top\tRight ".parse().unwrap();
        assert_eq!(d, Direction::Keyword(DirectionKeyword::ToTopRight));
    }

    #[test]
    fn test_parse_angle_units() {
        let cases = [
            ("45deg", 45.0),
            ("45", 45.0),
            ("-90deg", -90.0),
            ("100grad", 90.0),
            ("0.5turn", 180.0),
            ("3.14159265rad", 180.0),
        ];
        for (token, expected) in cases {
            let deg = token.parse::<Direction>().unwrap().resolve_degrees().unwrap();
            assert!((deg - expected).abs() < 1e-3, "{token} -> {deg}");
        }
    }

    #[test]
    fn test_unrecognized_direction() {
        for token in ["to middle", "to top top", "sideways", "", "deg"] {
            assert_eq!(
                token.parse::<Direction>(),
                Err(LongShadowError::UnrecognizedDirection(token.to_string()))
            );
        }
    }

    #[test]
    fn test_non_finite_angle_rejected() {
        assert!(matches!(
            Direction::Degrees(f32::NAN).resolve_degrees(),
            Err(LongShadowError::InvalidAngle(_))
        ));
        assert!(matches!("inf".parse::<Direction>(), Err(LongShadowError::InvalidAngle(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::Degrees(22.5).to_string(), "22.5deg");
        assert_eq!(Direction::Keyword(DirectionKeyword::ToLeft).to_string(), "to left");
    }

    #[test]
    fn test_serde_accepts_number_or_token() {
        let d: Direction = serde_json::from_str("135").unwrap();
        assert_eq!(d, Direction::Degrees(135.0));
        let d: Direction = serde_json::from_str("\"to bottom left\"").unwrap();
        assert_eq!(d, Direction::Keyword(DirectionKeyword::ToBottomLeft));
        assert!(serde_json::from_str::<Direction>("\"upward\"").is_err());
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"to bottom left\"");
    }
}
