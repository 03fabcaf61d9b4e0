//! Fade policy applied across the layers of a long shadow.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{LongShadowError, Result};

/// How the shadow color changes from the first layer to the last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "FadeRepr", into = "FadeRepr")]
pub enum Fade {
    /// Every layer uses the base color.
    #[default]
    None,
    /// Alpha falls linearly to 0 at the last layer.
    Transparent,
    /// RGB moves linearly toward the target; alpha stays constant.
    ToColor(Rgba),
}

impl Fade {
    /// Color of a layer at `fraction` (`i / layer_count`) through the shadow.
    pub fn apply(&self, base: Rgba, fraction: f32) -> Rgba {
        match *self {
            Fade::None => base,
            Fade::Transparent => base.scale_alpha(1.0 - fraction),
            Fade::ToColor(target) => base.mix_rgb(target, fraction),
        }
    }
}

impl From<Rgba> for Fade {
    fn from(color: Rgba) -> Self {
        Fade::ToColor(color)
    }
}

impl From<bool> for Fade {
    fn from(fade: bool) -> Self {
        if fade {
            Fade::Transparent
        } else {
            Fade::None
        }
    }
}

impl fmt::Display for Fade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fade::None => f.write_str("none"),
            Fade::Transparent => f.write_str("transparent"),
            Fade::ToColor(color) => write!(f, "{color}"),
        }
    }
}

impl FromStr for Fade {
    type Err = LongShadowError;

    /// `""`, `none` or `false` disable fading; `transparent` or `true` fade
    /// the alpha; anything else must be a color.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "false" => Ok(Fade::None),
            "transparent" | "true" => Ok(Fade::Transparent),
            _ => s.parse::<Rgba>().map(Fade::ToColor),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum FadeRepr {
    Flag(bool),
    Token(String),
}

impl TryFrom<FadeRepr> for Fade {
    type Error = LongShadowError;

    fn try_from(repr: FadeRepr) -> Result<Self> {
        match repr {
            FadeRepr::Flag(flag) => Ok(Fade::from(flag)),
            FadeRepr::Token(token) => token.parse(),
        }
    }
}

impl From<Fade> for FadeRepr {
    fn from(fade: Fade) -> Self {
        match fade {
            Fade::None => FadeRepr::Flag(false),
            Fade::Transparent => FadeRepr::Flag(true),
            Fade::ToColor(color) => FadeRepr::Token(color.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_constant() {
        let base = Rgba::new(12, 34, 56, 78);
        for fraction in [0.0, 0.25, 1.0] {
            assert_eq!(Fade::None.apply(base, fraction), base);
        }
    }

    #[test]
    fn test_transparent_reaches_zero() {
        let base = Rgba::rgb(0, 0, 0);
        assert_eq!(Fade::Transparent.apply(base, 0.25).a, 191);
        assert_eq!(Fade::Transparent.apply(base, 1.0).a, 0);
        assert_eq!(Fade::Transparent.apply(base, 1.0).r, 0);
    }

    #[test]
    fn test_to_color_keeps_base_alpha() {
        let base = Rgba::new(0, 0, 0, 200);
        let faded = Fade::ToColor(Rgba::WHITE).apply(base, 1.0);
        assert_eq!(faded, Rgba::new(255, 255, 255, 200));
    }

    #[test]
    fn test_parse() {
        assert_eq!("".parse::<Fade>().unwrap(), Fade::None);
        assert_eq!("None".parse::<Fade>().unwrap(), Fade::None);
        assert_eq!("transparent".parse::<Fade>().unwrap(), Fade::Transparent);
        assert_eq!("#fff".parse::<Fade>().unwrap(), Fade::ToColor(Rgba::WHITE));
        assert!(matches!("mauve-ish".parse::<Fade>(), Err(LongShadowError::InvalidColor(_))));
    }

    #[test]
    fn test_serde_flag_or_color() {
        assert_eq!(serde_json::from_str::<Fade>("false").unwrap(), Fade::None);
        assert_eq!(serde_json::from_str::<Fade>("true").unwrap(), Fade::Transparent);
        assert_eq!(
            serde_json::from_str::<Fade>("\"#000000\"").unwrap(),
            Fade::ToColor(Rgba::BLACK)
        );
        assert_eq!(serde_json::to_string(&Fade::Transparent).unwrap(), "true");
    }
}
