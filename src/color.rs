//! RGBA color value used for shadow layers.
//!
//! Channels are stored as 0-255 integers. Interpolation happens in f32 and
//! rounds back to the nearest integer, half away from zero.
//!
//! ## Accepted Spellings
//!
//! - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb(r, g, b)` and `rgba(r, g, b, a)` with `a` in 0.0-1.0 or a percentage
//! - `transparent`, `black`, `white`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::css::format_number;
use crate::error::{LongShadowError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[inline]
fn to_channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[inline]
fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    to_channel(from as f32 + (to as f32 - from as f32) * t)
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Blend RGB toward `target` by `t` (0.0 keeps `self`, 1.0 gives `target`).
    ///
    /// Alpha stays at `self.a`; the target's alpha is ignored.
    pub fn mix_rgb(self, target: Rgba, t: f32) -> Rgba {
        Rgba {
            r: lerp_channel(self.r, target.r, t),
            g: lerp_channel(self.g, target.g, t),
            b: lerp_channel(self.b, target.b, t),
            a: self.a,
        }
    }

    /// Multiply alpha by `factor` (clamped to 0.0-1.0), RGB unchanged.
    pub fn scale_alpha(self, factor: f32) -> Rgba {
        Rgba {
            a: to_channel(self.a as f32 * factor.clamp(0.0, 1.0)),
            ..self
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Alpha as 0.0-1.0.
    pub fn alpha_f32(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

impl fmt::Display for Rgba {
    /// Opaque colors print as `#rrggbb`, translucent ones as `rgba(...)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                format_number(self.alpha_f32())
            )
        }
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Rgba::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Rgba::new(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn parse_alpha(token: &str) -> Option<u8> {
    let value = match token.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f32>().ok()? / 100.0,
        None => token.parse::<f32>().ok()?,
    };
    value.is_finite().then(|| to_channel(value.clamp(0.0, 1.0) * 255.0))
}

fn parse_functional(args: &str) -> Option<Rgba> {
    // Accept both comma and whitespace separated arguments, with an optional
    // slash before alpha.
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    fn channel(p: &str) -> Option<u8> {
        let v: f32 = p.parse().ok()?;
        v.is_finite().then(|| to_channel(v))
    }

    match parts.as_slice() {
        [r, g, b] => Some(Rgba::rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => Some(Rgba::new(channel(r)?, channel(g)?, channel(b)?, parse_alpha(a)?)),
        _ => None,
    }
}

impl FromStr for Rgba {
    type Err = LongShadowError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();

        let parsed = match token.as_str() {
            "transparent" => Some(Rgba::TRANSPARENT),
            "black" => Some(Rgba::BLACK),
            "white" => Some(Rgba::WHITE),
            t => {
                if let Some(hex) = t.strip_prefix('#') {
                    parse_hex(hex)
                } else {
                    t.strip_prefix("rgba(")
                        .or_else(|| t.strip_prefix("rgb("))
                        .and_then(|rest| rest.strip_suffix(')'))
                        .and_then(parse_functional)
                }
            }
        };

        parsed.ok_or_else(|| LongShadowError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Rgba {
    type Error = LongShadowError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgba::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Rgba::new(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_rgb_keeps_alpha() {
        let from = Rgba::new(0, 100, 200, 128);
        let to = Rgba::new(255, 0, 100, 0);

        assert_eq!(from.mix_rgb(to, 0.0), from);
        assert_eq!(from.mix_rgb(to, 1.0), Rgba::new(255, 0, 100, 128));
        assert_eq!(from.mix_rgb(to, 0.5), Rgba::new(128, 50, 150, 128));
    }

    #[test]
    fn test_scale_alpha() {
        let c = Rgba::rgb(10, 20, 30);
        assert_eq!(c.scale_alpha(0.75).a, 191);
        assert_eq!(c.scale_alpha(0.5).a, 128);
        assert_eq!(c.scale_alpha(0.0).a, 0);
        assert_eq!(c.scale_alpha(2.0).a, 255);
        assert_eq!(c.scale_alpha(0.5).r, 10);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#f00".parse::<Rgba>().unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!("#F008".parse::<Rgba>().unwrap(), Rgba::new(255, 0, 0, 136));
        assert_eq!("#1a2b3c".parse::<Rgba>().unwrap(), Rgba::rgb(0x1a, 0x2b, 0x3c));
        assert_eq!("#1a2b3c80".parse::<Rgba>().unwrap(), Rgba::new(0x1a, 0x2b, 0x3c, 0x80));
        assert!("#12345".parse::<Rgba>().is_err());
        assert!("#ggg".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_parse_functional() {
        assert_eq!("rgb(1, 2, 3)".parse::<Rgba>().unwrap(), Rgba::rgb(1, 2, 3));
        assert_eq!("rgba(1,2,3,0.5)".parse::<Rgba>().unwrap(), Rgba::new(1, 2, 3, 128));
        assert_eq!("rgb(1 2 3 / 25%)".parse::<Rgba>().unwrap(), Rgba::new(1, 2, 3, 64));
        assert_eq!(" Transparent ".parse::<Rgba>().unwrap(), Rgba::TRANSPARENT);
        assert_eq!(
            "rgb(1, 2)".parse::<Rgba>(),
            Err(LongShadowError::InvalidColor("rgb(1, 2)".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgba::rgb(255, 0, 16).to_string(), "#ff0010");
        assert_eq!(Rgba::new(0, 0, 0, 0).to_string(), "rgba(0, 0, 0, 0)");
        assert_eq!(Rgba::new(0, 0, 0, 51).to_string(), "rgba(0, 0, 0, 0.2)");
    }

    #[test]
    fn test_serde_as_css_string() {
        let c: Rgba = serde_json::from_str("\"#336699\"").unwrap();
        assert_eq!(c, Rgba::rgb(0x33, 0x66, 0x99));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#336699\"");
    }
}
