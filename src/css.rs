//! Serialisation of shadow layers into CSS shadow lists.
//!
//! The generator only produces values; this module turns them into the
//! comma separated `x y blur color` form accepted by `text-shadow` and
//! `box-shadow`.

use std::fmt;

use crate::generator::ShadowLayer;

/// Which property a declaration targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShadowProperty {
    #[default]
    TextShadow,
    BoxShadow,
}

impl ShadowProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            ShadowProperty::TextShadow => "text-shadow",
            ShadowProperty::BoxShadow => "box-shadow",
        }
    }
}

impl fmt::Display for ShadowProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a number with at most 3 decimals, trailing zeros trimmed and
/// negative zero printed as `0`.
pub fn format_number(value: f32) -> String {
    let mut s = format!("{:.3}", value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// Comma separated shadow list, first layer first.
pub fn to_shadow_list(layers: &[ShadowLayer]) -> String {
    layers
        .iter()
        .map(ShadowLayer::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Full declaration, e.g. `text-shadow: 1px 1px 0 #000000, ...;`.
///
/// An empty layer list yields `none`.
pub fn declaration(property: ShadowProperty, layers: &[ShadowLayer]) -> String {
    if layers.is_empty() {
        return format!("{property}: none;");
    }
    format!("{property}: {};", to_shadow_list(layers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::length::Length;

    fn layer(x: f32, y: f32, color: Rgba) -> ShadowLayer {
        ShadowLayer {
            x: Length::px(x),
            y: Length::px(y),
            blur: Length::px(0.0),
            color,
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(25.0), "25");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1.23456), "1.235");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.0002), "0");
        assert_eq!(format_number(-3.1), "-3.1");
        assert_eq!(format_number(100.0), "100");
    }

    #[test]
    fn test_shadow_list() {
        let layers = [
            layer(1.0, 2.0, Rgba::BLACK),
            layer(2.0, 4.0, Rgba::new(0, 0, 0, 128)),
        ];
        assert_eq!(
            to_shadow_list(&layers),
            "1px 2px 0 #000000, 2px 4px 0 rgba(0, 0, 0, 0.502)"
        );
    }

    #[test]
    fn test_declaration() {
        let layers = [layer(0.0, 5.0, Rgba::rgb(255, 0, 0))];
        assert_eq!(
            declaration(ShadowProperty::BoxShadow, &layers),
            "box-shadow: 0 5px 0 #ff0000;"
        );
        assert_eq!(declaration(ShadowProperty::TextShadow, &[]), "text-shadow: none;");
    }
}
