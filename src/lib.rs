//! Long shadow generator
//!
//! Produces the dense stack of offset shadow layers behind the "long
//! shadow" look: each layer sits a little further along a fixed direction
//! than the last, optionally fading toward transparency or another color.
//! Python bindings via PyO3 and WASM bindings for JavaScript sit on top of
//! the same generator.
//!
//! ## Example
//!
//! ```
//! use longshadow::{css, Fade, Length, LongShadowParams, Rgba};
//!
//! let layers = LongShadowParams::new(0.0_f32, Length::px(100.0), Rgba::rgb(255, 0, 0))
//!     .with_fade(Fade::None)
//!     .with_layer_count(4)
//!     .generate()
//!     .unwrap();
//!
//! assert_eq!(
//!     css::to_shadow_list(&layers),
//!     "0 25px 0 #ff0000, 0 50px 0 #ff0000, 0 75px 0 #ff0000, 0 100px 0 #ff0000"
//! );
//! ```
//!
//! ## Conventions
//! - Angles are degrees clockwise from straight down (`0deg` = `to bottom`)
//! - Colors are 8-bit RGBA
//! - Layers are ordered smallest offset first

pub mod color;
pub mod css;
pub mod direction;
pub mod error;
pub mod fade;
pub mod generator;
pub mod length;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use color::Rgba;
pub use direction::{Direction, DirectionKeyword};
pub use error::{LongShadowError, Result};
pub use fade::Fade;
pub use generator::{generate, layers_to_array, LongShadowParams, ShadowLayer, DEFAULT_LAYER_COUNT};
pub use length::{Length, LengthUnit};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::css::to_shadow_list;
    use crate::{
        layers_to_array, Direction, Fade, Length, LongShadowError, LongShadowParams, Rgba,
        ShadowLayer,
    };

    fn to_py_err(err: LongShadowError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    /// Degrees as a number, or a CSS token such as `"to top left"`.
    #[derive(FromPyObject)]
    pub enum DirectionArg {
        Degrees(f32),
        Token(String),
    }

    /// `(r, g, b)`, `(r, g, b, a)` or a CSS color string.
    #[derive(FromPyObject)]
    pub enum ColorArg {
        Rgba((u8, u8, u8, u8)),
        Rgb((u8, u8, u8)),
        Token(String),
    }

    /// `True` for transparent, `False` for none, or a target color.
    #[derive(FromPyObject)]
    pub enum FadeArg {
        Flag(bool),
        Color(ColorArg),
    }

    impl ColorArg {
        fn into_rgba(self) -> Result<Rgba, LongShadowError> {
            match self {
                ColorArg::Rgba(c) => Ok(c.into()),
                ColorArg::Rgb(c) => Ok(c.into()),
                ColorArg::Token(token) => token.parse(),
            }
        }
    }

    fn build_params(
        direction: DirectionArg,
        length: f32,
        color: ColorArg,
        fade: Option<FadeArg>,
        layer_count: usize,
        unit: &str,
    ) -> PyResult<LongShadowParams> {
        let direction = match direction {
            DirectionArg::Degrees(deg) => Direction::Degrees(deg),
            DirectionArg::Token(token) => token.parse().map_err(to_py_err)?,
        };
        let fade = match fade {
            None => Fade::None,
            Some(FadeArg::Flag(flag)) => Fade::from(flag),
            // A bare "transparent"/"none" string keeps its fade meaning.
            Some(FadeArg::Color(ColorArg::Token(token))) => token.parse().map_err(to_py_err)?,
            Some(FadeArg::Color(color)) => Fade::ToColor(color.into_rgba().map_err(to_py_err)?),
        };

        Ok(LongShadowParams {
            direction,
            length: Length::new(length, unit.parse().map_err(to_py_err)?),
            color: color.into_rgba().map_err(to_py_err)?,
            fade,
            layer_count,
        })
    }

    fn generate_layers(params: &LongShadowParams) -> PyResult<Vec<ShadowLayer>> {
        params.generate().map_err(to_py_err)
    }

    /// Generate long shadow layers.
    ///
    /// # Arguments
    /// * `direction` - Degrees (clockwise from down) or a `to ...` keyword
    /// * `length` - Offset of the last layer
    /// * `color` - Base color
    /// * `fade` - None/False, True (transparent), or a target color
    /// * `layer_count` - Number of layers (default 100)
    /// * `unit` - Length unit (default "px")
    ///
    /// # Returns
    /// List of `(x, y, blur, (r, g, b, a))` tuples, smallest offset first
    #[pyfunction]
    #[pyo3(signature = (direction, length, color, fade=None, layer_count=100, unit="px"))]
    pub fn long_shadow(
        direction: DirectionArg,
        length: f32,
        color: ColorArg,
        fade: Option<FadeArg>,
        layer_count: usize,
        unit: &str,
    ) -> PyResult<Vec<(f32, f32, f32, (u8, u8, u8, u8))>> {
        let params = build_params(direction, length, color, fade, layer_count, unit)?;
        let layers = generate_layers(&params)?;
        Ok(layers
            .iter()
            .map(|l| {
                let c = l.color;
                (l.x.value, l.y.value, l.blur.value, (c.r, c.g, c.b, c.a))
            })
            .collect())
    }

    /// Generate long shadow layers as an (N, 7) float32 array.
    ///
    /// Columns are `x, y, blur, r, g, b, a` with colors in 0-255.
    #[pyfunction]
    #[pyo3(signature = (direction, length, color, fade=None, layer_count=100, unit="px"))]
    pub fn long_shadow_array<'py>(
        py: Python<'py>,
        direction: DirectionArg,
        length: f32,
        color: ColorArg,
        fade: Option<FadeArg>,
        layer_count: usize,
        unit: &str,
    ) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let params = build_params(direction, length, color, fade, layer_count, unit)?;
        let layers = generate_layers(&params)?;
        Ok(layers_to_array(&layers).into_pyarray(py))
    }

    /// Generate a long shadow as a CSS shadow list string.
    #[pyfunction]
    #[pyo3(signature = (direction, length, color, fade=None, layer_count=100, unit="px"))]
    pub fn long_shadow_css(
        direction: DirectionArg,
        length: f32,
        color: ColorArg,
        fade: Option<FadeArg>,
        layer_count: usize,
        unit: &str,
    ) -> PyResult<String> {
        let params = build_params(direction, length, color, fade, layer_count, unit)?;
        let layers = generate_layers(&params)?;
        Ok(to_shadow_list(&layers))
    }

    #[pymodule]
    pub fn longshadow(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(long_shadow, m)?)?;
        m.add_function(wrap_pyfunction!(long_shadow_array, m)?)?;
        m.add_function(wrap_pyfunction!(long_shadow_css, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::longshadow;
