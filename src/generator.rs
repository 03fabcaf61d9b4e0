//! Long shadow layer generator.
//!
//! Builds a dense stack of shadow layers by walking from `length / N` out to
//! `length` along a fixed direction:
//!
//! 1. Resolve the direction to degrees (keyword table or numeric angle)
//! 2. For each layer `i` in `1..=N`, scale the length by `i / N`
//! 3. Project onto x/y with `x = sin(angle)`, `y = cos(angle)`
//! 4. Color the layer according to the fade policy at fraction `i / N`
//!
//! Layers come back smallest offset first, ready to be joined into a shadow
//! list. Large stacks are evaluated with rayon; order is preserved either way.

use std::fmt;

use log::{debug, trace};
use ndarray::Array2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::direction::Direction;
use crate::error::{LongShadowError, Result};
use crate::fade::Fade;
use crate::length::Length;

pub const DEFAULT_LAYER_COUNT: usize = 100;

/// Upper bound on `layer_count`; larger requests are rejected instead of
/// attempting the allocation.
pub const MAX_LAYER_COUNT: usize = 1 << 20;

/// Below this many layers the loop runs on the calling thread.
const PARALLEL_THRESHOLD: usize = 4096;

/// One `x y blur color` entry of a shadow list.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowLayer {
    pub x: Length,
    pub y: Length,
    pub blur: Length,
    pub color: Rgba,
}

impl ShadowLayer {
    /// Euclidean length of the offset, in the layer's unit.
    pub fn magnitude(&self) -> f32 {
        self.x.value.hypot(self.y.value)
    }
}

impl fmt::Display for ShadowLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.blur, self.color)
    }
}

fn default_layer_count() -> usize {
    DEFAULT_LAYER_COUNT
}

/// Inputs of a long shadow.
///
/// `fade` defaults to [`Fade::None`] and `layer_count` to
/// [`DEFAULT_LAYER_COUNT`], both when built with [`LongShadowParams::new`]
/// and when deserialized from a preset that omits them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LongShadowParams {
    pub direction: Direction,
    pub length: Length,
    pub color: Rgba,
    #[serde(default)]
    pub fade: Fade,
    #[serde(default = "default_layer_count")]
    pub layer_count: usize,
}

impl LongShadowParams {
    pub fn new(direction: impl Into<Direction>, length: Length, color: Rgba) -> Self {
        Self {
            direction: direction.into(),
            length,
            color,
            fade: Fade::None,
            layer_count: DEFAULT_LAYER_COUNT,
        }
    }

    /// Build parameters from CSS tokens, e.g. `("to top left", "2em",
    /// "#333", "transparent", 50)`.
    pub fn from_tokens(
        direction: &str,
        length: &str,
        color: &str,
        fade: &str,
        layer_count: usize,
    ) -> Result<Self> {
        Ok(Self {
            direction: direction.parse()?,
            length: length.parse()?,
            color: color.parse()?,
            fade: fade.parse()?,
            layer_count,
        })
    }

    pub fn with_fade(mut self, fade: impl Into<Fade>) -> Self {
        self.fade = fade.into();
        self
    }

    pub fn with_layer_count(mut self, layer_count: usize) -> Self {
        self.layer_count = layer_count;
        self
    }

    pub fn generate(&self) -> Result<Vec<ShadowLayer>> {
        generate(self)
    }
}

/// Generate the ordered layers of a long shadow.
///
/// # Arguments
/// * `params` - Direction, length, base color, fade policy and layer count
///
/// # Returns
/// Exactly `layer_count` layers, smallest offset first. Fails before
/// producing anything when the direction is not finite, the length is not
/// positive, or `layer_count` is 0 or above [`MAX_LAYER_COUNT`].
pub fn generate(params: &LongShadowParams) -> Result<Vec<ShadowLayer>> {
    let degrees = params.direction.resolve_degrees()?;
    params.length.validate_positive()?;
    if params.layer_count == 0 {
        return Err(LongShadowError::ZeroLayerCount);
    }
    if params.layer_count > MAX_LAYER_COUNT {
        return Err(LongShadowError::LayerCountTooLarge {
            count: params.layer_count,
            max: MAX_LAYER_COUNT,
        });
    }

    let count = params.layer_count;
    let (sin, cos) = degrees.to_radians().sin_cos();
    let length = params.length;
    let color = params.color;
    let fade = params.fade;

    debug!(
        "long shadow: {} ({}deg), length {}, {} layers, fade {}",
        params.direction, degrees, length, count, fade
    );

    let layer_at = |i: usize| -> ShadowLayer {
        let fraction = i as f32 / count as f32;
        let step = length.scale(fraction);
        ShadowLayer {
            x: Length::new(sin * step.value, step.unit),
            y: Length::new(cos * step.value, step.unit),
            blur: Length::zero(length.unit),
            color: fade.apply(color, fraction),
        }
    };

    let layers: Vec<ShadowLayer> = if count >= PARALLEL_THRESHOLD {
        trace!("evaluating {count} layers in parallel");
        (1..=count).into_par_iter().map(layer_at).collect()
    } else {
        (1..=count).map(layer_at).collect()
    };

    Ok(layers)
}

/// Pack layers into an `(N, 7)` array of `x, y, blur, r, g, b, a`.
///
/// Color channels stay in 0-255.
pub fn layers_to_array(layers: &[ShadowLayer]) -> Array2<f32> {
    let mut result = Array2::<f32>::zeros((layers.len(), 7));

    for (row, layer) in layers.iter().enumerate() {
        result[[row, 0]] = layer.x.value;
        result[[row, 1]] = layer.y.value;
        result[[row, 2]] = layer.blur.value;
        result[[row, 3]] = layer.color.r as f32;
        result[[row, 4]] = layer.color.g as f32;
        result[[row, 5]] = layer.color.b as f32;
        result[[row, 6]] = layer.color.a as f32;
    }

    result
}
