//! WebAssembly exports for long shadow generation.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. All inputs
//! are CSS tokens so a stylesheet tool can pass values through unchanged:
//!
//! - `direction`: `"to top right"`, `"45deg"`, `"0.25turn"`, ...
//! - `length`: `"40px"`, `"3em"`, ...
//! - `color`: `"#333"`, `"rgba(0, 0, 0, 0.5)"`, ...
//! - `fade`: `""` / `"none"`, `"transparent"`, or a target color

use wasm_bindgen::prelude::*;

use crate::css::to_shadow_list;
use crate::error::LongShadowError;
use crate::generator::{layers_to_array, LongShadowParams};

fn to_js_error(err: LongShadowError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Generate a long shadow as a CSS shadow list.
///
/// # Returns
/// Comma separated `x y blur color` entries, ready for `text-shadow` or
/// `box-shadow`. Throws on invalid input.
#[wasm_bindgen]
pub fn long_shadow_css_wasm(
    direction: &str,
    length: &str,
    color: &str,
    fade: &str,
    layer_count: usize,
) -> Result<String, JsValue> {
    let params = LongShadowParams::from_tokens(direction, length, color, fade, layer_count)
        .map_err(to_js_error)?;
    let layers = params.generate().map_err(to_js_error)?;
    Ok(to_shadow_list(&layers))
}

/// Generate a long shadow as a flat array.
///
/// # Returns
/// `layer_count * 7` floats: `x, y, blur, r, g, b, a` per layer, colors 0-255.
#[wasm_bindgen]
pub fn long_shadow_layers_wasm(
    direction: &str,
    length: &str,
    color: &str,
    fade: &str,
    layer_count: usize,
) -> Result<Vec<f32>, JsValue> {
    let params = LongShadowParams::from_tokens(direction, length, color, fade, layer_count)
        .map_err(to_js_error)?;
    let layers = params.generate().map_err(to_js_error)?;
    Ok(layers_to_array(&layers).into_raw_vec_and_offset().0)
}
