//! WebAssembly exports for the sketch pipeline.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. The
//! caller supplies the decoded RGBA pixels (e.g. from a canvas
//! `ImageData`) and renders or encodes the returned buffer itself.

use wasm_bindgen::prelude::*;

use crate::convert::{convert, SketchParams, SketchStyle};

/// Convert a flat RGBA buffer into a sketch rendering.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `style` - Style name: "pencil", "outline", "charcoal" or "soft"
///   (unknown names fall back to pencil)
/// * `blur_radius` - Gaussian blur radius in pixels
/// * `edge_strength` - Sobel gradient magnitude multiplier
/// * `contrast` - Contrast factor around the 128 midpoint
///
/// # Returns
/// Flat array of fully opaque RGBA bytes with the same length, or a
/// JS error carrying the failure reason.
#[wasm_bindgen]
pub fn sketch_rgba_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    style: &str,
    blur_radius: usize,
    edge_strength: f32,
    contrast: f32,
) -> Result<Vec<u8>, JsError> {
    let params = SketchParams {
        style: SketchStyle::from_name(style),
        blur_radius,
        edge_strength,
        contrast,
    };

    convert(data, width, height, &params).map_err(|e| JsError::new(&e.to_string()))
}
