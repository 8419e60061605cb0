//! Tonal adjustments: inversion and contrast remapping.
//!
//! These are pixel-wise operations that don't require spatial context.

use ndarray::{Array2, ArrayView2};

/// Invert a luminance buffer (255-complement of every sample).
///
/// Involutive: inverting twice restores the original.
pub fn invert(input: ArrayView2<u8>) -> Array2<u8> {
    input.mapv(|v| 255 - v)
}

/// Remap a single intensity around the midpoint by a contrast factor.
///
/// Returns `(value - 128) * contrast + 128` without clamping; the result
/// is clamped where it is finally stored into a u8 buffer. `contrast = 1.0`
/// is the identity.
#[inline]
pub fn apply_contrast(value: f32, contrast: f32) -> f32 {
    (value - 128.0) * contrast + 128.0
}
