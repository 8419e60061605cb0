//! Sketch style composers: Pencil, Outline, Charcoal, Soft.
//!
//! Each composer orchestrates the filter primitives into a final
//! grayscale rendering and broadcasts it into an opaque RGBA image.
//! The input RGBA buffer is never mutated.

use ndarray::{Array3, ArrayView3};

use super::adjust::{apply_contrast, invert};
use super::blur::gaussian_blur;
use super::edge::sobel;
use super::grayscale::{broadcast_rgba, luma};

// ============================================================================
// Pencil
// ============================================================================

/// Classic pencil-sketch effect via dodge blending.
///
/// Grayscale, invert, blur the inverted image, then lighten the
/// grayscale by the blurred mask: `gray / (255 - blurred) * 255`.
/// A fully white mask (blurred == 255) saturates to white rather than
/// dividing by zero.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `blur_radius` - Radius for blurring the inverted mask
/// * `contrast` - Contrast factor applied to the blended result
///
/// # Returns
/// Opaque RGBA sketch with same dimensions
pub fn pencil(input: ArrayView3<u8>, blur_radius: usize, contrast: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let gray = luma(input);
    let inverted = invert(gray.view());
    let blurred = gaussian_blur(inverted.view(), blur_radius);

    let mut output = Array3::<u8>::zeros((height, width, 4));
    for y in 0..height {
        for x in 0..width {
            let base = gray[[y, x]] as f32;
            let mask = blurred[[y, x]] as f32;

            // Dodge blend; saturate when the mask is fully white
            let value = if mask >= 255.0 {
                255.0
            } else {
                (base / (255.0 - mask) * 255.0).clamp(0.0, 255.0)
            };
            let value = apply_contrast(value, contrast);

            let v = value.clamp(0.0, 255.0) as u8;
            output[[y, x, 0]] = v;
            output[[y, x, 1]] = v;
            output[[y, x, 2]] = v;
            output[[y, x, 3]] = 255;
        }
    }

    output
}

// ============================================================================
// Outline
// ============================================================================

/// Outline effect: dark edges on a white background.
///
/// Grayscale, Sobel edge detection, invert the edge map, then
/// contrast-map every sample. Blur radius plays no part in this style.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `edge_strength` - Sobel gradient magnitude multiplier
/// * `contrast` - Contrast factor applied to the inverted edge map
///
/// # Returns
/// Opaque RGBA sketch with same dimensions
pub fn outline(input: ArrayView3<u8>, edge_strength: f32, contrast: f32) -> Array3<u8> {
    let gray = luma(input);
    let edges = sobel(gray.view(), edge_strength);
    let inverted = invert(edges.view());

    let mapped = inverted.mapv(|v| apply_contrast(v as f32, contrast).clamp(0.0, 255.0) as u8);
    broadcast_rgba(&mapped)
}

// ============================================================================
// Charcoal
// ============================================================================

/// Charcoal effect: heavy blur darkened and combined with strong edges.
///
/// Blurs the grayscale at twice the requested radius, detects edges on
/// the un-blurred grayscale at 1.5x strength, then takes
/// `min(blurred * 0.7, 255 - edge * 0.8)` with a softened contrast.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `blur_radius` - Base blur radius (doubled internally)
/// * `edge_strength` - Base edge strength (scaled by 1.5 internally)
/// * `contrast` - Base contrast factor (scaled by 0.8 internally)
///
/// # Returns
/// Opaque RGBA sketch with same dimensions
pub fn charcoal(
    input: ArrayView3<u8>,
    blur_radius: usize,
    edge_strength: f32,
    contrast: f32,
) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let gray = luma(input);
    let blurred = gaussian_blur(gray.view(), blur_radius * 2);
    let edges = sobel(gray.view(), edge_strength * 1.5);

    let mut output = Array3::<u8>::zeros((height, width, 4));
    for y in 0..height {
        for x in 0..width {
            let darkened = blurred[[y, x]] as f32 * 0.7;
            let edge_cut = 255.0 - edges[[y, x]] as f32 * 0.8;

            let value = apply_contrast(darkened.min(edge_cut), contrast * 0.8);

            let v = value.clamp(0.0, 255.0) as u8;
            output[[y, x, 0]] = v;
            output[[y, x, 1]] = v;
            output[[y, x, 2]] = v;
            output[[y, x, 3]] = 255;
        }
    }

    output
}

// ============================================================================
// Soft
// ============================================================================

/// Soft sketch: weighted average of the grayscale and its blur.
///
/// `gray * 0.7 + blurred * 0.3` with a softened contrast, giving a
/// gentle, low-detail rendering.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `blur_radius` - Blur radius for the smoothed component
/// * `contrast` - Base contrast factor (scaled by 0.7 internally)
///
/// # Returns
/// Opaque RGBA sketch with same dimensions
pub fn soft(input: ArrayView3<u8>, blur_radius: usize, contrast: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let gray = luma(input);
    let blurred = gaussian_blur(gray.view(), blur_radius);

    let mut output = Array3::<u8>::zeros((height, width, 4));
    for y in 0..height {
        for x in 0..width {
            let blended = gray[[y, x]] as f32 * 0.7 + blurred[[y, x]] as f32 * 0.3;
            let value = apply_contrast(blended, contrast * 0.7);

            let v = value.clamp(0.0, 255.0) as u8;
            output[[y, x, 0]] = v;
            output[[y, x, 1]] = v;
            output[[y, x, 2]] = v;
            output[[y, x, 3]] = 255;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn gradient_image(height: usize, width: usize) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((height, width, 4));
        for y in 0..height {
            for x in 0..width {
                let v = ((x * 255) / width.max(1)) as u8;
                img[[y, x, 0]] = v;
                img[[y, x, 1]] = v / 2;
                img[[y, x, 2]] = 255 - v;
                img[[y, x, 3]] = 255;
            }
        }
        img
    }

    fn assert_opaque_and_gray(result: &Array3<u8>) {
        let (height, width, channels) = result.dim();
        assert_eq!(channels, 4);
        for y in 0..height {
            for x in 0..width {
                assert_eq!(result[[y, x, 0]], result[[y, x, 1]]);
                assert_eq!(result[[y, x, 1]], result[[y, x, 2]]);
                assert_eq!(result[[y, x, 3]], 255);
            }
        }
    }

    #[test]
    fn test_pencil_shape_and_alpha() {
        let img = gradient_image(6, 8);
        let result = pencil(img.view(), 2, 1.2);

        assert_eq!(result.dim(), (6, 8, 4));
        assert_opaque_and_gray(&result);
    }

    #[test]
    fn test_pencil_black_image_saturates_white() {
        // Black input: inverted mask is 255 everywhere, dodge saturates
        let mut img = Array3::<u8>::zeros((4, 4, 4));
        for y in 0..4 {
            for x in 0..4 {
                img[[y, x, 3]] = 255;
            }
        }

        let result = pencil(img.view(), 0, 1.0);

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(result[[y, x, 0]], 255);
            }
        }
    }

    #[test]
    fn test_outline_shape_and_alpha() {
        let img = gradient_image(5, 5);
        let result = outline(img.view(), 1.5, 1.0);

        assert_eq!(result.dim(), (5, 5, 4));
        assert_opaque_and_gray(&result);
    }

    #[test]
    fn test_outline_white_image_stays_white() {
        // Zero gradient everywhere; borders are zero pre-invert too
        let img = Array3::<u8>::from_elem((4, 4, 4), 255);

        let result = outline(img.view(), 1.0, 1.0);

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(result[[y, x, 0]], 255);
                assert_eq!(result[[y, x, 1]], 255);
                assert_eq!(result[[y, x, 2]], 255);
                assert_eq!(result[[y, x, 3]], 255);
            }
        }
    }

    #[test]
    fn test_outline_too_small_for_sobel_is_white() {
        // 2x2: every pixel is border, edge map stays 0, inverts to 255
        let img = gradient_image(2, 2);

        let result = outline(img.view(), 1.0, 1.0);

        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(result[[y, x, 0]], 255);
                assert_eq!(result[[y, x, 3]], 255);
            }
        }
    }

    #[test]
    fn test_charcoal_shape_and_alpha() {
        let img = gradient_image(7, 4);
        let result = charcoal(img.view(), 1, 1.0, 1.0);

        assert_eq!(result.dim(), (7, 4, 4));
        assert_opaque_and_gray(&result);
    }

    #[test]
    fn test_charcoal_darkens_flat_image() {
        // Flat mid-gray: no edges, value = 128 * 0.7 with 0.8 contrast
        let mut img = Array3::<u8>::from_elem((5, 5, 4), 128);
        for y in 0..5 {
            for x in 0..5 {
                img[[y, x, 3]] = 255;
            }
        }

        let result = charcoal(img.view(), 1, 1.0, 1.0);

        // apply_contrast(89.6, 0.8) ≈ 97
        let v = result[[2, 2, 0]] as i32;
        assert!((v - 97).abs() <= 2, "got {v}");
    }

    #[test]
    fn test_soft_shape_and_alpha() {
        let img = gradient_image(4, 6);
        let result = soft(img.view(), 3, 1.0);

        assert_eq!(result.dim(), (4, 6, 4));
        assert_opaque_and_gray(&result);
    }

    #[test]
    fn test_soft_flat_image_keeps_tone() {
        // Flat gray blended with itself, contrast 0.7 pulls toward 128
        let mut img = Array3::<u8>::from_elem((5, 5, 4), 200);
        for y in 0..5 {
            for x in 0..5 {
                img[[y, x, 3]] = 255;
            }
        }

        let result = soft(img.view(), 2, 1.0);

        // apply_contrast(200, 0.7) ≈ 178
        let v = result[[2, 2, 0]] as i32;
        assert!((v - 178).abs() <= 2, "got {v}");
    }
}
