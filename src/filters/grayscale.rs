//! Grayscale reduction: RGBA to a single luminance channel.
//!
//! Uses ITU-R BT.601 luminosity coefficients, the convention of
//! canvas-based sketch tools. Every sketch pipeline starts here.

use ndarray::{Array2, Array3, ArrayView3};

/// ITU-R BT.601 luminosity coefficients
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Reduce an RGBA image to a single-channel luminance buffer.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 4) with RGBA u8 values
///
/// # Returns
/// 2D luminance array of shape (height, width)
pub fn luma(input: ArrayView3<u8>) -> Array2<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array2::<u8>::zeros((height, width));

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f32;
            let g = input[[y, x, 1]] as f32;
            let b = input[[y, x, 2]] as f32;

            let gray = LUMA_R * r + LUMA_G * g + LUMA_B * b;
            output[[y, x]] = gray.clamp(0.0, 255.0) as u8;
        }
    }

    output
}

/// Broadcast a luminance buffer into an opaque RGBA image.
///
/// R, G and B all receive the luminance value; alpha is 255 everywhere.
pub fn broadcast_rgba(luma: &Array2<u8>) -> Array3<u8> {
    let (height, width) = luma.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            let v = luma[[y, x]];
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

    #[test]
    fn test_luma_red() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 0]] = 255; // R
        img[[0, 0, 3]] = 255; // A

        let result = luma(img.view());

        // 0.299 * 255 ≈ 76
        assert!((result[[0, 0]] as i32 - 76).abs() <= 1);
    }

    #[test]
    fn test_luma_green() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 1]] = 255; // G
        img[[0, 0, 3]] = 255; // A

        let result = luma(img.view());

        // 0.587 * 255 ≈ 150
        assert!((result[[0, 0]] as i32 - 150).abs() <= 1);
    }

    #[test]
    fn test_luma_white_is_near_white() {
        let img = Array3::<u8>::from_elem((2, 2, 4), 255);

        let result = luma(img.view());

        // 0.299 + 0.587 + 0.114 = 1.0, minus float truncation
        for &v in result.iter() {
            assert!(v >= 254);
        }
    }

    #[test]
    fn test_luma_deterministic() {
        let mut img = Array3::<u8>::zeros((3, 3, 4));
        for (i, v) in img.iter_mut().enumerate() {
            *v = (i * 7 % 256) as u8;
        }

        let a = luma(img.view());
        let b = luma(img.view());
        assert_eq!(a, b);
    }

    #[test]
    fn test_luma_preserves_dimensions() {
        let img = Array3::<u8>::zeros((5, 7, 4));
        let result = luma(img.view());
        assert_eq!(result.dim(), (5, 7));
    }

    #[test]
    fn test_broadcast_rgba_opaque() {
        let mut gray = Array2::<u8>::zeros((2, 3));
        gray[[1, 2]] = 99;

        let result = broadcast_rgba(&gray);

        assert_eq!(result.dim(), (2, 3, 4));
        assert_eq!(result[[1, 2, 0]], 99);
        assert_eq!(result[[1, 2, 1]], 99);
        assert_eq!(result[[1, 2, 2]], 99);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(result[[y, x, 3]], 255);
            }
        }
    }
}
