//! Sobel edge detection for luminance buffers.
//!
//! Computes gradient magnitude per interior pixel; border pixels stay
//! at zero since the 3x3 kernels need a full neighborhood.

use ndarray::{Array2, ArrayView2};

/// Apply Sobel edge detection to a luminance buffer.
///
/// The gradient magnitude is scaled by `strength` and clamped to 255.
/// Border pixels (row 0, last row, column 0, last column) are left at
/// zero; images narrower or shorter than 3 pixels have no interior and
/// come back all zero.
///
/// # Arguments
/// * `input` - 2D luminance array of shape (height, width)
/// * `strength` - Gradient magnitude multiplier
///
/// # Returns
/// Edge-magnitude array with same dimensions
pub fn sobel(input: ArrayView2<u8>, strength: f32) -> Array2<u8> {
    let (height, width) = input.dim();
    let mut output = Array2::<u8>::zeros((height, width));

    // Sobel kernels
    let kernel_x: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
    let kernel_y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mut gx = 0i32;
            let mut gy = 0i32;

            for ky in 0..3 {
                for kx in 0..3 {
                    let v = input[[y + ky - 1, x + kx - 1]] as i32;
                    gx += v * kernel_x[ky][kx];
                    gy += v * kernel_y[ky][kx];
                }
            }

            let magnitude = ((gx * gx + gy * gy) as f32).sqrt() * strength;
            output[[y, x]] = magnitude.clamp(0.0, 255.0) as u8;
        }
    }

    output
}
