//! Separable Gaussian blur for luminance buffers.
//!
//! Uses a two-pass (horizontal then vertical) 1D convolution with a
//! radius-derived kernel. Out-of-range neighbors clamp to the nearest
//! edge pixel, never wrap or zero-pad.

use ndarray::{Array2, ArrayView2};

/// Generate a 1D Gaussian kernel from an integer radius.
///
/// Kernel size is `2 * radius + 1` with `sigma = radius / 2`, normalized
/// so the weights sum to 1.0. Radius 0 yields the identity kernel `[1.0]`.
///
/// # Arguments
/// * `radius` - Blur radius in pixels
///
/// # Returns
/// Normalized 1D kernel as Vec<f32>
pub fn gaussian_kernel_1d(radius: usize) -> Vec<f32> {
    if radius == 0 {
        return vec![1.0];
    }

    let size = 2 * radius + 1;
    let sigma = radius as f32 / 2.0;

    let mut kernel: Vec<f32> = (0..size)
        .map(|i| {
            let x = i as f32 - radius as f32;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    // Normalize
    let sum: f32 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }

    kernel
}

/// Apply separable Gaussian blur to a luminance buffer.
///
/// Radius 0 is the identity: the input values are returned unchanged.
///
/// # Arguments
/// * `input` - 2D luminance array of shape (height, width)
/// * `radius` - Blur radius in pixels
///
/// # Returns
/// Blurred luminance array with same dimensions
pub fn gaussian_blur(input: ArrayView2<u8>, radius: usize) -> Array2<u8> {
    if radius == 0 {
        return input.to_owned();
    }

    let (height, width) = input.dim();
    let kernel = gaussian_kernel_1d(radius);
    let half = kernel.len() / 2;

    // Work in f32 for precision
    let mut temp = Array2::<f32>::zeros((height, width));
    let mut result = Array2::<f32>::zeros((height, width));

    // Horizontal pass
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0f32;
            let mut weight_sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let sx = (x as isize + ki as isize - half as isize)
                    .clamp(0, width as isize - 1) as usize;
                sum += input[[y, sx]] as f32 * kv;
                weight_sum += kv;
            }
            temp[[y, x]] = sum / weight_sum;
        }
    }

    // Vertical pass
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0f32;
            let mut weight_sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let sy = (y as isize + ki as isize - half as isize)
                    .clamp(0, height as isize - 1) as usize;
                sum += temp[[sy, x]] * kv;
                weight_sum += kv;
            }
            result[[y, x]] = sum / weight_sum;
        }
    }

    // Convert back to u8
    result.mapv(|v| v.clamp(0.0, 255.0) as u8)
}
