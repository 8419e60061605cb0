//! Filter modules for the sketch pipeline.
//!
//! ## Buffer conventions
//!
//! | Buffer | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | RGBA | (H, W, 4) | u8 | Red, green, blue, alpha, 0-255 |
//! | Luminance | (H, W) | u8 | Single intensity channel, 0-255 |
//!
//! All filters take array views and return fresh owned arrays of the
//! same height and width; no buffer is ever mutated in place. Values
//! are clamped to 0-255 at the point they are stored into a u8 buffer.
//!
//! ## Pipeline
//!
//! - **Primitives**: grayscale reduction, inversion, contrast remapping,
//!   separable Gaussian blur, Sobel edge detection.
//! - **Composers** ([`sketch`]): Pencil, Outline, Charcoal and Soft
//!   combine the primitives into a final opaque RGBA rendering.

pub mod adjust;
pub mod blur;
pub mod edge;
pub mod grayscale;
pub mod sketch;
