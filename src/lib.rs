//! Sketch Magic core: photo-to-sketch filter pipeline.
//!
//! Converts a decoded RGBA pixel buffer into a stylized line-art
//! rendering using classical image-processing filters.
//!
//! ## Image Format
//!
//! The boundary format is a flat RGBA byte buffer (length
//! `width * height * 4`, row-major, top-to-bottom) paired with its
//! dimensions. Internally buffers are `ndarray` arrays:
//! `(height, width, 4)` for RGBA, `(height, width)` for luminance.
//! Output buffers always match the input dimensions and are fully
//! opaque.
//!
//! ## Styles
//!
//! Four sketch styles built from the same primitives (grayscale
//! reduction, inversion, separable Gaussian blur, Sobel edges,
//! contrast remapping):
//!
//! - **Pencil** - dodge-blended shading, the classic pencil look
//! - **Outline** - dark edges on a white background
//! - **Charcoal** - heavy blur combined with strong edges
//! - **Soft** - gentle blend of the image with its own blur
//!
//! ## Boundary
//!
//! [`convert`] is the pure entry point; [`Converter`] wraps it with an
//! at-most-one-in-flight guard for callers that dispatch conversions to
//! a background thread. Decoding image files and encoding the result
//! (e.g. to PNG) is the caller's job. With the `wasm` feature, flat
//! slice exports for JavaScript are available in [`wasm`].

pub mod convert;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use convert::{convert, ConvertError, Converter, SketchParams, SketchStyle};
