//! Conversion boundary: parameter handling, validation and dispatch.
//!
//! This is the seam between the pure filter pipeline and whatever
//! front end decodes images and displays results. Callers hand in a
//! flat RGBA byte buffer with its dimensions and get back a fresh
//! buffer of identical length, or a single recoverable error.
//!
//! [`Converter`] adds the at-most-one-conversion guard: a request that
//! arrives while another conversion is in flight is rejected, never
//! queued, so a caller can run conversions on a background thread and
//! keep its own loop responsive.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, error};
use ndarray::{Array3, ArrayView3};
use thiserror::Error;

use crate::filters::sketch;

/// The four supported sketch styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SketchStyle {
    #[default]
    Pencil,
    Outline,
    Charcoal,
    Soft,
}

impl SketchStyle {
    /// Parse a style name, case-insensitively.
    ///
    /// Unrecognized names fall back to [`SketchStyle::Pencil`]; an
    /// unknown selector is a defined default, not an error.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "outline" => Self::Outline,
            "charcoal" => Self::Charcoal,
            "soft" => Self::Soft,
            _ => Self::Pencil,
        }
    }

    /// Canonical lowercase name of the style.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pencil => "pencil",
            Self::Outline => "outline",
            Self::Charcoal => "charcoal",
            Self::Soft => "soft",
        }
    }
}

/// Per-conversion parameters. Nothing is persisted between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchParams {
    pub style: SketchStyle,
    /// Gaussian blur radius in pixels (UI range is typically 0-20).
    pub blur_radius: usize,
    /// Sobel gradient magnitude multiplier (typically 0-5).
    pub edge_strength: f32,
    /// Contrast factor around the 128 midpoint (typically 0.1-3).
    pub contrast: f32,
}

impl Default for SketchParams {
    fn default() -> Self {
        Self {
            style: SketchStyle::Pencil,
            blur_radius: 5,
            edge_strength: 1.0,
            contrast: 1.0,
        }
    }
}

/// Errors surfaced at the conversion boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// Buffer length does not agree with the stated dimensions.
    #[error(
        "invalid input: {width}x{height} RGBA image needs {expected} bytes, buffer has {actual}"
    )]
    InvalidInput {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// A filter stage failed; no output was produced.
    #[error("sketch conversion failed, please try again with a different image")]
    ProcessingFailed,

    /// Another conversion is already running.
    #[error("a conversion is already in progress")]
    Busy,
}

/// Convert a flat RGBA buffer into a sketch rendering.
///
/// The output buffer always has the same length as the input and is
/// fully opaque. The input is never modified; on error nothing is
/// returned at all, so a caller's previous output stays intact.
///
/// # Errors
///
/// [`ConvertError::InvalidInput`] when `data.len()` is not
/// `width * height * 4`. [`ConvertError::ProcessingFailed`] when a
/// filter stage fails; the cause is logged at error level.
pub fn convert(
    data: &[u8],
    width: usize,
    height: usize,
    params: &SketchParams,
) -> Result<Vec<u8>, ConvertError> {
    let expected = width * height * 4;
    if data.len() != expected {
        return Err(ConvertError::InvalidInput {
            width,
            height,
            expected,
            actual: data.len(),
        });
    }

    debug!(
        "converting {}x{} image, style={}, blur={}, edge={}, contrast={}",
        width,
        height,
        params.style.name(),
        params.blur_radius,
        params.edge_strength,
        params.contrast
    );

    let input = Array3::from_shape_vec((height, width, 4), data.to_vec())
        .map_err(|_| ConvertError::InvalidInput {
            width,
            height,
            expected,
            actual: data.len(),
        })?;

    // Contain any filter-stage panic; the caller gets a single
    // recoverable failure and no partial buffer.
    let result = panic::catch_unwind(AssertUnwindSafe(|| compose(input.view(), params)));

    match result {
        Ok(output) => {
            debug!("conversion finished, style={}", params.style.name());
            Ok(output.into_raw_vec_and_offset().0)
        }
        Err(_) => {
            error!("filter stage panicked during {} conversion", params.style.name());
            Err(ConvertError::ProcessingFailed)
        }
    }
}

/// Dispatch to the composer for the selected style.
fn compose(input: ArrayView3<u8>, params: &SketchParams) -> Array3<u8> {
    match params.style {
        SketchStyle::Pencil => sketch::pencil(input, params.blur_radius, params.contrast),
        SketchStyle::Outline => sketch::outline(input, params.edge_strength, params.contrast),
        SketchStyle::Charcoal => sketch::charcoal(
            input,
            params.blur_radius,
            params.edge_strength,
            params.contrast,
        ),
        SketchStyle::Soft => sketch::soft(input, params.blur_radius, params.contrast),
    }
}

/// Conversion front door with an at-most-one-in-flight guard.
///
/// The guard only prevents concurrent entry; the filters themselves are
/// pure and share no state, so no further locking exists.
#[derive(Debug, Default)]
pub struct Converter {
    busy: AtomicBool,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a conversion is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Run a conversion unless one is already in flight.
    ///
    /// # Errors
    ///
    /// [`ConvertError::Busy`] when another conversion holds the guard;
    /// the request is rejected, not queued. Otherwise the errors of
    /// [`convert`]. The guard is released on every exit path.
    pub fn convert(
        &self,
        data: &[u8],
        width: usize,
        height: usize,
        params: &SketchParams,
    ) -> Result<Vec<u8>, ConvertError> {
        if self.busy.swap(true, Ordering::AcqRel) {
            return Err(ConvertError::Busy);
        }

        let result = convert(data, width, height, params);
        self.busy.store(false, Ordering::Release);
        result
    }
}
