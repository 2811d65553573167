//! Error types for rasterview.
//!
//! The filter and conversion operations themselves are total over
//! well-formed images; everything that can fail, fails fast at a
//! construction or provider boundary.

use thiserror::Error;

/// Errors raised by image construction, conversion, and rendering.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Width or height was zero.
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
    },

    /// A supplied grid's shape disagrees with the declared dimensions.
    #[error("grid is {grid_width}x{grid_height}, declared {width}x{height}")]
    GridShapeMismatch {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
        /// Actual grid width.
        grid_width: usize,
        /// Actual grid height.
        grid_height: usize,
    },

    /// A flat pixel buffer has the wrong length for the declared dimensions.
    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferSizeMismatch {
        /// Expected byte count (`width * height * 4`).
        expected: usize,
        /// Actual byte count.
        actual: usize,
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
    },

    /// A surface provider call failed. Not caught, retried, or translated;
    /// fatal to the operation that made the call.
    #[error("surface provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Errors surfaced by a [`SurfaceProvider`](crate::SurfaceProvider)
/// implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No drawable surface could be obtained at the requested size.
    #[error("no drawable surface available for {width}x{height}")]
    SurfaceUnavailable {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// The named source could not be loaded or decoded.
    #[error("failed to decode source {identifier:?}: {reason}")]
    DecodeFailed {
        /// Source identifier as given to the provider.
        identifier: String,
        /// Provider-specific failure description.
        reason: String,
    },

    /// A paint request did not fit the target surface.
    #[error("cannot paint {width}x{height} buffer onto {surface_width}x{surface_height} surface")]
    PaintMismatch {
        /// Buffer width.
        width: usize,
        /// Buffer height.
        height: usize,
        /// Surface width.
        surface_width: usize,
        /// Surface height.
        surface_height: usize,
    },
}
