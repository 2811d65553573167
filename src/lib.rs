//! rasterview
//!
//! Per-pixel filters over an in-memory RGBA raster, plus rendering of the
//! result onto a drawable surface supplied by an external provider.
//!
//! ## Image Format
//! One format, everywhere: 8-bit RGBA.
//! - **Pixel grid**: (height, width) grid of [`Rgba`] values, indexed row
//!   (y) first, column (x) second
//! - **Flat buffer**: row-major bytes, 4 per pixel in R, G, B, A order,
//!   no padding between rows — the interop format with the surface
//!   provider (`getImageData`-compatible)
//!
//! Channel values are `u8` (0-255). Filters that compute real-valued
//! intermediates (channel averages) truncate on store, matching the
//! clamping contract of an 8-bit pixel buffer.
//!
//! ## Architecture
//! Filters are free functions over [`PixelGrid`] in the [`filters`]
//! module; [`RasterImage`] surfaces them as chainable in-place methods and
//! owns buffer conversion. [`ImageView`] wraps a [`RasterImage`] and adds
//! [`render`](ImageView::render), which pushes the pixel buffer to a
//! drawable surface through the [`SurfaceProvider`] boundary. Decoding a
//! source image and painting a surface are the provider's job, never the
//! core's.

pub mod color;
pub mod error;
pub mod filters;
pub mod grid;
pub mod image;
pub mod surface;
pub mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use color::Rgba;
pub use error::{ProviderError, RasterError};
pub use grid::PixelGrid;
pub use image::RasterImage;
pub use surface::{DecodedImage, MemoryProvider, MemorySurface, SurfaceProvider};
pub use view::ImageView;
