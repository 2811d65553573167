//! Filter modules for per-pixel image effects.
//!
//! ## Supported Format
//!
//! All filters work on a [`PixelGrid`](crate::PixelGrid) of 8-bit RGBA
//! cells (0-255 per channel).
//!
//! ## Architecture
//!
//! All filters follow the same shape:
//! - **Pure over the grid** — take `&PixelGrid`, return a new, fully
//!   populated grid of the same dimensions; never mutate the input
//! - **Straightforward iteration** — nested y/x loops, one pass, no
//!   spatial context (no kernels, no convolution)
//! - **Alpha preservation** — the alpha channel is always carried through
//!   unchanged
//!
//! [`RasterImage`](crate::RasterImage) surfaces each filter as a
//! chainable method that swaps the new grid in place of the old one.
//!
//! ## Filter Categories
//!
//! - **Grayscale**: channel-average desaturation
//! - **Color adjust**: invert, brighten
//! - **Stylize**: threshold (binary black/white)

pub mod color_adjust;
pub mod grayscale;
pub mod stylize;
