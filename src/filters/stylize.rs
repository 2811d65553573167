//! Stylize filters: Threshold.
//!
//! Binarizes an image against a brightness cutoff.

use crate::color::Rgba;
use crate::grid::PixelGrid;

/// Threshold a grid to pure black/white.
///
/// Each pixel's channel average, avg = (r + g + b) / 3, is compared
/// against `cutoff`: 255 if avg >= cutoff, else 0, written to all three
/// color channels. Alpha is preserved.
pub fn threshold(input: &PixelGrid, cutoff: u8) -> PixelGrid {
    PixelGrid::from_fn(input.width(), input.height(), |x, y| {
        let p = input.get(x, y);
        let value = if p.channel_average() >= cutoff as f32 {
            255
        } else {
            0
        };
        Rgba::new(value, value, value, p.alpha)
    })
}
