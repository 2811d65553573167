//! Grayscale conversion filter.
//!
//! Uses the plain channel average, avg = (r + g + b) / 3, not a
//! luminosity-weighted sum. The average is computed in `f32` and
//! truncated by the 8-bit store, so a source pixel of (10, 20, 30)
//! lands exactly on 20.

use crate::color::Rgba;
use crate::grid::PixelGrid;

/// Convert a grid to grayscale (channel-average method).
///
/// Output has R = G = B = avg, alpha preserved. Idempotent: once
/// r = g = b, the average is the channel value itself.
pub fn grayscale(input: &PixelGrid) -> PixelGrid {
    PixelGrid::from_fn(input.width(), input.height(), |x, y| {
        let p = input.get(x, y);
        let avg = p.channel_average() as u8;
        Rgba::new(avg, avg, avg, p.alpha)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_average() {
        let mut grid = PixelGrid::new(1, 1);
        grid.set(0, 0, Rgba::new(10, 20, 30, 255));

        let result = grayscale(&grid);

        // (10 + 20 + 30) / 3 = 20
        assert_eq!(result.get(0, 0), Rgba::new(20, 20, 20, 255));
    }

    #[test]
    fn test_grayscale_truncates_fractional_average() {
        let mut grid = PixelGrid::new(1, 1);
        grid.set(0, 0, Rgba::new(0, 0, 1, 255));

        let result = grayscale(&grid);

        // 1/3 truncates to 0 at the 8-bit store
        assert_eq!(result.get(0, 0), Rgba::new(0, 0, 0, 255));
    }

    #[test]
    fn test_grayscale_preserves_alpha() {
        let mut grid = PixelGrid::new(1, 1);
        grid.set(0, 0, Rgba::new(128, 64, 32, 100));

        let result = grayscale(&grid);
        assert_eq!(result.get(0, 0).alpha, 100);
    }

    #[test]
    fn test_grayscale_idempotent() {
        let mut grid = PixelGrid::new(2, 1);
        grid.set(0, 0, Rgba::new(200, 100, 50, 255));
        grid.set(1, 0, Rgba::new(1, 2, 250, 17));

        let once = grayscale(&grid);
        let twice = grayscale(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_grayscale_does_not_mutate_input() {
        let mut grid = PixelGrid::new(1, 1);
        grid.set(0, 0, Rgba::new(10, 20, 30, 255));
        let before = grid.clone();

        let _ = grayscale(&grid);
        assert_eq!(grid, before);
    }
}
