//! Color adjustment filters: Invert, Brighten.
//!
//! Pixel-wise operations with no spatial context. Alpha is always
//! preserved unchanged.

use crate::color::Rgba;
use crate::grid::PixelGrid;

// ============================================================================
// Invert
// ============================================================================

/// Invert each color channel: new = 255 - old.
///
/// An involution — applying it twice restores every channel.
pub fn invert(input: &PixelGrid) -> PixelGrid {
    PixelGrid::from_fn(input.width(), input.height(), |x, y| {
        let p = input.get(x, y);
        Rgba::new(255 - p.red, 255 - p.green, 255 - p.blue, p.alpha)
    })
}

// ============================================================================
// Brighten
// ============================================================================

/// Add `amount` to each color channel, capped at 255.
///
/// `amount` may be negative. The filter itself enforces only the upper
/// bound, min(c + amount, 255); the lower bound comes from the saturating
/// store into 8-bit channel storage, the same place a clamped pixel
/// buffer would apply it.
pub fn brighten(input: &PixelGrid, amount: i32) -> PixelGrid {
    let lift = |v: u8| (v as i32 + amount).min(255).max(0) as u8;

    PixelGrid::from_fn(input.width(), input.height(), |x, y| {
        let p = input.get(x, y);
        Rgba::new(lift(p.red), lift(p.green), lift(p.blue), p.alpha)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Invert
    // ========================================================================

    #[test]
    fn test_invert_values() {
        let mut grid = PixelGrid::new(1, 1);
        grid.set(0, 0, Rgba::new(0, 100, 255, 200));

        let result = invert(&grid);
        assert_eq!(result.get(0, 0), Rgba::new(255, 155, 0, 200));
    }

    #[test]
    fn test_invert_involution() {
        let mut grid = PixelGrid::new(2, 2);
        grid.set(0, 0, Rgba::new(0, 1, 2, 3));
        grid.set(1, 0, Rgba::new(255, 254, 253, 252));
        grid.set(0, 1, Rgba::new(127, 128, 129, 130));
        grid.set(1, 1, Rgba::new(10, 20, 30, 255));

        let back = invert(&invert(&grid));
        assert_eq!(back, grid);
    }

    // ========================================================================
    // Brighten
    // ========================================================================

    #[test]
    fn test_brighten_adds_amount() {
        let mut grid = PixelGrid::new(1, 1);
        grid.set(0, 0, Rgba::new(10, 20, 30, 255));

        let result = brighten(&grid, 40);
        assert_eq!(result.get(0, 0), Rgba::new(50, 60, 70, 255));
    }

    #[test]
    fn test_brighten_upper_clamp() {
        let mut grid = PixelGrid::new(1, 1);
        grid.set(0, 0, Rgba::new(200, 250, 255, 128));

        let result = brighten(&grid, 100);
        assert_eq!(result.get(0, 0), Rgba::new(255, 255, 255, 128));
    }

    #[test]
    fn test_brighten_255_on_black_is_white() {
        let mut grid = PixelGrid::new(2, 1);
        grid.set(0, 0, Rgba::new(0, 0, 0, 255));
        grid.set(1, 0, Rgba::new(0, 0, 0, 7));

        let result = brighten(&grid, 255);
        assert_eq!(result.get(0, 0), Rgba::new(255, 255, 255, 255));
        // alpha untouched
        assert_eq!(result.get(1, 0), Rgba::new(255, 255, 255, 7));
    }

    #[test]
    fn test_brighten_negative_saturates_at_zero() {
        let mut grid = PixelGrid::new(1, 1);
        grid.set(0, 0, Rgba::new(10, 100, 200, 255));

        let result = brighten(&grid, -50);
        // 10 - 50 saturates at the 8-bit store
        assert_eq!(result.get(0, 0), Rgba::new(0, 50, 150, 255));
    }
}
