//! 2D pixel grid.
//!
//! Storage only — the grid has no behavior beyond allocation and cell
//! access. Filters build a whole new grid and the owning image swaps it
//! in; see the [`filters`](crate::filters) module.

use ndarray::Array2;

use crate::color::Rgba;

/// A fixed-size 2D grid of [`Rgba`] cells, indexed row (y) first.
///
/// Backed by an `ndarray::Array2` of shape (height, width). A fresh grid
/// is filled with transparent black rather than left uninitialized;
/// callers building an image are still expected to populate every cell
/// before meaningful reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    cells: Array2<Rgba>,
}

impl PixelGrid {
    /// Allocate a blank `width` x `height` grid.
    ///
    /// Dimensions are fixed for the lifetime of the grid. Non-positive
    /// dimensions are rejected by [`RasterImage`](crate::RasterImage)
    /// construction, not here.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), Rgba::TRANSPARENT),
        }
    }

    /// Build a fully populated grid by calling `f(x, y)` for every cell,
    /// row-major (y outer, x inner).
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Rgba,
    {
        Self {
            cells: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        }
    }

    /// Grid width (columns).
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid height (rows).
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Read the cell at column `x`, row `y`.
    ///
    /// # Panics
    /// Panics if `x >= width` or `y >= height`.
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.cells[[y, x]]
    }

    /// Write the cell at column `x`, row `y`.
    ///
    /// # Panics
    /// Panics if `x >= width` or `y >= height`.
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        self.cells[[y, x]] = color;
    }
}
