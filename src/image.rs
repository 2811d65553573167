//! RasterImage — pixel grid plus dimensions, buffer conversion, and the
//! chainable filter surface.

use log::debug;

use crate::color::Rgba;
use crate::error::RasterError;
use crate::filters::{color_adjust, grayscale, stylize};
use crate::grid::PixelGrid;
use crate::surface::SurfaceProvider;

/// An in-memory RGBA raster: positive width/height and exactly one owned
/// [`PixelGrid`] of matching shape.
///
/// The shape invariant (`grid` is height rows of width cells) is checked
/// at every constructor and preserved by the filter methods, which build
/// a same-shape grid and swap it in wholesale.
///
/// Filter methods mutate in place and return `&mut Self` so calls chain:
///
/// ```
/// use rasterview::RasterImage;
///
/// let mut img = RasterImage::from_pixel_buffer(&[10, 20, 30, 255], 1, 1)?;
/// img.grayscale().invert();
/// assert_eq!(img.to_pixel_buffer(), vec![235, 235, 235, 255]);
/// # Ok::<(), rasterview::RasterError>(())
/// ```
///
/// The previous grid is discarded on each filter call; callers that need
/// the pre-filter state use the non-mutating variants ([`grayscaled`]
/// and friends) or clone beforehand.
///
/// [`grayscaled`]: RasterImage::grayscaled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: usize,
    height: usize,
    grid: PixelGrid,
}

impl RasterImage {
    /// Create an image over a blank (transparent) grid.
    ///
    /// The caller is expected to populate every cell before reading the
    /// image back out.
    pub fn new(width: usize, height: usize) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            grid: PixelGrid::new(width, height),
        })
    }

    /// Create an image adopting an already-populated grid.
    ///
    /// Ownership of `grid` transfers to the image; the grid's shape must
    /// match the declared dimensions.
    pub fn from_grid(width: usize, height: usize, grid: PixelGrid) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        if grid.width() != width || grid.height() != height {
            return Err(RasterError::GridShapeMismatch {
                width,
                height,
                grid_width: grid.width(),
                grid_height: grid.height(),
            });
        }
        Ok(Self {
            width,
            height,
            grid,
        })
    }

    /// Decode a flat RGBA buffer into an image.
    ///
    /// `buffer` is row-major, 4 bytes per pixel (R, G, B, A), no row
    /// padding; the pixel at (x, y) starts at `(y * width + x) * 4`.
    /// The buffer length must be exactly `width * height * 4`.
    pub fn from_pixel_buffer(
        buffer: &[u8],
        width: usize,
        height: usize,
    ) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        let expected = width * height * 4;
        if buffer.len() != expected {
            return Err(RasterError::BufferSizeMismatch {
                expected,
                actual: buffer.len(),
                width,
                height,
            });
        }

        let grid = PixelGrid::from_fn(width, height, |x, y| {
            let index = (y * width + x) * 4;
            Rgba::new(
                buffer[index],
                buffer[index + 1],
                buffer[index + 2],
                buffer[index + 3],
            )
        });
        Ok(Self {
            width,
            height,
            grid,
        })
    }

    /// Decode the named source via the surface provider, then build the
    /// image from the resulting buffer.
    ///
    /// One opaque collaborator call; provider failures propagate
    /// unretried and untranslated.
    pub fn from_source<P: SurfaceProvider>(
        provider: &mut P,
        identifier: &str,
    ) -> Result<Self, RasterError> {
        debug!("decoding source {identifier:?}");
        let decoded = provider.decode_source(identifier)?;
        Self::from_pixel_buffer(&decoded.data, decoded.width, decoded.height)
    }

    /// Encode the image as a flat RGBA buffer, the exact inverse of
    /// [`from_pixel_buffer`](Self::from_pixel_buffer).
    ///
    /// Channels are `u8` already, so every written byte is in 0-255 by
    /// construction.
    pub fn to_pixel_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.width * self.height * 4);
        for y in 0..self.height {
            for x in 0..self.width {
                let p = self.grid.get(x, y);
                buffer.push(p.red);
                buffer.push(p.green);
                buffer.push(p.blue);
                buffer.push(p.alpha);
            }
        }
        buffer
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow the pixel grid.
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Read the pixel at column `x`, row `y`.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.grid.get(x, y)
    }

    // ========================================================================
    // Filters — in place, chainable
    // ========================================================================

    /// Convert to grayscale (channel-average). In place, chainable.
    pub fn grayscale(&mut self) -> &mut Self {
        self.grid = grayscale::grayscale(&self.grid);
        self
    }

    /// Invert every color channel. In place, chainable.
    pub fn invert(&mut self) -> &mut Self {
        self.grid = color_adjust::invert(&self.grid);
        self
    }

    /// Add `amount` to every color channel, capped at 255. In place,
    /// chainable. Negative amounts darken; see
    /// [`filters::color_adjust::brighten`](crate::filters::color_adjust::brighten)
    /// for the clamping contract.
    pub fn brighten(&mut self, amount: i32) -> &mut Self {
        self.grid = color_adjust::brighten(&self.grid, amount);
        self
    }

    /// Binarize against `cutoff`. In place, chainable.
    pub fn threshold(&mut self, cutoff: u8) -> &mut Self {
        self.grid = stylize::threshold(&self.grid, cutoff);
        self
    }

    // ========================================================================
    // Filters — non-mutating variants
    // ========================================================================

    /// Grayscale copy; the source image is left untouched.
    pub fn grayscaled(&self) -> Self {
        self.with_grid(grayscale::grayscale(&self.grid))
    }

    /// Inverted copy; the source image is left untouched.
    pub fn inverted(&self) -> Self {
        self.with_grid(color_adjust::invert(&self.grid))
    }

    /// Brightened copy; the source image is left untouched.
    pub fn brightened(&self, amount: i32) -> Self {
        self.with_grid(color_adjust::brighten(&self.grid, amount))
    }

    /// Thresholded copy; the source image is left untouched.
    pub fn thresholded(&self, cutoff: u8) -> Self {
        self.with_grid(stylize::threshold(&self.grid, cutoff))
    }

    fn with_grid(&self, grid: PixelGrid) -> Self {
        Self {
            width: self.width,
            height: self.height,
            grid,
        }
    }
}
