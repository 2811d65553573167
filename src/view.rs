//! ImageView — a raster image specialized for presentation.
//!
//! Composition, not inheritance: the view owns a [`RasterImage`] and
//! delegates the filter surface to it, adding only the ability to render
//! onto a provider-supplied surface.

use log::debug;

use crate::error::RasterError;
use crate::image::RasterImage;
use crate::surface::SurfaceProvider;

/// A presentable image: an owned [`RasterImage`] plus [`render`].
///
/// Construction takes the image by value, so the view is a snapshot —
/// there is no aliased source object whose later mutation could leak in.
/// The view owns no surface; one is obtained fresh from the provider on
/// every render.
///
/// [`render`]: ImageView::render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    image: RasterImage,
}

impl ImageView {
    /// Wrap a fully populated image for presentation.
    pub fn new(image: RasterImage) -> Self {
        Self { image }
    }

    /// Borrow the underlying image.
    pub fn image(&self) -> &RasterImage {
        &self.image
    }

    /// Mutably borrow the underlying image.
    pub fn image_mut(&mut self) -> &mut RasterImage {
        &mut self.image
    }

    /// Unwrap back into the underlying image.
    pub fn into_image(self) -> RasterImage {
        self.image
    }

    // Delegated filter surface, chainable like the image's own.

    /// Convert to grayscale. In place, chainable.
    pub fn grayscale(&mut self) -> &mut Self {
        self.image.grayscale();
        self
    }

    /// Invert every color channel. In place, chainable.
    pub fn invert(&mut self) -> &mut Self {
        self.image.invert();
        self
    }

    /// Add `amount` to every color channel, capped at 255. In place,
    /// chainable.
    pub fn brighten(&mut self, amount: i32) -> &mut Self {
        self.image.brighten(amount);
        self
    }

    /// Binarize against `cutoff`. In place, chainable.
    pub fn threshold(&mut self, cutoff: u8) -> &mut Self {
        self.image.threshold(cutoff);
        self
    }

    /// Render the current pixels onto a fresh drawable surface.
    ///
    /// Obtains a surface sized to the image from the provider, encodes
    /// the grid as a flat buffer, and asks the provider to paint it.
    /// Returns the painted surface; any provider failure is fatal to
    /// this call.
    pub fn render<P: SurfaceProvider>(&self, provider: &mut P) -> Result<P::Surface, RasterError> {
        let (width, height) = (self.image.width(), self.image.height());
        debug!("rendering {width}x{height} view");

        let mut surface = provider.drawable_surface(width, height)?;
        let buffer = self.image.to_pixel_buffer();
        provider.paint(&mut surface, &buffer, width, height)?;
        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::surface::MemoryProvider;

    fn image_1x2() -> RasterImage {
        RasterImage::from_pixel_buffer(&[200, 200, 200, 255, 50, 50, 50, 255], 2, 1).unwrap()
    }

    #[test]
    fn test_render_paints_current_pixels() {
        let view = ImageView::new(image_1x2());
        let mut provider = MemoryProvider::new();

        let surface = view.render(&mut provider).unwrap();
        assert_eq!(surface.width, 2);
        assert_eq!(surface.height, 1);
        assert_eq!(surface.data, view.image().to_pixel_buffer());
    }

    #[test]
    fn test_filter_then_render() {
        let mut view = ImageView::new(image_1x2());
        let mut provider = MemoryProvider::new();

        let surface = view.threshold(120).render(&mut provider).unwrap();
        assert_eq!(
            surface.data,
            vec![255, 255, 255, 255, 0, 0, 0, 255]
        );
    }

    #[test]
    fn test_view_is_a_snapshot() {
        let image = image_1x2();
        let original = image.clone();

        let mut view = ImageView::new(image);
        view.invert();

        // the wrapped copy changed; the caller's clone did not
        assert_ne!(*view.image(), original);
        assert_eq!(original.pixel(0, 0), Rgba::new(200, 200, 200, 255));
    }

    #[test]
    fn test_delegated_chain_matches_image_chain() {
        let mut view = ImageView::new(image_1x2());
        view.grayscale().brighten(10).invert();

        let mut img = image_1x2();
        img.grayscale().brighten(10).invert();

        assert_eq!(*view.image(), img);
    }
}
