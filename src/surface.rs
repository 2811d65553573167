//! The surface provider boundary.
//!
//! The core never decodes image files and never owns a display surface;
//! both belong to an external collaborator behind [`SurfaceProvider`].
//! In the original browser deployment that collaborator is the canvas
//! (`drawImage`/`getImageData`/`putImageData`); here the crate ships an
//! in-memory implementation for tests and composition, and the `cli`
//! driver adds a file-backed one.

use std::collections::HashMap;

use log::{debug, trace};

use crate::error::ProviderError;

/// A source image decoded into the flat RGBA interop format.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Row-major RGBA bytes, `width * height * 4` of them.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
}

/// External collaborator supplying drawable surfaces, source decoding,
/// and pixel-buffer painting.
///
/// Failures are the provider's to report and the caller's to treat as
/// fatal; the core never retries or translates them.
pub trait SurfaceProvider {
    /// The drawable surface type this provider hands out.
    type Surface;

    /// Obtain (or resize and return) a drawable surface of the requested
    /// pixel dimensions.
    fn drawable_surface(
        &mut self,
        width: usize,
        height: usize,
    ) -> Result<Self::Surface, ProviderError>;

    /// Load and decode the named source into a flat RGBA buffer.
    fn decode_source(&mut self, identifier: &str) -> Result<DecodedImage, ProviderError>;

    /// Write `buffer` (row-major RGBA, `width * height * 4` bytes) onto
    /// the surface starting at its origin.
    fn paint(
        &mut self,
        surface: &mut Self::Surface,
        buffer: &[u8],
        width: usize,
        height: usize,
    ) -> Result<(), ProviderError>;
}

/// A drawable surface held entirely in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    /// Surface width in pixels.
    pub width: usize,
    /// Surface height in pixels.
    pub height: usize,
    /// Row-major RGBA contents, `width * height * 4` bytes.
    pub data: Vec<u8>,
}

/// In-memory [`SurfaceProvider`]: sources are preloaded buffers, surfaces
/// are plain byte vectors.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    sources: HashMap<String, DecodedImage>,
}

impl MemoryProvider {
    /// Create a provider with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decoded source under `identifier`.
    pub fn insert_source(
        &mut self,
        identifier: &str,
        data: Vec<u8>,
        width: usize,
        height: usize,
    ) {
        self.sources.insert(
            identifier.to_owned(),
            DecodedImage {
                data,
                width,
                height,
            },
        );
    }
}

impl SurfaceProvider for MemoryProvider {
    type Surface = MemorySurface;

    fn drawable_surface(
        &mut self,
        width: usize,
        height: usize,
    ) -> Result<MemorySurface, ProviderError> {
        if width == 0 || height == 0 {
            return Err(ProviderError::SurfaceUnavailable { width, height });
        }
        trace!("allocating {width}x{height} memory surface");
        Ok(MemorySurface {
            width,
            height,
            data: vec![0; width * height * 4],
        })
    }

    fn decode_source(&mut self, identifier: &str) -> Result<DecodedImage, ProviderError> {
        self.sources
            .get(identifier)
            .cloned()
            .ok_or_else(|| ProviderError::DecodeFailed {
                identifier: identifier.to_owned(),
                reason: "no such source".to_owned(),
            })
    }

    fn paint(
        &mut self,
        surface: &mut MemorySurface,
        buffer: &[u8],
        width: usize,
        height: usize,
    ) -> Result<(), ProviderError> {
        if width != surface.width || height != surface.height || buffer.len() != width * height * 4
        {
            return Err(ProviderError::PaintMismatch {
                width,
                height,
                surface_width: surface.width,
                surface_height: surface.height,
            });
        }
        debug!("painting {width}x{height} buffer");
        surface.data.copy_from_slice(buffer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawable_surface_is_blank() {
        let mut provider = MemoryProvider::new();
        let surface = provider.drawable_surface(2, 3).unwrap();
        assert_eq!(surface.width, 2);
        assert_eq!(surface.height, 3);
        assert_eq!(surface.data, vec![0; 24]);
    }

    #[test]
    fn test_drawable_surface_rejects_zero_size() {
        let mut provider = MemoryProvider::new();
        assert!(matches!(
            provider.drawable_surface(0, 3),
            Err(ProviderError::SurfaceUnavailable { .. })
        ));
    }

    #[test]
    fn test_decode_preloaded_source() {
        let mut provider = MemoryProvider::new();
        provider.insert_source("a", vec![1, 2, 3, 4], 1, 1);

        let decoded = provider.decode_source("a").unwrap();
        assert_eq!(decoded.data, vec![1, 2, 3, 4]);
        assert_eq!((decoded.width, decoded.height), (1, 1));
    }

    #[test]
    fn test_decode_unknown_source_fails() {
        let mut provider = MemoryProvider::new();
        assert!(matches!(
            provider.decode_source("nope"),
            Err(ProviderError::DecodeFailed { .. })
        ));
    }

    #[test]
    fn test_paint_copies_buffer() {
        let mut provider = MemoryProvider::new();
        let mut surface = provider.drawable_surface(1, 1).unwrap();
        provider.paint(&mut surface, &[9, 8, 7, 6], 1, 1).unwrap();
        assert_eq!(surface.data, vec![9, 8, 7, 6]);
    }

    #[test]
    fn test_paint_rejects_mismatched_size() {
        let mut provider = MemoryProvider::new();
        let mut surface = provider.drawable_surface(2, 2).unwrap();
        assert!(matches!(
            provider.paint(&mut surface, &[0; 4], 1, 1),
            Err(ProviderError::PaintMismatch { .. })
        ));
    }
}
