//! File-based driver: decode an image from disk, apply a filter chain,
//! render to an output file.
//!
//! This is the composition step the library core stays out of — the same
//! role the page-ready handler played in a browser deployment.
//!
//! ```text
//! rasterview <input> <output> [grayscale|invert|brighten=N|threshold=N]...
//! ```

use anyhow::{bail, Context, Result};
use log::info;

use rasterview::{DecodedImage, ImageView, ProviderError, RasterImage, SurfaceProvider};

/// Surface provider backed by the `image` crate: sources are files on
/// disk, surfaces are `RgbaImage` buffers.
struct FileProvider;

impl SurfaceProvider for FileProvider {
    type Surface = image::RgbaImage;

    fn drawable_surface(
        &mut self,
        width: usize,
        height: usize,
    ) -> Result<image::RgbaImage, ProviderError> {
        if width == 0 || height == 0 {
            return Err(ProviderError::SurfaceUnavailable { width, height });
        }
        Ok(image::RgbaImage::new(width as u32, height as u32))
    }

    fn decode_source(&mut self, identifier: &str) -> Result<DecodedImage, ProviderError> {
        let decoded = image::open(identifier).map_err(|e| ProviderError::DecodeFailed {
            identifier: identifier.to_owned(),
            reason: e.to_string(),
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = (rgba.width() as usize, rgba.height() as usize);
        Ok(DecodedImage {
            data: rgba.into_raw(),
            width,
            height,
        })
    }

    fn paint(
        &mut self,
        surface: &mut image::RgbaImage,
        buffer: &[u8],
        width: usize,
        height: usize,
    ) -> Result<(), ProviderError> {
        let (sw, sh) = (surface.width() as usize, surface.height() as usize);
        if width != sw || height != sh || buffer.len() != width * height * 4 {
            return Err(ProviderError::PaintMismatch {
                width,
                height,
                surface_width: sw,
                surface_height: sh,
            });
        }
        surface.copy_from_slice(buffer);
        Ok(())
    }
}

/// Apply one textual filter spec to the view.
fn apply_filter(view: &mut ImageView, spec: &str) -> Result<()> {
    match spec.split_once('=') {
        None => match spec {
            "grayscale" => {
                view.grayscale();
            }
            "invert" => {
                view.invert();
            }
            other => bail!("unknown filter {other:?}"),
        },
        Some((name, arg)) => match name {
            "brighten" => {
                let amount: i32 = arg.parse().with_context(|| format!("bad amount {arg:?}"))?;
                view.brighten(amount);
            }
            "threshold" => {
                let cutoff: u8 = arg.parse().with_context(|| format!("bad cutoff {arg:?}"))?;
                view.threshold(cutoff);
            }
            other => bail!("unknown filter {other:?}"),
        },
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, output, filters @ ..] = args.as_slice() else {
        bail!("usage: rasterview <input> <output> [grayscale|invert|brighten=N|threshold=N]...");
    };

    let mut provider = FileProvider;
    let image = RasterImage::from_source(&mut provider, input)?;
    info!("loaded {input} ({}x{})", image.width(), image.height());

    let mut view = ImageView::new(image);
    for spec in filters {
        apply_filter(&mut view, spec)?;
    }

    let surface = view.render(&mut provider)?;
    surface
        .save(output)
        .with_context(|| format!("failed to save {output}"))?;
    info!("wrote {output}");
    Ok(())
}
