//! WebAssembly exports for rasterview filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. The JS
//! host remains the surface provider: it pulls the flat buffer from a
//! canvas (`getImageData`), calls a filter here, and writes the result
//! back (`putImageData`).
//!
//! All exports take and return row-major RGBA bytes, 4 per pixel,
//! length = `width * height * 4`.

use wasm_bindgen::prelude::*;

use crate::image::RasterImage;

/// Convert an RGBA buffer to grayscale (channel-average method).
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
/// Flat array of RGBA bytes with R = G = B = average
#[wasm_bindgen]
pub fn grayscale_rgba_wasm(data: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut image = RasterImage::from_pixel_buffer(data, width, height).expect("Invalid dimensions");
    image.grayscale().to_pixel_buffer()
}

/// Invert every color channel of an RGBA buffer, alpha preserved.
#[wasm_bindgen]
pub fn invert_rgba_wasm(data: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut image = RasterImage::from_pixel_buffer(data, width, height).expect("Invalid dimensions");
    image.invert().to_pixel_buffer()
}

/// Add `amount` to every color channel, capped at 255. `amount` may be
/// negative; values saturate at 0 on store.
#[wasm_bindgen]
pub fn brighten_rgba_wasm(data: &[u8], width: usize, height: usize, amount: i32) -> Vec<u8> {
    let mut image = RasterImage::from_pixel_buffer(data, width, height).expect("Invalid dimensions");
    image.brighten(amount).to_pixel_buffer()
}

/// Binarize an RGBA buffer: channel average >= `cutoff` goes white,
/// everything else black, alpha preserved.
#[wasm_bindgen]
pub fn threshold_rgba_wasm(data: &[u8], width: usize, height: usize, cutoff: u8) -> Vec<u8> {
    let mut image = RasterImage::from_pixel_buffer(data, width, height).expect("Invalid dimensions");
    image.threshold(cutoff).to_pixel_buffer()
}
