// SPDX-License-Identifier: MPL-2.0
//! Panorama decoding.

use crate::config::MAX_TEXTURE_WIDTH;
use crate::domain::EquirectImage;
use crate::error::FetchError;
use image_rs::imageops::FilterType;

/// Decodes JPEG, PNG or WebP bytes into an equirectangular image.
///
/// Images wider than [`MAX_TEXTURE_WIDTH`] are downscaled, keeping the
/// aspect ratio. This is CPU-bound; async callers run it on a blocking
/// thread.
///
/// # Errors
///
/// Returns [`FetchError::Image`] if the bytes are not a supported image.
pub fn decode_panorama(bytes: &[u8]) -> Result<EquirectImage, FetchError> {
    let mut decoded =
        image_rs::load_from_memory(bytes).map_err(|e| FetchError::Image(e.to_string()))?;

    if decoded.width() > MAX_TEXTURE_WIDTH {
        let scaled_height = (u64::from(decoded.height()) * u64::from(MAX_TEXTURE_WIDTH)
            / u64::from(decoded.width()))
        .max(1) as u32;
        decoded = decoded.resize_exact(MAX_TEXTURE_WIDTH, scaled_height, FilterType::Triangle);
    }

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    EquirectImage::from_rgba(width, height, rgba.into_raw())
        .ok_or_else(|| FetchError::Image(format!("empty image ({width}x{height})")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageBuffer, ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        buffer
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn decodes_png() {
        let image = decode_panorama(&png_bytes(8, 4)).expect("decode");
        assert_eq!((image.width(), image.height()), (8, 4));
        assert_eq!(image.pixel(3, 2), [10, 20, 30, 255]);
    }

    #[test]
    fn garbage_is_an_image_error() {
        let err = decode_panorama(b"<html>not found</html>").unwrap_err();
        assert!(matches!(err, FetchError::Image(_)));
    }

    #[test]
    fn wide_images_are_downscaled() {
        let image = decode_panorama(&png_bytes(MAX_TEXTURE_WIDTH * 2, 8)).expect("decode");
        assert_eq!(image.width(), MAX_TEXTURE_WIDTH);
        assert_eq!(image.height(), 4);
    }
}
