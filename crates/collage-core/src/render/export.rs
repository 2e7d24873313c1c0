//! PNG encoding for export.
//!
//! Exports always render at a fixed width so output quality does not depend
//! on the on-screen preview size; the height follows from the configured
//! aspect ratio.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use super::compose::Surface;
use crate::config::AspectRatio;

/// Export width in pixels. Height is derived from the aspect ratio.
pub const EXPORT_WIDTH: u32 = 2400;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match the surface dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Pixel dimensions of an export surface for the given aspect ratio.
///
/// Width is always [`EXPORT_WIDTH`]; height is rounded to the nearest pixel.
pub fn export_size(aspect: &AspectRatio) -> (u32, u32) {
    let height = (EXPORT_WIDTH as f64 / aspect.ratio()).round() as u32;
    (EXPORT_WIDTH, height)
}

/// Encode a rendered surface to PNG bytes.
///
/// # Returns
///
/// PNG-encoded bytes on success, or an error if the surface is malformed
/// or encoding fails.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, EncodeError> {
    if surface.width == 0 || surface.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: surface.width,
            height: surface.height,
        });
    }

    let expected_len = (surface.width as usize) * (surface.height as usize) * 3;
    if surface.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: surface.pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(
            &surface.pixels,
            surface.width,
            surface.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Color;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_export_size_common_ratios() {
        let sixteen_nine = AspectRatio::new(16.0, 9.0).unwrap();
        assert_eq!(export_size(&sixteen_nine), (2400, 1350));

        let square = AspectRatio::new(1.0, 1.0).unwrap();
        assert_eq!(export_size(&square), (2400, 2400));

        let four_five = AspectRatio::new(4.0, 5.0).unwrap();
        assert_eq!(export_size(&four_five), (2400, 3000));
    }

    #[test]
    fn test_export_size_rounds_height() {
        // 3:2 gives an exact 1600; 16:10 gives 1500; 21:9 rounds 1028.57 to 1029
        let twentyone_nine = AspectRatio::new(21.0, 9.0).unwrap();
        assert_eq!(export_size(&twentyone_nine).1, 1029);
    }

    #[test]
    fn test_encode_png_basic() {
        let surface = Surface::filled(16, 12, Color::new(200, 100, 50));
        let png = encode_png(&surface).unwrap();
        assert_eq!(&png[0..8], &PNG_MAGIC);
        assert!(png.len() > 8);
    }

    #[test]
    fn test_encode_png_round_trips_through_decoder() {
        let surface = Surface::filled(8, 8, Color::new(10, 20, 30));
        let png = encode_png(&surface).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 8);
        assert_eq!(decoded.get_pixel(3, 5).0, [10, 20, 30]);
    }

    #[test]
    fn test_encode_png_rejects_zero_dimensions() {
        let surface = Surface {
            width: 0,
            height: 10,
            pixels: Vec::new(),
        };
        let result = encode_png(&surface);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_png_rejects_short_pixel_data() {
        let surface = Surface {
            width: 10,
            height: 10,
            pixels: vec![0u8; 10],
        };
        let result = encode_png(&surface);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }
}
