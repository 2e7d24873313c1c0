//! Source image assets and the store that resolves them for rendering.
//!
//! Image acquisition (file pickers, clipboard paste) happens outside the
//! core; what arrives here is the encoded bytes of a picture. Decoding is
//! synchronous and single-threaded; the embedding application is expected to
//! run it off the UI thread (e.g. in a Web Worker) and insert the result into
//! an [`AssetStore`] keyed by the cell or element it belongs to.
//!
//! A failed decode simply never reaches the store, so at render time the
//! placement falls back to an empty cell.

use std::collections::HashMap;
use std::io::Cursor;

use image::ImageReader;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while decoding a source image.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The bytes are not a recognized image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The decoded image has zero pixels.
    #[error("Decoded image is empty")]
    EmptyImage,
}

/// Identifier tying an asset to the cell or freeform element that shows it.
///
/// Grid cells use their cell index as the id, so cell `i` looks up
/// `AssetId(i)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub u32);

/// A decoded source image with RGB pixel data.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl ImageAsset {
    /// Create a new ImageAsset with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width * height * 3) as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create an ImageAsset from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Natural aspect ratio (width / height).
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

/// Decode an image from its encoded bytes (PNG, JPEG or WebP).
///
/// The format is guessed from the byte content, not from a file name.
///
/// # Errors
///
/// Returns `AssetError::InvalidFormat` if the format is not recognized,
/// `AssetError::CorruptedFile` if decoding fails partway through, and
/// `AssetError::EmptyImage` for zero-sized pictures.
pub fn decode_asset(bytes: &[u8]) -> Result<ImageAsset, AssetError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| AssetError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(AssetError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| AssetError::CorruptedFile(e.to_string()))?;

    let asset = ImageAsset::from_rgb_image(img.into_rgb8());
    if asset.is_empty() {
        return Err(AssetError::EmptyImage);
    }
    Ok(asset)
}

/// Owned collection of decoded assets, keyed by [`AssetId`].
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    assets: HashMap<AssetId, ImageAsset>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the asset for an id.
    pub fn insert(&mut self, id: AssetId, asset: ImageAsset) {
        self.assets.insert(id, asset);
    }

    /// Remove the asset for an id, if present.
    pub fn remove(&mut self, id: AssetId) -> Option<ImageAsset> {
        self.assets.remove(&id)
    }

    /// Look up the asset for an id.
    pub fn get(&self, id: AssetId) -> Option<&ImageAsset> {
        self.assets.get(&id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
