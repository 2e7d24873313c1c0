//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core collage
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use collage_core::asset::{decode_asset, AssetId, AssetStore, ImageAsset};
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy
/// is made to JavaScript memory as a `Uint8Array`. For performance-critical
/// code, keep the image in WASM memory (for example inside a [`JsAssetStore`])
/// and only extract pixels when needed.
///
/// The `free()` method can be called to explicitly release WASM memory, but
/// this is optional as wasm-bindgen's finalizer will handle cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsImageAsset {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImageAsset {
    /// Create a new JsImageAsset from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsImageAsset {
        JsImageAsset {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this if you want to immediately release memory
    /// for a large image.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsImageAsset {
    /// Create a JsImageAsset from a core ImageAsset.
    pub(crate) fn from_asset(asset: ImageAsset) -> Self {
        Self {
            width: asset.width,
            height: asset.height,
            pixels: asset.pixels,
        }
    }

    /// Convert back to a core ImageAsset.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_asset(&self) -> ImageAsset {
        ImageAsset::new(self.width, self.height, self.pixels.clone())
    }
}

/// Decode an image file (JPEG, PNG or WebP) from bytes.
///
/// # Arguments
///
/// * `bytes` - The raw file bytes as a `Uint8Array`
///
/// # Returns
///
/// A `JsImageAsset` containing the decoded RGB pixel data, or an error if
/// the format is unrecognized or the file is corrupted.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsImageAsset, JsValue> {
    decode_asset(bytes)
        .map(JsImageAsset::from_asset)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// A collection of decoded images keyed by slot index.
///
/// The store lives entirely in WASM memory so that repeated renders never
/// copy pixel data across the JS boundary. Slot `i` is the image shown in
/// cell `i` of a grid layout (and in element `i` of a fresh freeform board).
#[wasm_bindgen]
pub struct JsAssetStore {
    pub(crate) inner: AssetStore,
}

impl Default for JsAssetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsAssetStore {
    /// Create an empty store.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsAssetStore {
        JsAssetStore {
            inner: AssetStore::new(),
        }
    }

    /// Insert an already-decoded image into a slot, replacing any previous
    /// image there.
    pub fn insert(&mut self, slot: u32, image: &JsImageAsset) {
        self.inner.insert(AssetId(slot), image.to_asset());
    }

    /// Decode file bytes and insert the result into a slot.
    ///
    /// On decode failure the slot is left unchanged and the error is
    /// returned.
    pub fn insert_encoded(&mut self, slot: u32, bytes: &[u8]) -> Result<(), JsValue> {
        let asset = decode_asset(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.insert(AssetId(slot), asset);
        Ok(())
    }

    /// Remove the image in a slot, if any.
    pub fn remove(&mut self, slot: u32) {
        self.inner.remove(AssetId(slot));
    }

    /// Number of filled slots.
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the store has no images.
    #[wasm_bindgen(getter)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
