//! Collage WASM - WebAssembly bindings for the collage engine
//!
//! This crate exposes the collage-core functionality to JavaScript/TypeScript
//! applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrappers for image data and the asset store
//! - `layout` - Grid topology selection, partitioning and divider drags
//! - `transform` - The freeform element board and its drag sessions
//! - `render` - Rasterization and PNG export
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, layout_for_count, layout_cells } from '@gridflow/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const layout = layout_for_count(3);
//! const cells = layout_cells(layout, 960, 540, 10);
//! ```

use wasm_bindgen::prelude::*;

mod layout;
mod render;
mod transform;
mod types;

// Re-export public types
pub use layout::{
    layout_cell_count, layout_cells, layout_for_count, layout_set_ratio, JsDividerDrag,
};
pub use render::{encode_png, export_size, render_board, render_grid};
pub use transform::JsElementBoard;
pub use types::{decode_image, JsAssetStore, JsImageAsset};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
