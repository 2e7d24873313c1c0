//! WASM bindings for rasterization and PNG export.
//!
//! Rendering is split in two so previews and exports share one path: a
//! render call composites to an in-memory surface, and `encode_png` turns a
//! surface into file bytes. Per-image problems (a slot that never decoded)
//! are reported to the browser console and as a returned warning array; they
//! never fail the render.

use collage_core::asset::AssetId;
use collage_core::config::{AspectRatio, Color};
use collage_core::layout::{partition, CellRect, LayoutDescriptor};
use collage_core::render::{
    self, encode_png as core_encode_png, export_size as core_export_size, RenderWarning, Surface,
};
use wasm_bindgen::prelude::*;

use crate::transform::JsElementBoard;
use crate::types::{JsAssetStore, JsImageAsset};

fn parse_color(background: &str) -> Result<Color, JsValue> {
    background
        .parse()
        .map_err(|e: collage_core::config::ConfigError| JsValue::from_str(&e.to_string()))
}

fn report_warnings(warnings: &[RenderWarning]) -> js_sys::Array {
    let out = js_sys::Array::new();
    for warning in warnings {
        let message = JsValue::from_str(&warning.to_string());
        web_sys::console::warn_1(&message);
        out.push(&message);
    }
    out
}

fn surface_to_asset(surface: Surface) -> JsImageAsset {
    JsImageAsset::new(surface.width, surface.height, surface.pixels)
}

/// Pixel dimensions of an export surface, `[width, height]`.
///
/// Width is fixed at 2400; height follows from the aspect ratio.
///
/// # Arguments
///
/// * `aspect` - Aspect ratio as "W:H", e.g. "16:9"
#[wasm_bindgen]
pub fn export_size(aspect: &str) -> Result<Vec<u32>, JsValue> {
    let aspect: AspectRatio = aspect
        .parse()
        .map_err(|e: collage_core::config::ConfigError| JsValue::from_str(&e.to_string()))?;
    let (width, height) = core_export_size(&aspect);
    Ok(vec![width, height])
}

/// Render a grid layout to a surface. Cell `i` shows the image in slot `i`.
///
/// # Arguments
///
/// * `layout` - Layout descriptor object
/// * `width` / `height` - Surface size in pixels
/// * `padding` - Outer margin and inter-cell gutter in pixels
/// * `corner_radius` - Cell corner radius in pixels
/// * `background` - Background color as "#rgb" or "#rrggbb"
/// * `assets` - Decoded images by slot
///
/// # Returns
///
/// The rendered surface. Slots the user never filled render as plain
/// background; they are not an error and produce no warning.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn render_grid(
    layout: JsValue,
    width: u32,
    height: u32,
    padding: f64,
    corner_radius: f64,
    background: &str,
    assets: &JsAssetStore,
) -> Result<JsImageAsset, JsValue> {
    let layout: LayoutDescriptor =
        serde_wasm_bindgen::from_value(layout).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let background = parse_color(background)?;

    let cells: Vec<CellRect> = partition(&layout, width as f64, height as f64, padding);
    // A slot is assigned exactly when the store holds a decoded image for it
    let sources: Vec<Option<AssetId>> = (0..cells.len() as u32)
        .map(|i| assets.inner.get(AssetId(i)).map(|_| AssetId(i)))
        .collect();
    let (surface, warnings) = render::render_grid(
        width,
        height,
        background,
        &cells,
        corner_radius,
        &sources,
        &assets.inner,
    );
    report_warnings(&warnings);
    Ok(surface_to_asset(surface))
}

/// Render a freeform board to a surface, respecting its z-order.
#[wasm_bindgen]
pub fn render_board(
    board: &JsElementBoard,
    width: u32,
    height: u32,
    background: &str,
    assets: &JsAssetStore,
) -> Result<JsImageAsset, JsValue> {
    let background = parse_color(background)?;
    let (surface, warnings) =
        render::render_elements(width, height, background, board.board(), &assets.inner);
    report_warnings(&warnings);
    Ok(surface_to_asset(surface))
}

/// Encode a rendered surface to PNG bytes.
///
/// # Example
///
/// ```typescript
/// const [w, h] = export_size("16:9");
/// const surface = render_grid(layout, w, h, padding, radius, "#fff", store);
/// const png = encode_png(surface);
/// const blob = new Blob([png], { type: "image/png" });
/// ```
#[wasm_bindgen]
pub fn encode_png(image: &JsImageAsset) -> Result<Vec<u8>, JsValue> {
    let asset = image.to_asset();
    let surface = Surface {
        width: asset.width,
        height: asset.height,
        pixels: asset.pixels,
    };
    core_encode_png(&surface).map_err(|e| JsValue::from_str(&e.to_string()))
}
