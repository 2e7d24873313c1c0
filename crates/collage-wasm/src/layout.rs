//! WASM bindings for grid layout selection and partitioning.
//!
//! Layout descriptors cross the JS boundary as plain objects (the same
//! tagged shape the core serializes, e.g. `{ type: "horizontal", ratioX: 50 }`),
//! so the host can keep them in its own state store and hand them back for
//! partitioning or divider drags.

use collage_core::layout::{partition, CellRect, DividerDrag, LayoutDescriptor, RatioKey};
use wasm_bindgen::prelude::*;

fn parse_layout(layout: JsValue) -> Result<LayoutDescriptor, JsValue> {
    serde_wasm_bindgen::from_value(layout).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_ratio_key(key: &str) -> Result<RatioKey, JsValue> {
    key.parse()
        .map_err(|()| JsValue::from_str(&format!("unknown ratio key: {key}")))
}

/// Get the default layout descriptor for an image count.
///
/// Counts 1 through 8 map to named topologies; anything larger falls back
/// to an auto-sized near-square grid.
#[wasm_bindgen]
pub fn layout_for_count(count: u32) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&LayoutDescriptor::for_count(count))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Number of cells a layout descriptor produces.
#[wasm_bindgen]
pub fn layout_cell_count(layout: JsValue) -> Result<u32, JsValue> {
    Ok(parse_layout(layout)?.cell_count())
}

/// Partition a canvas into cell rectangles for a layout descriptor.
///
/// # Arguments
///
/// * `layout` - Layout descriptor object
/// * `width` / `height` - Canvas size in pixels
/// * `padding` - Outer margin and inter-cell gutter in pixels
///
/// # Returns
///
/// An array of `{ x, y, width, height }` rectangles, one per cell, in
/// logical cell order.
#[wasm_bindgen]
pub fn layout_cells(
    layout: JsValue,
    width: f64,
    height: f64,
    padding: f64,
) -> Result<JsValue, JsValue> {
    let layout = parse_layout(layout)?;
    let cells: Vec<CellRect> = partition(&layout, width, height, padding);
    serde_wasm_bindgen::to_value(&cells).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Set one ratio on a layout descriptor, returning the updated descriptor.
///
/// The value is clamped to [20, 80]. A key the descriptor does not carry
/// leaves it unchanged.
#[wasm_bindgen]
pub fn layout_set_ratio(layout: JsValue, key: &str, value: f64) -> Result<JsValue, JsValue> {
    let layout = parse_layout(layout)?;
    let key = parse_ratio_key(key)?;
    serde_wasm_bindgen::to_value(&layout.with_ratio(key, value))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// A divider drag session for JavaScript.
///
/// Create it at pointer-press; call `ratio_at` on every pointer-move with
/// the cumulative delta since the press (not the per-frame delta). The
/// session never mutates the layout; apply the returned ratio with
/// [`layout_set_ratio`] and re-partition.
#[wasm_bindgen]
pub struct JsDividerDrag {
    inner: DividerDrag,
}

#[wasm_bindgen]
impl JsDividerDrag {
    /// Begin a drag on one of the layout's ratios.
    ///
    /// # Arguments
    ///
    /// * `layout` - The current layout descriptor
    /// * `key` - Which ratio the divider owns ("ratioX", "ratioY", ...)
    /// * `container_extent` - Container pixel extent along the drag axis
    ///   (width for a column divider, height for a row divider)
    ///
    /// Errors if the descriptor does not carry the ratio, so a stale
    /// divider cannot start a session.
    #[wasm_bindgen(constructor)]
    pub fn new(layout: JsValue, key: &str, container_extent: f64) -> Result<JsDividerDrag, JsValue> {
        let layout = parse_layout(layout)?;
        let key = parse_ratio_key(key)?;
        DividerDrag::begin_on(&layout, key, container_extent)
            .map(|inner| JsDividerDrag { inner })
            .ok_or_else(|| JsValue::from_str("layout has no such ratio"))
    }

    /// The clamped ratio for the current pointer delta in pixels.
    pub fn ratio_at(&self, delta_px: f64) -> f64 {
        self.inner.ratio_at(delta_px)
    }

    /// The key this divider owns, in its wire spelling.
    #[wasm_bindgen(getter)]
    pub fn key(&self) -> String {
        match self.inner.key() {
            RatioKey::X => "ratioX",
            RatioKey::Y => "ratioY",
            RatioKey::YLeft => "ratioYLeft",
            RatioKey::Y1 => "ratioY1",
            RatioKey::Y2 => "ratioY2",
        }
        .to_string()
    }
}


#[cfg(test)]
mod tests {
    // The JsValue-based bindings themselves run under `wasm_tests` above;
    // the logic they wrap is covered in collage-core. Only the key spelling
    // is worth pinning here.
    use collage_core::layout::RatioKey;

    #[test]
    fn test_ratio_key_wire_spelling_round_trips() {
        for name in ["ratioX", "ratioY", "ratioYLeft", "ratioY1", "ratioY2"] {
            let key: RatioKey = name.parse().unwrap();
            let spelled = match key {
                RatioKey::X => "ratioX",
                RatioKey::Y => "ratioY",
                RatioKey::YLeft => "ratioYLeft",
                RatioKey::Y1 => "ratioY1",
                RatioKey::Y2 => "ratioY2",
            };
            assert_eq!(spelled, name);
        }
    }
}
