//! The compositing loop: placements onto a raster surface.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::crop::center_crop;
use super::rounded::rounded_rect_contains;
use crate::asset::{AssetId, AssetStore, ImageAsset};
use crate::config::Color;
use crate::layout::CellRect;
use crate::transform::{ElementBoard, FreeformElement};

/// Non-fatal problems collected during a render.
///
/// One bad asset never aborts the whole render; the affected placement
/// falls back to background and the warning tells the caller which one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderWarning {
    /// A placement referenced an asset the store has no decoded image for
    /// (typically a failed decode).
    #[error("no decoded image for asset slot {slot:?}")]
    MissingAsset { slot: AssetId },
}

/// One image placed on the output surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Left edge of the unrotated bounding box.
    pub x: f64,
    /// Top edge of the unrotated bounding box.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, clockwise positive. Grid cells always place at zero.
    pub rotation: f64,
    pub corner_radius: f64,
    pub source: Option<AssetId>,
}

impl Placement {
    /// Placement for a grid cell (never rotated).
    pub fn from_cell(cell: &CellRect, corner_radius: f64, source: Option<AssetId>) -> Self {
        Self {
            x: cell.x,
            y: cell.y,
            width: cell.width,
            height: cell.height,
            rotation: 0.0,
            corner_radius,
            source,
        }
    }

    /// Placement for a freeform element.
    pub fn from_element(element: &FreeformElement) -> Self {
        Self {
            x: element.x,
            y: element.y,
            width: element.width,
            height: element.height,
            rotation: element.rotation,
            corner_radius: element.corner_radius,
            source: element.source,
        }
    }

    fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An owned raster surface with RGB pixel data.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl Surface {
    /// Create a surface filled with a flat color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        // usize arithmetic: tall exports can overflow a u32 byte count
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * 3);
        let [r, g, b] = color.channels();
        for _ in 0..count {
            pixels.push(r);
            pixels.push(g);
            pixels.push(b);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Read a pixel. Out-of-bounds coordinates are the caller's bug.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        self.pixels[idx] = rgb[0];
        self.pixels[idx + 1] = rgb[1];
        self.pixels[idx + 2] = rgb[2];
    }

    /// Convert to an image::RgbImage for encoding.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }
}

/// Composite placements onto a fresh surface.
///
/// # Arguments
///
/// * `width` / `height` - Output surface size in pixels
/// * `background` - Flat background fill
/// * `placements` - Slice order is paint order (first = bottom)
/// * `assets` - Resolves each placement's source id to decoded pixels
///
/// # Returns
///
/// The finished surface plus any per-placement warnings. Degenerate
/// placements and placements with no source render as background silently;
/// only a source that fails to resolve produces a warning.
pub fn render(
    width: u32,
    height: u32,
    background: Color,
    placements: &[Placement],
    assets: &AssetStore,
) -> (Surface, Vec<RenderWarning>) {
    let mut surface = Surface::filled(width, height, background);
    let mut warnings = Vec::new();

    for placement in placements {
        if placement.is_degenerate() {
            continue;
        }
        let Some(slot) = placement.source else {
            continue;
        };
        let Some(asset) = assets.get(slot) else {
            warnings.push(RenderWarning::MissingAsset { slot });
            continue;
        };
        if asset.is_empty() {
            warnings.push(RenderWarning::MissingAsset { slot });
            continue;
        }

        draw_placement(&mut surface, placement, asset);
    }

    (surface, warnings)
}

/// Composite a grid layout. Cell `i` shows the image assigned to it in
/// `sources`; cells with no assignment (a `None`, or cells past the end of
/// the slice) render as background, silently.
pub fn render_grid(
    width: u32,
    height: u32,
    background: Color,
    cells: &[CellRect],
    corner_radius: f64,
    sources: &[Option<AssetId>],
    assets: &AssetStore,
) -> (Surface, Vec<RenderWarning>) {
    let placements: Vec<Placement> = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let source = sources.get(i).copied().flatten();
            Placement::from_cell(cell, corner_radius, source)
        })
        .collect();
    render(width, height, background, &placements, assets)
}

/// Composite a freeform board in its z-order.
pub fn render_elements(
    width: u32,
    height: u32,
    background: Color,
    board: &ElementBoard,
    assets: &AssetStore,
) -> (Surface, Vec<RenderWarning>) {
    let placements: Vec<Placement> = board.elements().iter().map(Placement::from_element).collect();
    render(width, height, background, &placements, assets)
}

/// Draw one placement by inverse-mapping output pixels into the source.
fn draw_placement(surface: &mut Surface, placement: &Placement, asset: &ImageAsset) {
    let hw = placement.width / 2.0;
    let hh = placement.height / 2.0;
    let cx = placement.x + hw;
    let cy = placement.y + hh;

    let (sin, cos) = placement.rotation.to_radians().sin_cos();

    let crop = center_crop(
        asset.width as f64,
        asset.height as f64,
        placement.width,
        placement.height,
    );

    // Canvas bounding box of the rotated rect, clamped to the surface.
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (lx, ly) in [(-hw, -hh), (hw, -hh), (-hw, hh), (hw, hh)] {
        let px = cx + lx * cos - ly * sin;
        let py = cy + lx * sin + ly * cos;
        min_x = min_x.min(px);
        min_y = min_y.min(py);
        max_x = max_x.max(px);
        max_y = max_y.max(py);
    }
    let x0 = min_x.floor().max(0.0) as u32;
    let y0 = min_y.floor().max(0.0) as u32;
    let x1 = (max_x.ceil().max(0.0) as u32).min(surface.width);
    let y1 = (max_y.ceil().max(0.0) as u32).min(surface.height);

    for py in y0..y1 {
        for px in x0..x1 {
            // Sample at the pixel center, rotated back into the cell frame
            let dx = px as f64 + 0.5 - cx;
            let dy = py as f64 + 0.5 - cy;
            let local_x = dx * cos + dy * sin + hw;
            let local_y = -dx * sin + dy * cos + hh;

            if !rounded_rect_contains(
                placement.width,
                placement.height,
                placement.corner_radius,
                local_x,
                local_y,
            ) {
                continue;
            }

            let (sx, sy) = crop.source_pos(local_x, local_y);
            surface.set_pixel(px, py, sample_bilinear(asset, sx, sy));
        }
    }
}

/// Sample a source pixel with bilinear interpolation, clamping at the
/// image edges (coverage testing already happened in cell space).
fn sample_bilinear(asset: &ImageAsset, x: f64, y: f64) -> [u8; 3] {
    let max_x = (asset.width - 1) as f64;
    let max_y = (asset.height - 1) as f64;
    let x = x.clamp(0.0, max_x);
    let y = y.clamp(0.0, max_y);

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(asset.width - 1);
    let y1 = (y0 + 1).min(asset.height - 1);

    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let pixel = |px: u32, py: u32| -> [f64; 3] {
        let idx = (py as usize * asset.width as usize + px as usize) * 3;
        [
            asset.pixels[idx] as f64,
            asset.pixels[idx + 1] as f64,
            asset.pixels[idx + 2] as f64,
        ]
    };

    let p00 = pixel(x0, y0);
    let p10 = pixel(x1, y0);
    let p01 = pixel(x0, y1);
    let p11 = pixel(x1, y1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }
    result
}
