//! Center-crop mapping between a source image and the cell it fills.
//!
//! The source is scaled uniformly to fully cover the cell while preserving
//! its aspect ratio; the overflowing dimension is cropped symmetrically.

/// Uniform scale plus the offset of the scaled image's top-left corner
/// relative to the cell origin (non-positive on the cropped axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterCrop {
    /// Source-to-cell scale factor (cell pixels per source pixel).
    pub scale: f64,
    /// X of the scaled image's left edge in cell-local coordinates.
    pub offset_x: f64,
    /// Y of the scaled image's top edge in cell-local coordinates.
    pub offset_y: f64,
}

impl CenterCrop {
    /// Map a cell-local point to source-image coordinates.
    pub fn source_pos(&self, local_x: f64, local_y: f64) -> (f64, f64) {
        (
            (local_x - self.offset_x) / self.scale,
            (local_y - self.offset_y) / self.scale,
        )
    }
}

/// Compute the center-crop mapping for a source of `src_w` x `src_h` pixels
/// filling a cell of `cell_w` x `cell_h` pixels.
///
/// If the source is proportionally wider than the cell it is scaled to fill
/// the cell's height and cropped left/right; otherwise it fills the width
/// and is cropped top/bottom. A source whose aspect equals the cell's maps
/// with zero offset and scale exactly `cell_w / src_w`.
///
/// All four dimensions must be positive; the renderer rejects degenerate
/// cells before calling this.
pub fn center_crop(src_w: f64, src_h: f64, cell_w: f64, cell_h: f64) -> CenterCrop {
    debug_assert!(src_w > 0.0 && src_h > 0.0 && cell_w > 0.0 && cell_h > 0.0);

    let src_aspect = src_w / src_h;
    let cell_aspect = cell_w / cell_h;

    if src_aspect > cell_aspect {
        // Source is wider: fill the height, crop left/right
        let scale = cell_h / src_h;
        let draw_w = src_w * scale;
        CenterCrop {
            scale,
            offset_x: -(draw_w - cell_w) / 2.0,
            offset_y: 0.0,
        }
    } else {
        // Source is taller (or equal): fill the width, crop top/bottom
        let scale = cell_w / src_w;
        let draw_h = src_h * scale;
        CenterCrop {
            scale,
            offset_x: 0.0,
            offset_y: -(draw_h - cell_h) / 2.0,
        }
    }
}
