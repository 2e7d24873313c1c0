//! Rasterization: composite placed images onto an output surface.
//!
//! Both layout modes feed the same renderer. Grid cells become rotation-zero
//! [`Placement`]s; freeform elements carry their rotation through. Each
//! placement clips to a rounded rectangle and center-crops its source image
//! to fill the cell.
//!
//! # Algorithm
//!
//! Compositing uses inverse mapping: for each output pixel inside a
//! placement's rotated bounding box, rotate the point back into the cell's
//! local frame, reject it if it falls outside the rounded rectangle, then
//! map it through the center-crop transform and bilinear-sample the source.
//!
//! Degenerate placements (zero or negative extent) and placements without a
//! usable image render as background; one bad asset never aborts a render.

mod compose;
mod crop;
mod export;
mod rounded;

pub use compose::{render, render_elements, render_grid, Placement, RenderWarning, Surface};
pub use crop::{center_crop, CenterCrop};
pub use export::{encode_png, export_size, EncodeError, EXPORT_WIDTH};
pub use rounded::rounded_rect_contains;
