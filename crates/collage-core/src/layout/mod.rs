//! Grid layout: topology selection, region partitioning and divider drags.
//!
//! A collage in grid mode is described by a [`LayoutDescriptor`], a named
//! partition scheme chosen from the image count plus the adjustable ratio
//! percentages its dividers control. [`partition`] turns a descriptor and the
//! canvas dimensions into concrete pixel rectangles, one per cell.
//!
//! # Coordinate System
//!
//! - All rectangles are in output-surface pixels, origin at the top-left
//! - Cells are ordered by logical index: left-to-right, top-to-bottom within
//!   each sub-block
//! - Ratios are percentages of the content rectangle, clamped to [20, 80]

mod divider;
mod partition;
mod topology;

pub use divider::DividerDrag;
pub use partition::{partition, CellRect};
pub use topology::{LayoutDescriptor, RatioKey, RATIO_MAX, RATIO_MIN};
