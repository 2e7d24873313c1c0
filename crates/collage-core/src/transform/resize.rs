//! Anchor-preserving, rotation-aware resize math.
//!
//! Each resize handle defines two points in the element's own unrotated
//! frame: the drag point (the handle itself) and the anchor point (the
//! opposite corner or edge midpoint). Both are rotated into canvas space
//! with the element's rotation at drag-start. The anchor's canvas position
//! stays fixed for the whole drag; the drag point follows the pointer. The
//! new box is derived from their midpoint, so resizing from any handle keeps
//! the opposite reference point visually stationary at any rotation.
//!
//! Edge handles control a single local axis: the moving point is projected
//! onto that axis (through the anchor) so an edge drag can never shear the
//! element, and the perpendicular extent is left unchanged.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::session::ElementGeometry;
use super::MIN_SIZE;

/// A resize handle position on the selection outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    N,
    S,
    E,
    W,
    Nw,
    Ne,
    Sw,
    Se,
}

impl Handle {
    /// All handles, for tests and for building the selection UI.
    pub const ALL: [Handle; 8] = [
        Handle::N,
        Handle::S,
        Handle::E,
        Handle::W,
        Handle::Nw,
        Handle::Ne,
        Handle::Sw,
        Handle::Se,
    ];

    /// The handle's own position in the element's unrotated frame, relative
    /// to the center, for half-extents `hw`/`hh`.
    pub fn local_drag(&self, hw: f64, hh: f64) -> (f64, f64) {
        match self {
            Handle::Nw => (-hw, -hh),
            Handle::N => (0.0, -hh),
            Handle::Ne => (hw, -hh),
            Handle::E => (hw, 0.0),
            Handle::Se => (hw, hh),
            Handle::S => (0.0, hh),
            Handle::Sw => (-hw, hh),
            Handle::W => (-hw, 0.0),
        }
    }

    /// The fixed anchor: the point diagonally or edge-wise opposite the
    /// handle, in the element's unrotated frame.
    pub fn local_anchor(&self, hw: f64, hh: f64) -> (f64, f64) {
        let (dx, dy) = self.local_drag(hw, hh);
        (-dx, -dy)
    }

    /// North/south handles freeze the local X coordinate and only move along
    /// the local Y axis.
    pub fn freezes_local_x(&self) -> bool {
        matches!(self, Handle::N | Handle::S)
    }

    /// East/west handles freeze the local Y coordinate and only move along
    /// the local X axis.
    pub fn freezes_local_y(&self) -> bool {
        matches!(self, Handle::E | Handle::W)
    }

    /// True for the four edge-midpoint handles.
    pub fn is_edge(&self) -> bool {
        self.freezes_local_x() || self.freezes_local_y()
    }
}

impl FromStr for Handle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(Handle::N),
            "s" => Ok(Handle::S),
            "e" => Ok(Handle::E),
            "w" => Ok(Handle::W),
            "nw" => Ok(Handle::Nw),
            "ne" => Ok(Handle::Ne),
            "sw" => Ok(Handle::Sw),
            "se" => Ok(Handle::Se),
            _ => Err(()),
        }
    }
}

/// Compute the geometry for a resize-drag frame.
///
/// # Arguments
///
/// * `start` - The element's geometry at drag-start (the press snapshot)
/// * `handle` - Which handle is being dragged
/// * `dx` / `dy` - Pointer delta since the press, in canvas pixels
///
/// # Returns
///
/// The new unrotated bounding box. Rotation is carried through unchanged;
/// half-extents are floored at `MIN_SIZE / 2` per axis; for edge handles the
/// perpendicular extent keeps its starting value.
pub fn resize_geometry(start: &ElementGeometry, handle: Handle, dx: f64, dy: f64) -> ElementGeometry {
    let hw = start.width / 2.0;
    let hh = start.height / 2.0;
    let cx = start.x + hw;
    let cy = start.y + hh;

    let theta = start.rotation.to_radians();
    let (sin, cos) = theta.sin_cos();

    // Local axis directions in canvas space (y-down screen coordinates):
    // local X -> (cos, sin), local Y -> (-sin, cos).
    let to_canvas = |lx: f64, ly: f64| (cx + lx * cos - ly * sin, cy + lx * sin + ly * cos);

    let (anchor_x, anchor_y) = {
        let (ax, ay) = handle.local_anchor(hw, hh);
        to_canvas(ax, ay)
    };

    let (mut drag_x, mut drag_y) = {
        let (px, py) = handle.local_drag(hw, hh);
        let (x, y) = to_canvas(px, py);
        (x + dx, y + dy)
    };

    if handle.freezes_local_x() {
        // Project the moving point onto the local Y axis through the anchor.
        let proj = (drag_x - anchor_x) * -sin + (drag_y - anchor_y) * cos;
        drag_x = anchor_x + proj * -sin;
        drag_y = anchor_y + proj * cos;
    } else if handle.freezes_local_y() {
        // Project onto the local X axis through the anchor.
        let proj = (drag_x - anchor_x) * cos + (drag_y - anchor_y) * sin;
        drag_x = anchor_x + proj * cos;
        drag_y = anchor_y + proj * sin;
    }

    let new_cx = (anchor_x + drag_x) / 2.0;
    let new_cy = (anchor_y + drag_y) / 2.0;

    // Drag point relative to the new center, back in the local frame.
    let vec_x = drag_x - new_cx;
    let vec_y = drag_y - new_cy;
    let local_x = vec_x * cos + vec_y * sin;
    let local_y = -vec_x * sin + vec_y * cos;

    let min_half = MIN_SIZE / 2.0;
    let new_hw = local_x.abs().max(min_half);
    let new_hh = local_y.abs().max(min_half);

    // Edge handles keep the perpendicular dimension as it was.
    let final_hw = if handle.freezes_local_x() { hw } else { new_hw };
    let final_hh = if handle.freezes_local_y() { hh } else { new_hh };

    ElementGeometry {
        x: new_cx - final_hw,
        y: new_cy - final_hh,
        width: final_hw * 2.0,
        height: final_hh * 2.0,
        rotation: start.rotation,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn geometry_strategy() -> impl Strategy<Value = ElementGeometry> {
        (
            -500.0f64..=500.0,
            -500.0f64..=500.0,
            MIN_SIZE..=600.0,
            MIN_SIZE..=600.0,
            -360.0f64..=360.0,
        )
            .prop_map(|(x, y, width, height, rotation)| ElementGeometry {
                x,
                y,
                width,
                height,
                rotation,
            })
    }

    fn handle_strategy() -> impl Strategy<Value = Handle> {
        prop::sample::select(Handle::ALL.to_vec())
    }

    fn anchor_canvas(geom: &ElementGeometry, handle: Handle) -> (f64, f64) {
        let hw = geom.width / 2.0;
        let hh = geom.height / 2.0;
        let cx = geom.x + hw;
        let cy = geom.y + hh;
        let (sin, cos) = geom.rotation.to_radians().sin_cos();
        let (ax, ay) = handle.local_anchor(hw, hh);
        (cx + ax * cos - ay * sin, cy + ax * sin + ay * cos)
    }

    proptest! {
        /// Property: the size floor holds for arbitrary deltas.
        #[test]
        fn prop_min_size_floor(
            start in geometry_strategy(),
            handle in handle_strategy(),
            dx in -5000.0f64..=5000.0,
            dy in -5000.0f64..=5000.0,
        ) {
            let result = resize_geometry(&start, handle, dx, dy);
            prop_assert!(result.width >= MIN_SIZE - 1e-9);
            prop_assert!(result.height >= MIN_SIZE - 1e-9);
        }

        /// Property: the anchor's canvas position survives the drag.
        ///
        /// Deltas are kept smaller than the element so the pointer cannot be
        /// dragged past the anchor (where the box flips across it and the
        /// roles of anchor and drag point swap, by design) and the size
        /// floor cannot kick in (where the floor sacrifices the anchor to
        /// keep the box visible).
        #[test]
        fn prop_anchor_preserved(
            (x, y, width, height, rotation) in (
                -500.0f64..=500.0,
                -500.0f64..=500.0,
                60.0f64..=600.0,
                60.0f64..=600.0,
                -360.0f64..=360.0,
            ),
            handle in handle_strategy(),
            dx in -15.0f64..=15.0,
            dy in -15.0f64..=15.0,
        ) {
            let start = ElementGeometry { x, y, width, height, rotation };
            let result = resize_geometry(&start, handle, dx, dy);

            let before = anchor_canvas(&start, handle);
            let after = anchor_canvas(&result, handle);
            prop_assert!((before.0 - after.0).abs() < 1e-6);
            prop_assert!((before.1 - after.1).abs() < 1e-6);
        }

        /// Property: edge handles never change rotation or the frozen
        /// perpendicular extent.
        #[test]
        fn prop_edge_handles_freeze_perpendicular(
            start in geometry_strategy(),
            dx in -300.0f64..=300.0,
            dy in -300.0f64..=300.0,
        ) {
            for handle in [Handle::N, Handle::S] {
                let result = resize_geometry(&start, handle, dx, dy);
                prop_assert_eq!(result.rotation, start.rotation);
                prop_assert!((result.width - start.width).abs() < 1e-9);
            }
            for handle in [Handle::E, Handle::W] {
                let result = resize_geometry(&start, handle, dx, dy);
                prop_assert_eq!(result.rotation, start.rotation);
                prop_assert!((result.height - start.height).abs() < 1e-9);
            }
        }

        /// Property: frames are pure functions of the snapshot, so replaying
        /// the same delta gives the same frame.
        #[test]
        fn prop_frames_replayable(
            start in geometry_strategy(),
            handle in handle_strategy(),
            dx in -300.0f64..=300.0,
            dy in -300.0f64..=300.0,
        ) {
            let a = resize_geometry(&start, handle, dx, dy);
            let _ = resize_geometry(&start, handle, dx * 3.0, dy * -2.0);
            let b = resize_geometry(&start, handle, dx, dy);
            prop_assert_eq!(a, b);
        }
    }
}
