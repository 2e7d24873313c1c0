//! Drag-session value objects for move, rotate and resize.
//!
//! A session is created at pointer-press from the element's state at that
//! moment and holds everything a move frame needs. Frames never read the
//! element's live state, so a session can be replayed or applied out of
//! order without drift; releasing the pointer simply drops the session.

use serde::{Deserialize, Serialize};

use super::board::FreeformElement;
use super::resize::{resize_geometry, Handle};

/// The mutable geometry of one element, as produced by a drag frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, clockwise positive.
    pub rotation: f64,
}

impl From<&FreeformElement> for ElementGeometry {
    fn from(el: &FreeformElement) -> Self {
        Self {
            x: el.x,
            y: el.y,
            width: el.width,
            height: el.height,
            rotation: el.rotation,
        }
    }
}

/// Move drag: translates the start position by the pointer delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveSession {
    start_x: f64,
    start_y: f64,
}

impl MoveSession {
    pub fn begin(element: &FreeformElement) -> Self {
        Self {
            start_x: element.x,
            start_y: element.y,
        }
    }

    /// Top-left position for the current pointer delta.
    pub fn position_at(&self, dx: f64, dy: f64) -> (f64, f64) {
        (self.start_x + dx, self.start_y + dy)
    }
}

/// Rotate drag: the element turns to face the pointer.
///
/// The center is the unrotated bounding-box center at drag-start; the
/// rotate handle sits above the element, hence the +90 degree offset that
/// makes the handle itself track the pointer angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateSession {
    center_x: f64,
    center_y: f64,
}

impl RotateSession {
    pub fn begin(element: &FreeformElement) -> Self {
        let (center_x, center_y) = element.center();
        Self { center_x, center_y }
    }

    /// Rotation in degrees for the pointer at the given canvas position.
    pub fn rotation_at(&self, pointer_x: f64, pointer_y: f64) -> f64 {
        (pointer_y - self.center_y)
            .atan2(pointer_x - self.center_x)
            .to_degrees()
            + 90.0
    }
}

/// Resize drag: anchor-preserving handle drag (math in
/// [`super::resize::resize_geometry`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    handle: Handle,
    start: ElementGeometry,
}

impl ResizeSession {
    pub fn begin(element: &FreeformElement, handle: Handle) -> Self {
        Self {
            handle,
            start: ElementGeometry::from(element),
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Geometry for the current pointer delta.
    pub fn geometry_at(&self, dx: f64, dy: f64) -> ElementGeometry {
        resize_geometry(&self.start, self.handle, dx, dy)
    }
}
