//! The element board: an ordered arena of freeform elements plus selection.

use serde::{Deserialize, Serialize};

use super::{ElementGeometry, MIN_SIZE};
use crate::asset::AssetId;
use crate::layout::CellRect;

/// Identifier of a freeform element, stable for the board's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u32);

/// A user-positioned rectangle, decoupled from the grid topology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeformElement {
    pub id: ElementId,
    /// Left edge of the unrotated bounding box.
    pub x: f64,
    /// Top edge of the unrotated bounding box.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, clockwise positive.
    pub rotation: f64,
    /// The image shown in this element, if one was assigned.
    pub source: Option<AssetId>,
    pub corner_radius: f64,
}

impl FreeformElement {
    /// Center of the unrotated bounding box.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Layer reorder actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerShift {
    /// One step later in paint order (towards the front).
    Up,
    /// One step earlier in paint order (towards the back).
    Down,
    /// To the end of the sequence (front-most).
    Top,
    /// To the start of the sequence (back-most).
    Bottom,
}

impl std::str::FromStr for LayerShift {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(LayerShift::Up),
            "down" => Ok(LayerShift::Down),
            "top" => Ok(LayerShift::Top),
            "bottom" => Ok(LayerShift::Bottom),
            _ => Err(()),
        }
    }
}

/// Ordered sequence of elements (index order = z-order, first is bottom)
/// plus the current selection.
///
/// Every operation is a single atomic update and tolerates stale ids with a
/// no-op: a drag session may in principle race a layer command that removed
/// its element, and a crash on a stale id would be worse than ignoring it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementBoard {
    elements: Vec<FreeformElement>,
    selected: Option<ElementId>,
}

impl ElementBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the board from grid cell rectangles, one element per cell.
    ///
    /// Cell index `i` becomes element `i` showing asset `i`, so images stay
    /// attached to the cells they occupied in grid mode. The rectangles may
    /// come from [`crate::layout::partition`] or from live-measured on-screen
    /// cell geometry; both have the same shape.
    pub fn from_cells(cells: &[CellRect], corner_radius: f64) -> Self {
        let elements = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| FreeformElement {
                id: ElementId(i as u32),
                x: cell.x,
                y: cell.y,
                width: cell.width,
                height: cell.height,
                rotation: 0.0,
                source: Some(AssetId(i as u32)),
                corner_radius,
            })
            .collect();
        Self {
            elements,
            selected: None,
        }
    }

    /// Elements in z-order (first = bottom).
    pub fn elements(&self) -> &[FreeformElement] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&FreeformElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|el| el.id == id)
    }

    /// Select an element. Unknown ids clear nothing and select nothing.
    pub fn select(&mut self, id: ElementId) {
        if self.index_of(id).is_some() {
            self.selected = Some(id);
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Translate an element by a delta. No-op on an unknown id.
    pub fn translate(&mut self, id: ElementId, dx: f64, dy: f64) {
        if let Some(i) = self.index_of(id) {
            self.elements[i].x += dx;
            self.elements[i].y += dy;
        }
    }

    /// Set an element's rotation in degrees. No-op on an unknown id.
    pub fn set_rotation(&mut self, id: ElementId, degrees: f64) {
        if let Some(i) = self.index_of(id) {
            self.elements[i].rotation = degrees;
        }
    }

    /// Commit a drag frame's geometry. Width and height are floored at
    /// [`MIN_SIZE`]. No-op on an unknown id.
    pub fn set_geometry(&mut self, id: ElementId, geometry: ElementGeometry) {
        if let Some(i) = self.index_of(id) {
            let el = &mut self.elements[i];
            el.x = geometry.x;
            el.y = geometry.y;
            el.width = geometry.width.max(MIN_SIZE);
            el.height = geometry.height.max(MIN_SIZE);
            el.rotation = geometry.rotation;
        }
    }

    /// Splice an element to a new position in the paint order.
    /// No-op on an unknown id.
    pub fn reorder(&mut self, id: ElementId, shift: LayerShift) {
        let Some(i) = self.index_of(id) else {
            return;
        };
        let last = self.elements.len() - 1;
        let target = match shift {
            LayerShift::Up => (i + 1).min(last),
            LayerShift::Down => i.saturating_sub(1),
            LayerShift::Top => last,
            LayerShift::Bottom => 0,
        };
        if target != i {
            let el = self.elements.remove(i);
            self.elements.insert(target, el);
        }
    }
}
