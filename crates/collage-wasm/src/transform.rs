//! WASM bindings for the freeform transform board.
//!
//! The board lives in WASM memory; JavaScript drives it with pointer events.
//! A drag is begun at pointer-press, fed cumulative deltas (or the raw
//! pointer position, for rotation) on every move, and ended at release.
//! Each frame commits geometry computed from the press snapshot, so frames
//! are reproducible and never accumulate error.

use collage_core::layout::CellRect;
use collage_core::transform::{
    ElementBoard, ElementGeometry, ElementId, Handle, LayerShift, MoveSession, ResizeSession,
    RotateSession,
};
use wasm_bindgen::prelude::*;

enum ActiveDrag {
    Move { id: ElementId, session: MoveSession },
    Rotate { id: ElementId, session: RotateSession },
    Resize { id: ElementId, session: ResizeSession },
}

/// The freeform element board for JavaScript.
#[wasm_bindgen]
pub struct JsElementBoard {
    board: ElementBoard,
    drag: Option<ActiveDrag>,
}

#[wasm_bindgen]
impl JsElementBoard {
    /// Build a board from grid cell rectangles, one element per cell.
    ///
    /// # Arguments
    ///
    /// * `cells` - Array of `{ x, y, width, height }` rectangles, typically
    ///   the output of `layout_cells` or live-measured cell geometry
    /// * `corner_radius` - Corner radius every element starts with
    #[wasm_bindgen(constructor)]
    pub fn new(cells: JsValue, corner_radius: f64) -> Result<JsElementBoard, JsValue> {
        let cells: Vec<CellRect> =
            serde_wasm_bindgen::from_value(cells).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_board(ElementBoard::from_cells(
            &cells,
            corner_radius,
        )))
    }

    /// Elements in z-order (first = bottom) as an array of plain objects.
    pub fn elements(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.board.elements())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The selected element's id, if any.
    #[wasm_bindgen(getter)]
    pub fn selected(&self) -> Option<u32> {
        self.board.selected().map(|id| id.0)
    }

    /// Select an element. Unknown ids select nothing.
    pub fn select(&mut self, id: u32) {
        self.board.select(ElementId(id));
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.board.deselect();
    }

    /// Splice an element in the paint order.
    ///
    /// `shift` is one of "up", "down", "top", "bottom".
    pub fn reorder(&mut self, id: u32, shift: &str) -> Result<(), JsValue> {
        let shift: LayerShift = shift
            .parse()
            .map_err(|()| JsValue::from_str(&format!("unknown layer shift: {shift}")))?;
        self.board.reorder(ElementId(id), shift);
        Ok(())
    }

    /// Begin a move drag on an element.
    pub fn begin_move(&mut self, id: u32) -> Result<(), JsValue> {
        let id = ElementId(id);
        let element = self.board.element(id).ok_or_else(unknown_element)?;
        self.drag = Some(ActiveDrag::Move {
            id,
            session: MoveSession::begin(element),
        });
        Ok(())
    }

    /// Begin a rotate drag on an element.
    pub fn begin_rotate(&mut self, id: u32) -> Result<(), JsValue> {
        let id = ElementId(id);
        let element = self.board.element(id).ok_or_else(unknown_element)?;
        self.drag = Some(ActiveDrag::Rotate {
            id,
            session: RotateSession::begin(element),
        });
        Ok(())
    }

    /// Begin a resize drag on an element.
    ///
    /// `handle` is one of "n", "s", "e", "w", "nw", "ne", "sw", "se".
    pub fn begin_resize(&mut self, id: u32, handle: &str) -> Result<(), JsValue> {
        let id = ElementId(id);
        let handle: Handle = handle
            .parse()
            .map_err(|()| JsValue::from_str(&format!("unknown resize handle: {handle}")))?;
        let element = self.board.element(id).ok_or_else(unknown_element)?;
        self.drag = Some(ActiveDrag::Resize {
            id,
            session: ResizeSession::begin(element, handle),
        });
        Ok(())
    }

    /// Commit a move frame. `dx`/`dy` are cumulative since the press.
    pub fn update_move(&mut self, dx: f64, dy: f64) -> Result<(), JsValue> {
        let Some(ActiveDrag::Move { id, session }) = &self.drag else {
            return Err(JsValue::from_str("no move drag in progress"));
        };
        let (id, session) = (*id, *session);
        let (x, y) = session.position_at(dx, dy);
        if let Some(el) = self.board.element(id) {
            let geometry = ElementGeometry {
                x,
                y,
                width: el.width,
                height: el.height,
                rotation: el.rotation,
            };
            self.board.set_geometry(id, geometry);
        }
        Ok(())
    }

    /// Commit a rotate frame. Takes the raw pointer position in canvas
    /// pixels; the element turns to face it.
    pub fn update_rotate(&mut self, pointer_x: f64, pointer_y: f64) -> Result<(), JsValue> {
        let Some(ActiveDrag::Rotate { id, session }) = &self.drag else {
            return Err(JsValue::from_str("no rotate drag in progress"));
        };
        let degrees = session.rotation_at(pointer_x, pointer_y);
        self.board.set_rotation(*id, degrees);
        Ok(())
    }

    /// Commit a resize frame. `dx`/`dy` are cumulative since the press.
    pub fn update_resize(&mut self, dx: f64, dy: f64) -> Result<(), JsValue> {
        let Some(ActiveDrag::Resize { id, session }) = &self.drag else {
            return Err(JsValue::from_str("no resize drag in progress"));
        };
        let geometry = session.geometry_at(dx, dy);
        self.board.set_geometry(*id, geometry);
        Ok(())
    }

    /// End the active drag, if any. The last committed frame stands.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

impl JsElementBoard {
    pub(crate) fn from_board(board: ElementBoard) -> Self {
        Self { board, drag: None }
    }

    pub(crate) fn board(&self) -> &ElementBoard {
        &self.board
    }
}

fn unknown_element() -> JsValue {
    JsValue::from_str("unknown element id")
}


#[cfg(test)]
mod tests {
    use super::*;

    fn test_board() -> JsElementBoard {
        let cells = [
            CellRect::new(0.0, 0.0, 100.0, 100.0),
            CellRect::new(120.0, 0.0, 100.0, 100.0),
        ];
        JsElementBoard::from_board(ElementBoard::from_cells(&cells, 0.0))
    }

    #[test]
    fn test_move_drag_commits_last_frame() {
        let mut board = test_board();
        board.begin_move(0).unwrap();
        board.update_move(30.0, 10.0).unwrap();
        board.update_move(5.0, -5.0).unwrap();
        board.end_drag();

        let el = board.board().element(ElementId(0)).unwrap();
        assert_eq!((el.x, el.y), (5.0, -5.0));
    }

    #[test]
    fn test_rotate_drag_faces_pointer() {
        let mut board = test_board();
        board.begin_rotate(0).unwrap();
        // Element center is (50, 50); pointer to its right
        board.update_rotate(200.0, 50.0).unwrap();
        board.end_drag();

        let el = board.board().element(ElementId(0)).unwrap();
        assert!((el.rotation - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_drag_from_corner() {
        let mut board = test_board();
        board.begin_resize(0, "se").unwrap();
        board.update_resize(40.0, 20.0).unwrap();
        board.end_drag();

        let el = board.board().element(ElementId(0)).unwrap();
        assert!((el.width - 140.0).abs() < 1e-9);
        assert!((el.height - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_selection_round_trip() {
        let mut board = test_board();
        assert_eq!(board.selected(), None);
        board.select(1);
        assert_eq!(board.selected(), Some(1));
        board.deselect();
        assert_eq!(board.selected(), None);
    }
}
