//! Freeform transform engine: movable, resizable, rotatable elements.
//!
//! Entering freeform mode converts the current grid cells into a flat list
//! of [`FreeformElement`]s owned by an [`ElementBoard`]; returning to grid
//! mode discards the board (ratios are never merged back).
//!
//! # Drag Model
//!
//! Pointer drags are modal sessions: press captures a snapshot, every move
//! frame is a pure O(1) function of (snapshot, current pointer), release
//! drops the session. Sessions compute geometry; the board commits it. This
//! keeps intermediate frames reproducible and free of accumulation error.
//!
//! # Coordinate System
//!
//! - Element x/y/width/height describe the unrotated bounding box, top-left
//!   origin, in canvas pixels
//! - Rotation is in degrees, clockwise positive (screen coordinates)

mod board;
mod resize;
mod session;

pub use board::{ElementBoard, ElementId, FreeformElement, LayerShift};
pub use resize::{resize_geometry, Handle};
pub use session::{ElementGeometry, MoveSession, ResizeSession, RotateSession};

/// Minimum element width/height after any transform, in pixels.
pub const MIN_SIZE: f64 = 20.0;
