//! Drag state for input operations

use crate::math::Vec2;
use crate::window::WindowId;

/// An in-progress window move
///
/// Dragging is free-form: no momentum, no containment to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    /// Window being moved
    pub window_id: WindowId,
    /// Offset from window origin to cursor
    pub offset: Vec2,
}

impl DragState {
    /// Window position that keeps the grab offset under `pointer`
    #[inline]
    pub fn position_for(&self, pointer: Vec2) -> Vec2 {
        pointer - self.offset
    }
}
