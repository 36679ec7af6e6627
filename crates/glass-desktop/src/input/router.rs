//! Pointer routing between presses

use crate::math::Vec2;
use crate::window::WindowId;
use super::DragState;

/// Remembers what the pointer is doing between down, move and up
///
/// The only gesture that spans events is a title bar drag.
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    drag: Option<DragState>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Begin moving `window_id`, holding it at `offset` from its top-left corner
    pub fn start_window_move(&mut self, window_id: WindowId, offset: Vec2) {
        log::trace!("drag start: window {} grabbed at {:?}", window_id, offset);
        self.drag = Some(DragState { window_id, offset });
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Forget the drag when its window goes away (closed or minimized)
    pub fn cancel_for(&mut self, window_id: WindowId) {
        if self.drag.is_some_and(|d| d.window_id == window_id) {
            self.drag = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_lifecycle() {
        let mut router = InputRouter::new();
        assert!(router.drag_state().is_none());

        router.start_window_move(7, Vec2::new(12.0, 8.0));
        let drag = router.drag_state().copied();
        assert_eq!(drag.map(|d| d.window_id), Some(7));
        assert_eq!(drag.map(|d| d.offset), Some(Vec2::new(12.0, 8.0)));

        router.end_drag();
        assert!(!router.is_dragging());
    }

    #[test]
    fn test_cancel_only_matching_window() {
        let mut router = InputRouter::new();
        router.start_window_move(1, Vec2::ZERO);

        router.cancel_for(2);
        assert!(router.is_dragging());

        router.cancel_for(1);
        assert!(!router.is_dragging());
    }
}
