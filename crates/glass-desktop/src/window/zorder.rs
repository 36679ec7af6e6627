//! Z-order tracker

use super::WindowId;

/// Front-to-back stacking order
///
/// Stacking is expressed purely as list position: the last id is topmost.
/// Raising a window is an O(n) remove-and-append with no renumbering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZOrder {
    ids: Vec<WindowId>,
}

impl ZOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `id` to the top, inserting it if absent
    pub fn bring_to_front(&mut self, id: WindowId) {
        self.ids.retain(|&wid| wid != id);
        self.ids.push(id);
    }

    /// Topmost id
    #[inline]
    pub fn focused_id(&self) -> Option<WindowId> {
        self.ids.last().copied()
    }

    /// Stack depth of `id` (0 = bottom)
    pub fn rank(&self, id: WindowId) -> Option<usize> {
        self.ids.iter().position(|&wid| wid == id)
    }

    /// Ids bottom to top
    #[inline]
    pub fn ids(&self) -> &[WindowId] {
        &self.ids
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Keep only ids for which `keep` returns true
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(WindowId) -> bool,
    {
        self.ids.retain(|&id| keep(id));
    }
}
