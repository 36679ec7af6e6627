//! Frame and viewport dimensions

use serde::{Deserialize, Serialize};

/// Width and height in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Subtract `margin` from each dimension, clamping at zero
    ///
    /// Used for maximized frames, which fill the viewport minus a fixed margin.
    pub fn shrink(self, margin: Size) -> Self {
        Self {
            width: (self.width - margin.width).max(0.0),
            height: (self.height - margin.height).max(0.0),
        }
    }
}
