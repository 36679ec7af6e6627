//! Core geometry types for the desktop
//!
//! Positions and sizes are in CSS pixels relative to the desktop's top-left
//! corner. There is no camera: the desktop is exactly the viewport.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
pub use vec2::Vec2;
