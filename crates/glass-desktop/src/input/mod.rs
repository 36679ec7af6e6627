//! Input routing module
//!
//! Provides the drag state machine for moving windows by their title bar.

mod drag;
mod result;
mod router;

pub use drag::DragState;
pub use result::InputResult;
pub use router::InputRouter;
