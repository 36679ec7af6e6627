//! Window management module
//!
//! Provides the window registry (lifecycle), the z-order tracker (focus and
//! stacking), the spawn cascade and frame hit testing.

mod cascade;
mod frame;
mod record;
mod region;
mod registry;
mod zorder;

pub use cascade::SpawnCascade;
pub use frame::WindowFrame;
pub use record::{WindowRecord, WindowState};
pub use region::WindowRegion;
pub use registry::WindowRegistry;
pub use zorder::ZOrder;

/// Unique window identifier
pub type WindowId = u64;
