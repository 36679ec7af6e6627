//! GlassOS Desktop
//!
//! This crate provides the window management core of the GlassOS web
//! desktop:
//! - Window registry (launch, close, minimize, maximize, move)
//! - Z-order and focus
//! - Frame geometry and hit testing
//! - Drag input routing
//! - The desktop shell tying windows, apps, taskbar and appearance together
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Rect`, `Size`) and frame style
//! - [`window`]: Records, registry, z-order, spawn cascade, hit testing
//! - [`input`]: Drag state machine and input results
//! - [`shell`]: [`DesktopShell`], the composition root
//! - [`view`]: Serializable frame snapshot for the host
//!
//! ## Example
//!
//! ```rust
//! use glass_desktop::{AppKind, DesktopShell};
//!
//! let mut shell = DesktopShell::new();
//! let id = shell.launch(AppKind::Calculator);
//! shell.focus_window(id);
//!
//! let frame = shell.frame();
//! assert_eq!(frame.windows.len(), 1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Single Owner**: The shell owns every piece of session state; no globals
//! 3. **Tombstones**: Closed windows stay in the registry until `compact`

pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod math;
pub mod shell;
pub mod view;
pub mod window;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod logging;
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use clock::{FixedTime, TimeOfDay, TimeSource, TrayClock};
pub use config::{CascadeConfig, DesktopConfig, FrameConfig};
pub use error::DesktopError;
pub use input::{DragState, InputResult, InputRouter};
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use shell::{DesktopShell, StartMenu, TaskbarClick};
pub use view::{DesktopFrame, PinnedApp, StartMenuView, TaskbarView, WindowView};
pub use window::{
    SpawnCascade, WindowFrame, WindowId, WindowRecord, WindowRegion, WindowRegistry,
    WindowState, ZOrder,
};

pub use glass_apps::{AppKind, Theme};
