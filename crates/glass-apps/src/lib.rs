//! GlassOS Application Layer
//!
//! This crate holds everything the desktop hosts but does not manage itself:
//!
//! - **Catalog**: the six apps, their titles and icons
//! - **Appearance**: theme, wallpaper and glass intensity
//! - **Apps**: per-window state and the `ContentProvider` each app implements
//!
//! Window management lives in `glass-desktop`; nothing here knows about
//! positions, focus or z-order.

extern crate alloc;

pub mod appearance;
pub mod apps;
pub mod catalog;
pub mod error;

// Re-export core types at crate root
pub use appearance::{Appearance, GlassIntensity, Theme, Wallpaper, WALLPAPERS};
pub use apps::{AppInstance, ContentProvider, ContentView, RenderContext};
pub use catalog::{AppEntry, AppKind, Icon, APP_CATALOG, DESKTOP_ICONS};
pub use error::AppError;
