//! Error Types for GlassOS Apps
//!
//! Errors raised when host-supplied identifiers do not name a catalog entry.

use alloc::string::String;

/// Errors that can occur when resolving app-level identifiers.
///
/// Every identifier the host sends (app ids, wallpaper names, theme names,
/// calculator keys) is parsed into a typed value at the boundary. These
/// errors are the only failure mode of that parsing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// The identifier is not one of the six catalog apps.
    #[error("unknown app id: {0}")]
    UnknownApp(String),

    /// The name is not in the wallpaper catalog.
    #[error("unknown wallpaper: {0}")]
    UnknownWallpaper(String),

    /// The theme name is neither `light` nor `dark`.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// The calculator has no key with this name.
    #[error("unknown calculator key: {0}")]
    UnknownKey(String),
}
