//! Error Types for the GlassOS Desktop

use glass_apps::AppError;

/// Errors raised at the desktop's parsing boundaries.
///
/// Window operations never fail: unknown or closed window ids are silent
/// no-ops. Only host-supplied names and configuration can be rejected.
#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    /// A host-supplied identifier does not name a catalog entry.
    #[error(transparent)]
    App(#[from] AppError),

    /// The configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    /// A frame could not be serialized.
    #[error("frame serialization failed: {0}")]
    Render(String),
}
