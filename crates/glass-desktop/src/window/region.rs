//! Parts of a window frame

use serde::Serialize;

/// The part of a window frame under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowRegion {
    /// Drag handle
    TitleBar,
    /// App content; presses are forwarded with local coordinates
    Content,
    CloseButton,
    MinimizeButton,
    /// Maximize or restore, depending on the current state
    MaximizeButton,
}

impl WindowRegion {
    /// CSS cursor shown while hovering this region
    pub fn cursor(self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "grab",
            WindowRegion::Content => "default",
            WindowRegion::CloseButton
            | WindowRegion::MinimizeButton
            | WindowRegion::MaximizeButton => "pointer",
        }
    }
}
