//! Input result type

use serde::Serialize;

use crate::window::{WindowId, WindowRegion};

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// A title bar control was activated
    Control {
        #[serde(rename = "windowId")]
        window_id: WindowId,
        region: WindowRegion,
    },
    /// Input should be forwarded to window content
    Forward {
        /// Target window
        #[serde(rename = "windowId")]
        window_id: WindowId,
        /// X coordinate in content-local space
        #[serde(rename = "localX")]
        local_x: f32,
        /// Y coordinate in content-local space
        #[serde(rename = "localY")]
        local_y: f32,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// Check if input should be forwarded
    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, InputResult::Forward { .. })
    }
}
