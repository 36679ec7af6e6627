//! Frame style constants

use serde::Serialize;

/// Frame style constants for window chrome
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub border_radius: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
}

/// Default frame style matching the glass UI (rounded-3xl, px-4 py-2 title bar)
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 44.0,
    border_radius: 24.0,
    button_size: 24.0,
    button_spacing: 8.0,
    button_margin: 16.0,
};
