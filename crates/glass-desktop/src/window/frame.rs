//! Window frame geometry and hit testing

use crate::config::FrameConfig;
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use super::{WindowRecord, WindowRegion};

/// Screen geometry of one window's frame
///
/// Width and content height depend only on the maximized flag and the
/// viewport; the frame always sits at the record's position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowFrame {
    rect: Rect,
}

impl WindowFrame {
    /// Frame for `record` given the frame config and current viewport
    pub fn for_record(record: &WindowRecord, config: &FrameConfig, viewport: Size) -> Self {
        let content = Self::content_size(record.maximized, config, viewport);
        let size = Size::new(content.width, content.height + FRAME_STYLE.title_bar_height);
        Self {
            rect: Rect::from_pos_size(record.position, size),
        }
    }

    /// Content area size (title bar excluded)
    pub fn content_size(maximized: bool, config: &FrameConfig, viewport: Size) -> Size {
        if maximized {
            viewport.shrink(config.maximized_margin)
        } else {
            Size::new(config.normal_width, config.normal_content_height)
        }
    }

    /// Whole frame
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Get the title bar rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.rect.x,
            self.rect.y,
            self.rect.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Get the content area rectangle
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.rect.x,
            self.rect.y + FRAME_STYLE.title_bar_height,
            self.rect.width,
            self.rect.height - FRAME_STYLE.title_bar_height,
        )
    }

    /// Control button `slot` counted from the right edge (0 = close)
    fn button_rect(&self, slot: f32) -> Rect {
        let x = self.rect.right()
            - FRAME_STYLE.button_margin
            - FRAME_STYLE.button_size * (slot + 1.0)
            - FRAME_STYLE.button_spacing * slot;
        let y = self.rect.y + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
        Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }

    /// Get the close button rectangle
    #[inline]
    pub fn close_button_rect(&self) -> Rect {
        self.button_rect(0.0)
    }

    /// Get the maximize button rectangle
    #[inline]
    pub fn maximize_button_rect(&self) -> Rect {
        self.button_rect(1.0)
    }

    /// Get the minimize button rectangle
    #[inline]
    pub fn minimize_button_rect(&self) -> Rect {
        self.button_rect(2.0)
    }

    /// Which region of this frame is under `pos`, if any
    pub fn hit_test(&self, pos: Vec2) -> Option<WindowRegion> {
        if !self.rect.contains(pos) {
            return None;
        }

        // Buttons first (highest priority)
        if self.close_button_rect().contains(pos) {
            return Some(WindowRegion::CloseButton);
        }
        if self.maximize_button_rect().contains(pos) {
            return Some(WindowRegion::MaximizeButton);
        }
        if self.minimize_button_rect().contains(pos) {
            return Some(WindowRegion::MinimizeButton);
        }

        if self.title_bar_rect().contains(pos) {
            return Some(WindowRegion::TitleBar);
        }

        Some(WindowRegion::Content)
    }
}
