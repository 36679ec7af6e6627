//! Window record and derived state

use glass_apps::AppKind;
use serde::Serialize;

use crate::math::Vec2;
use super::WindowId;

/// Window state derived from the record's flags
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    Normal,
    Minimized,
    Maximized,
    Closed,
}

/// One launched application instance
///
/// Records are tombstoned on close rather than removed; only an explicit
/// compaction drops them.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    /// Unique identifier, never reused
    pub id: WindowId,
    /// Hosted application
    pub app: AppKind,
    /// Catalog title
    pub title: &'static str,
    pub minimized: bool,
    pub maximized: bool,
    /// Terminal: once set, never cleared
    pub closed: bool,
    /// Top-left corner of the frame
    pub position: Vec2,
}

impl WindowRecord {
    pub(crate) fn new(id: WindowId, app: AppKind, position: Vec2) -> Self {
        Self {
            id,
            app,
            title: app.title(),
            minimized: false,
            maximized: false,
            closed: false,
            position,
        }
    }

    /// Derived state. Minimized wins over maximized.
    pub fn state(&self) -> WindowState {
        if self.closed {
            WindowState::Closed
        } else if self.minimized {
            WindowState::Minimized
        } else if self.maximized {
            WindowState::Maximized
        } else {
            WindowState::Normal
        }
    }

    /// Not closed (minimized windows are still open)
    #[inline]
    pub fn is_open(&self) -> bool {
        !self.closed
    }

    /// Open and not minimized, i.e. rendered on the desktop
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.closed && !self.minimized
    }
}
