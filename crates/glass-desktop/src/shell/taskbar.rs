//! Taskbar, start menu, desktop icons and appearance controls

use glass_apps::{AppKind, Theme};
use serde::Serialize;

use crate::error::DesktopError;
use crate::window::WindowId;
use super::DesktopShell;

/// What a taskbar pin click did
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TaskbarClick {
    /// An instance was open; its minimized flag was toggled
    Toggled {
        #[serde(rename = "windowId")]
        window_id: WindowId,
    },
    /// No instance was open; a new one was launched
    Launched {
        #[serde(rename = "windowId")]
        window_id: WindowId,
    },
}

impl TaskbarClick {
    #[inline]
    pub fn window_id(self) -> WindowId {
        match self {
            TaskbarClick::Toggled { window_id } | TaskbarClick::Launched { window_id } => window_id,
        }
    }
}

impl DesktopShell {
    /// Open or close the start panel. Closing clears the search query.
    pub fn toggle_start_menu(&mut self) {
        self.start_menu.open = !self.start_menu.open;
        if !self.start_menu.open {
            self.start_menu.query.clear();
        }
    }

    /// Update the start menu search query
    pub fn set_start_query(&mut self, query: &str) {
        self.start_menu.query = query.to_string();
    }

    /// Launch from the start menu and close the panel
    pub fn start_menu_launch(&mut self, app: AppKind) -> WindowId {
        let id = self.launch(app);
        self.start_menu.open = false;
        self.start_menu.query.clear();
        id
    }

    /// Taskbar pin: toggle minimize of the first open instance, else launch
    pub fn taskbar_click(&mut self, app: AppKind) -> TaskbarClick {
        match self.windows.first_open(app).map(|r| r.id) {
            Some(window_id) => {
                self.toggle_minimize(window_id);
                TaskbarClick::Toggled { window_id }
            }
            None => TaskbarClick::Launched {
                window_id: self.launch(app),
            },
        }
    }

    /// Desktop icon double-click
    #[inline]
    pub fn desktop_icon_activate(&mut self, app: AppKind) -> WindowId {
        self.launch(app)
    }

    /// Whether any instance of `app` is open (minimized counts)
    pub fn is_app_open(&self, app: AppKind) -> bool {
        self.windows.first_open(app).is_some()
    }

    /// Taskbar theme toggle
    pub fn toggle_theme(&mut self) -> Theme {
        self.appearance.toggle_theme();
        self.appearance.theme
    }

    /// Explicit theme choice (Settings)
    pub fn set_theme(&mut self, theme: Theme) {
        self.appearance.set_theme(theme);
    }

    /// Select a catalog wallpaper by name
    pub fn set_wallpaper(&mut self, name: &str) -> Result<(), DesktopError> {
        self.appearance.set_wallpaper_by_name(name)?;
        Ok(())
    }

    /// Set the glass intensity; out-of-range values are clamped
    pub fn set_glass(&mut self, value: u8) {
        self.appearance.set_glass(value);
    }
}
