//! Serializable view model
//!
//! A [`DesktopFrame`] is the complete snapshot the host renders after every
//! event. Field names are camelCase for the JavaScript side.

use glass_apps::{AppEntry, AppKind, ContentView, Icon, Theme, Wallpaper};
use serde::Serialize;

use crate::math::{FrameStyle, Rect};
use crate::window::{WindowId, WindowState};

/// Text of the corner credits badge
pub const CREDITS: &str = "GlassOS • made with ❤️";

/// Placeholder of the start menu search field
pub const START_SEARCH_PLACEHOLDER: &str = "Search apps";

/// Static quick tray icons
pub const TRAY_ICONS: [Icon; 3] = [Icon::Wifi, Icon::Volume2, Icon::BatteryFull];

/// One rendered window
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub id: WindowId,
    pub app: AppKind,
    pub title: &'static str,
    pub icon: Icon,
    pub state: WindowState,
    pub maximized: bool,
    pub focused: bool,
    /// CSS z-index: base + rank in the z-order
    pub z_index: u32,
    /// Frame bounds (title bar included)
    pub rect: Rect,
    /// Content area height (title bar excluded)
    pub content_height: f32,
    pub content: ContentView,
}

/// A taskbar pin
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinnedApp {
    #[serde(flatten)]
    pub entry: AppEntry,
    /// An instance of this app is open (possibly minimized)
    pub open: bool,
}

/// Taskbar contents
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskbarView {
    pub start_icon: Icon,
    pub start_open: bool,
    pub pinned: Vec<PinnedApp>,
    /// Icon of the theme the toggle switches to
    pub theme_icon: Icon,
    pub tray: [Icon; 3],
    pub clock: String,
}

/// Start menu panel
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartMenuView {
    pub open: bool,
    pub query: String,
    pub placeholder: &'static str,
    /// Catalog entries matching the query
    pub apps: Vec<AppEntry>,
}

/// Complete desktop snapshot
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopFrame {
    pub theme: Theme,
    /// Class for the document root (`dark` iff the theme is dark)
    pub root_class: Option<&'static str>,
    pub wallpaper: Wallpaper,
    pub glass: u8,
    pub blur_class: String,
    pub frame_style: FrameStyle,
    pub desktop_icons: Vec<AppEntry>,
    /// Visible windows in launch order; stack with `zIndex`
    pub windows: Vec<WindowView>,
    pub focused_id: Option<WindowId>,
    pub taskbar: TaskbarView,
    pub start_menu: StartMenuView,
    pub credits: &'static str,
    /// Current drag target, if any
    pub dragging: Option<WindowId>,
}

