//! Frame snapshot construction

use glass_apps::{catalog, ContentProvider, RenderContext, Theme, APP_CATALOG, DESKTOP_ICONS};
use glass_apps::{AppEntry, Icon};

use crate::error::DesktopError;
use crate::math::FRAME_STYLE;
use crate::view::{
    DesktopFrame, PinnedApp, StartMenuView, TaskbarView, WindowView, CREDITS,
    START_SEARCH_PLACEHOLDER, TRAY_ICONS,
};
use crate::window::{WindowFrame, WindowRecord};
use super::DesktopShell;

impl DesktopShell {
    /// z-index for a window: base + rank, base when unstacked
    pub fn z_index(&self, record: &WindowRecord) -> u32 {
        let rank = self.z_order.rank(record.id).unwrap_or(0);
        self.config.base_z_index.saturating_add(rank as u32)
    }

    /// Visible windows in launch order
    pub fn window_views(&self) -> Vec<WindowView> {
        let ctx = RenderContext {
            appearance: &self.appearance,
            notes: &self.notes,
        };
        let focused = self.focused_window();

        self.windows
            .list_open()
            .filter(|r| r.is_visible())
            .filter_map(|record| {
                let instance = self.instances.get(&record.id)?;
                let frame = WindowFrame::for_record(record, &self.config.frame, self.viewport);
                Some(WindowView {
                    id: record.id,
                    app: record.app,
                    title: record.title,
                    icon: record.app.icon(),
                    state: record.state(),
                    maximized: record.maximized,
                    focused: focused == Some(record.id),
                    z_index: self.z_index(record),
                    rect: frame.rect(),
                    content_height: frame.content_rect().height,
                    content: instance.render(&ctx),
                })
            })
            .collect()
    }

    /// Taskbar contents
    pub fn taskbar_view(&self) -> TaskbarView {
        let pinned = APP_CATALOG
            .iter()
            .map(|entry| PinnedApp {
                entry: *entry,
                open: self.is_app_open(entry.id),
            })
            .collect();

        TaskbarView {
            start_icon: Icon::AppWindow,
            start_open: self.start_menu.open,
            pinned,
            theme_icon: match self.appearance.theme {
                Theme::Dark => Icon::Sun,
                Theme::Light => Icon::Moon,
            },
            tray: TRAY_ICONS,
            clock: self.clock.label().to_string(),
        }
    }

    /// Start menu panel
    pub fn start_menu_view(&self) -> StartMenuView {
        StartMenuView {
            open: self.start_menu.open,
            query: self.start_menu.query.clone(),
            placeholder: START_SEARCH_PLACEHOLDER,
            apps: catalog::search(&self.start_menu.query).copied().collect(),
        }
    }

    /// Complete snapshot for the host
    pub fn frame(&self) -> DesktopFrame {
        let theme = self.appearance.theme;
        DesktopFrame {
            theme,
            root_class: theme.root_class(),
            wallpaper: *self.appearance.wallpaper,
            glass: self.appearance.glass.value(),
            blur_class: self.appearance.glass.blur_class(),
            frame_style: FRAME_STYLE,
            desktop_icons: DESKTOP_ICONS.iter().map(|kind| *kind.entry()).collect::<Vec<AppEntry>>(),
            windows: self.window_views(),
            focused_id: self.focused_window(),
            taskbar: self.taskbar_view(),
            start_menu: self.start_menu_view(),
            credits: CREDITS,
            dragging: self.input.drag_state().map(|d| d.window_id),
        }
    }

    /// Snapshot as JSON
    pub fn frame_json(&self) -> Result<String, DesktopError> {
        serde_json::to_string(&self.frame()).map_err(|e| DesktopError::Render(e.to_string()))
    }
}
