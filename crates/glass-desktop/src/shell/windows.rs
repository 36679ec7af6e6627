//! Window lifecycle operations

use glass_apps::{AppInstance, AppKind};

use crate::error::DesktopError;
use crate::math::Vec2;
use crate::window::{WindowFrame, WindowId, WindowRecord};
use super::DesktopShell;

impl DesktopShell {
    /// Launch an app in a new window and bring it to front
    pub fn launch(&mut self, app: AppKind) -> WindowId {
        let id = self.windows.launch(app);
        self.instances.insert(id, AppInstance::new(app));
        self.z_order.bring_to_front(id);
        self.refresh_clock();
        id
    }

    /// Launch by host-side app id (e.g. `"calculator"`)
    pub fn launch_by_id(&mut self, app_id: &str) -> Result<WindowId, DesktopError> {
        let app: AppKind = app_id.parse()?;
        Ok(self.launch(app))
    }

    /// Close a window (tombstone). The app instance is kept until compaction.
    pub fn close_window(&mut self, id: WindowId) {
        if !self.windows.is_open(id) {
            return;
        }
        self.windows.close(id);
        self.input.cancel_for(id);
        self.refresh_clock();
    }

    /// Minimize or restore a window
    pub fn toggle_minimize(&mut self, id: WindowId) {
        if !self.windows.is_open(id) {
            return;
        }
        self.windows.toggle_minimize(id);
        self.input.cancel_for(id);
        self.refresh_clock();
    }

    /// Maximize or restore a window
    pub fn toggle_maximize(&mut self, id: WindowId) {
        if !self.windows.is_open(id) {
            return;
        }
        self.windows.toggle_maximize(id);
        self.refresh_clock();
    }

    /// Raise a window to the top of the stack
    pub fn focus_window(&mut self, id: WindowId) {
        if !self.windows.is_open(id) {
            return;
        }
        self.z_order.bring_to_front(id);
        self.refresh_clock();
    }

    /// Move a window's frame to `(x, y)`
    pub fn move_window(&mut self, id: WindowId, x: f32, y: f32) {
        self.windows.set_position(id, Vec2::new(x, y));
    }

    /// Topmost window that is open and not minimized
    pub fn focused_window(&self) -> Option<WindowId> {
        self.z_order
            .ids()
            .iter()
            .rev()
            .copied()
            .find(|&id| self.windows.get(id).is_some_and(WindowRecord::is_visible))
    }

    /// Frame geometry of a visible window
    pub fn window_frame(&self, id: WindowId) -> Option<WindowFrame> {
        self.windows
            .get(id)
            .filter(|r| r.is_visible())
            .map(|r| WindowFrame::for_record(r, &self.config.frame, self.viewport))
    }

    /// Drop closed windows, their app instances and stale z-order entries
    ///
    /// Returns the number of records removed. Never called implicitly.
    pub fn compact(&mut self) -> usize {
        let removed = self.windows.compact();
        for id in &removed {
            self.instances.remove(id);
        }

        let windows = &self.windows;
        self.z_order.retain(|id| windows.is_open(id));

        if !removed.is_empty() {
            log::debug!("compacted {} closed windows", removed.len());
        }
        removed.len()
    }
}
