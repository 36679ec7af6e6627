//! App actions routed to per-window instances
//!
//! Each action targets one window. Actions on unknown or closed windows, or
//! on a window hosting a different app, are no-ops that return `false`.

use glass_apps::apps::{CalculatorApp, CalculatorKey, MusicApp};
use glass_apps::AppInstance;

use crate::error::DesktopError;
use crate::window::WindowId;
use super::DesktopShell;

impl DesktopShell {
    /// App instance of an open window
    fn open_instance_mut(&mut self, id: WindowId) -> Option<&mut AppInstance> {
        if !self.windows.is_open(id) {
            return None;
        }
        self.instances.get_mut(&id)
    }

    fn calculator_mut(&mut self, id: WindowId) -> Option<&mut CalculatorApp> {
        self.open_instance_mut(id)?.as_calculator_mut()
    }

    fn music_mut(&mut self, id: WindowId) -> Option<&mut MusicApp> {
        self.open_instance_mut(id)?.as_music_mut()
    }

    /// Replace the shared notes buffer (every Notes window shows it)
    pub fn set_notes(&mut self, text: &str) {
        self.notes.clear();
        self.notes.push_str(text);
    }

    /// Press a calculator key
    pub fn calculator_key(&mut self, id: WindowId, key: CalculatorKey) -> bool {
        match self.calculator_mut(id) {
            Some(calc) => {
                calc.press(key);
                true
            }
            None => false,
        }
    }

    /// Press a calculator key by host name (`"7"`, `"="`, `"backspace"`, ...)
    pub fn calculator_key_by_name(&mut self, id: WindowId, name: &str) -> Result<bool, DesktopError> {
        let key: CalculatorKey = name.parse()?;
        Ok(self.calculator_key(id, key))
    }

    /// Replace the calculator expression (direct typing)
    pub fn calculator_set(&mut self, id: WindowId, text: &str) -> bool {
        match self.calculator_mut(id) {
            Some(calc) => {
                calc.set_expression(text);
                true
            }
            None => false,
        }
    }

    /// Previous track (wraps)
    pub fn music_prev(&mut self, id: WindowId) -> bool {
        self.music_mut(id).map(MusicApp::prev).is_some()
    }

    /// Next track (wraps)
    pub fn music_next(&mut self, id: WindowId) -> bool {
        self.music_mut(id).map(MusicApp::next).is_some()
    }

    /// Jump to a playlist row; `false` for rows past the end of the playlist
    pub fn music_select(&mut self, id: WindowId, index: usize) -> bool {
        self.music_mut(id).is_some_and(|player| player.select(index))
    }

    /// Play (no audio)
    pub fn music_play(&mut self, id: WindowId) -> bool {
        self.music_mut(id).map(|player| player.play()).is_some()
    }
}
