//! WASM exports for the desktop shell
//!
//! This module provides wasm-bindgen exports for the DesktopShell, allowing
//! a React (or plain DOM) host to drive the desktop. Methods take primitive
//! arguments; structured results are returned as JSON strings.

use wasm_bindgen::prelude::*;

use glass_apps::{AppKind, Theme};

use crate::config::DesktopConfig;
use crate::error::DesktopError;
use crate::input::InputResult;
use crate::logging;
use crate::shell::DesktopShell;

/// Log a rejected host value and map it to a neutral result
fn rejected<T>(what: &str, err: DesktopError, fallback: T) -> T {
    log::warn!("{} rejected: {}", what, err);
    fallback
}

fn input_json(result: &InputResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
}

/// Toggle the `dark` class on `<html>` to match the theme
fn apply_root_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        if let Err(e) = root.class_list().toggle_with_force("dark", theme.root_class().is_some()) {
            log::warn!("failed to update root theme class: {:?}", e);
        }
    }
}

/// Desktop controller for WASM - wraps DesktopShell with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    shell: DesktopShell,
}

impl DesktopController {
    fn from_shell(shell: DesktopShell) -> Self {
        apply_root_theme(shell.appearance().theme);
        Self { shell }
    }

    fn parse_app(app_id: &str) -> Option<AppKind> {
        app_id
            .parse::<AppKind>()
            .map_err(|e| rejected("app id", e.into(), ()))
            .ok()
    }
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller with the stock configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        logging::init(log::LevelFilter::Info);
        Self::from_shell(DesktopShell::new())
    }

    /// Create a controller from a JSON configuration
    #[wasm_bindgen]
    pub fn with_config(json: &str) -> Result<DesktopController, JsValue> {
        logging::init(log::LevelFilter::Info);
        let shell = DesktopConfig::from_json(json)
            .and_then(DesktopShell::with_config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_shell(shell))
    }

    /// Set the viewport size
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.shell.resize(width, height);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Launch an app by id; `undefined` for unknown ids
    #[wasm_bindgen]
    pub fn launch_app(&mut self, app_id: &str) -> Option<u64> {
        Self::parse_app(app_id).map(|app| self.shell.launch(app))
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: u64) {
        self.shell.close_window(id);
    }

    #[wasm_bindgen]
    pub fn toggle_minimize(&mut self, id: u64) {
        self.shell.toggle_minimize(id);
    }

    #[wasm_bindgen]
    pub fn toggle_maximize(&mut self, id: u64) {
        self.shell.toggle_maximize(id);
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: u64) {
        self.shell.focus_window(id);
    }

    #[wasm_bindgen]
    pub fn move_window(&mut self, id: u64, x: f32, y: f32) {
        self.shell.move_window(id, x, y);
    }

    /// Get the focused window ID
    #[wasm_bindgen]
    pub fn focused_window(&self) -> Option<u64> {
        self.shell.focused_window()
    }

    /// Drop closed windows; returns how many were removed
    #[wasm_bindgen]
    pub fn compact(&mut self) -> u32 {
        self.shell.compact() as u32
    }

    // =========================================================================
    // Input
    // =========================================================================

    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> String {
        input_json(&self.shell.pointer_down(x, y))
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        input_json(&self.shell.pointer_move(x, y))
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        input_json(&self.shell.pointer_up())
    }

    /// CSS cursor for the pointer position
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        self.shell.cursor_at(x, y).to_string()
    }

    // =========================================================================
    // Taskbar / Start menu
    // =========================================================================

    #[wasm_bindgen]
    pub fn toggle_start_menu(&mut self) {
        self.shell.toggle_start_menu();
    }

    #[wasm_bindgen]
    pub fn set_start_query(&mut self, query: &str) {
        self.shell.set_start_query(query);
    }

    #[wasm_bindgen]
    pub fn start_menu_launch(&mut self, app_id: &str) -> Option<u64> {
        Self::parse_app(app_id).map(|app| self.shell.start_menu_launch(app))
    }

    /// Taskbar pin click; returns the affected window
    #[wasm_bindgen]
    pub fn taskbar_click(&mut self, app_id: &str) -> Option<u64> {
        Self::parse_app(app_id).map(|app| self.shell.taskbar_click(app).window_id())
    }

    #[wasm_bindgen]
    pub fn desktop_icon_activate(&mut self, app_id: &str) -> Option<u64> {
        Self::parse_app(app_id).map(|app| self.shell.desktop_icon_activate(app))
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Flip the theme; returns the new theme id
    #[wasm_bindgen]
    pub fn toggle_theme(&mut self) -> String {
        let theme = self.shell.toggle_theme();
        apply_root_theme(theme);
        theme.id().to_string()
    }

    #[wasm_bindgen]
    pub fn set_theme(&mut self, theme: &str) -> bool {
        match theme.parse::<Theme>() {
            Ok(theme) => {
                self.shell.set_theme(theme);
                apply_root_theme(theme);
                true
            }
            Err(e) => rejected("theme", e.into(), false),
        }
    }

    #[wasm_bindgen]
    pub fn set_wallpaper(&mut self, name: &str) -> bool {
        match self.shell.set_wallpaper(name) {
            Ok(()) => true,
            Err(e) => rejected("wallpaper", e, false),
        }
    }

    #[wasm_bindgen]
    pub fn set_glass(&mut self, value: u8) {
        self.shell.set_glass(value);
    }

    // =========================================================================
    // Apps
    // =========================================================================

    #[wasm_bindgen]
    pub fn set_notes(&mut self, text: &str) {
        self.shell.set_notes(text);
    }

    /// Press a calculator key by name (`"7"`, `"="`, `"backspace"`, `"clear"`)
    #[wasm_bindgen]
    pub fn calculator_key(&mut self, id: u64, key: &str) -> bool {
        self.shell
            .calculator_key_by_name(id, key)
            .unwrap_or_else(|e| rejected("calculator key", e, false))
    }

    #[wasm_bindgen]
    pub fn calculator_set(&mut self, id: u64, text: &str) -> bool {
        self.shell.calculator_set(id, text)
    }

    #[wasm_bindgen]
    pub fn music_prev(&mut self, id: u64) -> bool {
        self.shell.music_prev(id)
    }

    #[wasm_bindgen]
    pub fn music_next(&mut self, id: u64) -> bool {
        self.shell.music_next(id)
    }

    #[wasm_bindgen]
    pub fn music_select(&mut self, id: u64, index: usize) -> bool {
        self.shell.music_select(id, index)
    }

    #[wasm_bindgen]
    pub fn music_play(&mut self, id: u64) -> bool {
        self.shell.music_play(id)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Complete desktop snapshot as JSON
    #[wasm_bindgen]
    pub fn frame_json(&self) -> String {
        self.shell
            .frame_json()
            .unwrap_or_else(|e| rejected("frame", e, "{}".to_string()))
    }
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}
