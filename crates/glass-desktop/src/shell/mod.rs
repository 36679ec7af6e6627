//! Desktop shell coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle, focus and compaction
//! - `input`: Pointer event handling and drag operations
//! - `taskbar`: Start menu, taskbar pins, desktop icons and appearance
//! - `apps`: Routing app actions to per-window instances
//! - `rendering`: Frame snapshot construction

mod apps;
mod input;
mod rendering;
mod taskbar;
mod windows;

use std::collections::BTreeMap;

use glass_apps::{AppInstance, Appearance};

use crate::clock::{default_time_source, TimeSource, TrayClock};
use crate::config::DesktopConfig;
use crate::error::DesktopError;
use crate::input::InputRouter;
use crate::math::Size;
use crate::window::{SpawnCascade, WindowId, WindowRegistry, ZOrder};

pub use taskbar::TaskbarClick;

/// Start menu state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartMenu {
    pub open: bool,
    /// Search query; cleared whenever the panel closes
    pub query: String,
}

/// Desktop shell coordinating all desktop components
///
/// This is the single owner of session state:
/// - Window registry (records, flags, positions)
/// - Z-order (stacking and focus)
/// - One app instance per window
/// - Appearance (theme, wallpaper, glass) and the shared notes buffer
/// - Start menu, input router and tray clock
pub struct DesktopShell {
    config: DesktopConfig,
    viewport: Size,
    windows: WindowRegistry,
    z_order: ZOrder,
    instances: BTreeMap<WindowId, AppInstance>,
    appearance: Appearance,
    notes: String,
    start_menu: StartMenu,
    input: InputRouter,
    clock: TrayClock,
    time: Box<dyn TimeSource>,
}

impl Default for DesktopShell {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopShell {
    /// Create a shell with the stock configuration
    pub fn new() -> Self {
        Self::build(DesktopConfig::default(), default_time_source())
    }

    /// Create a shell from a validated configuration
    pub fn with_config(config: DesktopConfig) -> Result<Self, DesktopError> {
        config.validate()?;
        Ok(Self::build(config, default_time_source()))
    }

    /// Replace the clock's time source (tests, demos)
    pub fn with_time_source(mut self, time: Box<dyn TimeSource>) -> Self {
        self.time = time;
        self.refresh_clock();
        self
    }

    fn build(config: DesktopConfig, time: Box<dyn TimeSource>) -> Self {
        let appearance = Appearance {
            theme: config.theme,
            wallpaper: config.wallpaper(),
            glass: config.glass,
        };

        let mut shell = Self {
            viewport: config.viewport,
            windows: WindowRegistry::new(SpawnCascade::new(&config.cascade)),
            z_order: ZOrder::new(),
            instances: BTreeMap::new(),
            appearance,
            notes: String::new(),
            start_menu: StartMenu::default(),
            input: InputRouter::new(),
            clock: TrayClock::new(config.clock_24h),
            time,
            config,
        };
        shell.refresh_clock();
        shell
    }

    /// Resize the viewport (affects maximized frames only)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width, height);
    }

    #[inline]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    #[inline]
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// The window registry
    #[inline]
    pub fn windows(&self) -> &WindowRegistry {
        &self.windows
    }

    /// The z-order tracker
    #[inline]
    pub fn z_order(&self) -> &ZOrder {
        &self.z_order
    }

    #[inline]
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// The shared notes buffer
    #[inline]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    #[inline]
    pub fn start_menu(&self) -> &StartMenu {
        &self.start_menu
    }

    #[inline]
    pub fn input(&self) -> &InputRouter {
        &self.input
    }

    /// Per-window app state
    pub fn instance(&self, id: WindowId) -> Option<&AppInstance> {
        self.instances.get(&id)
    }

    /// Current tray clock label
    #[inline]
    pub fn clock_label(&self) -> &str {
        self.clock.label()
    }

    pub(crate) fn refresh_clock(&mut self) {
        self.clock.refresh(self.time.as_ref());
    }
}
