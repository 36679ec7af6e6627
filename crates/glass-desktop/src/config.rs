//! Desktop configuration
//!
//! Every field has a default, so `{}` (or no config at all) yields the
//! stock GlassOS desktop. The host may override any subset as camelCase
//! JSON.

use glass_apps::{GlassIntensity, Theme, Wallpaper, WALLPAPERS};
use serde::{Deserialize, Serialize};

use crate::error::DesktopError;
use crate::math::{Size, Vec2};

/// Spawn cascade parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CascadeConfig {
    /// Added to the running offset to get the spawn position
    pub origin: Vec2,
    /// Offset before the first launch
    pub initial_offset: Vec2,
    /// Advance applied on every launch
    pub step: Vec2,
    /// Wraparound for each offset component; zero disables wrapping
    ///
    /// The default x of 256 keeps the fifth launch at x = 360. An x of 240
    /// wraps that launch back to the origin column instead.
    pub modulus: Vec2,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            origin: Vec2::new(120.0, 120.0),
            initial_offset: Vec2::new(80.0, 80.0),
            step: Vec2::new(32.0, 24.0),
            modulus: Vec2::new(256.0, 200.0),
        }
    }
}

/// Window frame dimensions
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrameConfig {
    /// Frame width of a normal window
    pub normal_width: f32,
    /// Content height of a normal window (title bar excluded)
    pub normal_content_height: f32,
    /// Subtracted from the viewport for a maximized window
    /// (width: total frame width, height: content height)
    pub maximized_margin: Size,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            normal_width: 680.0,
            normal_content_height: 420.0,
            maximized_margin: Size::new(32.0, 160.0),
        }
    }
}

/// Top-level desktop configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Initial viewport size; the host should call `resize` once mounted
    pub viewport: Size,
    pub cascade: CascadeConfig,
    pub frame: FrameConfig,
    /// z-index of the bottom window; rank is added on top
    pub base_z_index: u32,
    pub theme: Theme,
    /// Wallpaper name from the catalog
    pub wallpaper: String,
    pub glass: GlassIntensity,
    /// Show the tray clock as `HH:MM` (true) or `hh:MM AM/PM` (false)
    pub clock_24h: bool,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(1280.0, 800.0),
            cascade: CascadeConfig::default(),
            frame: FrameConfig::default(),
            base_z_index: 100,
            theme: Theme::default(),
            wallpaper: WALLPAPERS[0].name.to_string(),
            glass: GlassIntensity::default(),
            clock_24h: true,
        }
    }
}

impl DesktopConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, DesktopError> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would make the desktop misbehave
    pub fn validate(&self) -> Result<(), DesktopError> {
        if self.frame.normal_width <= 0.0 || self.frame.normal_content_height <= 0.0 {
            return Err(DesktopError::InvalidConfig("frame size must be positive"));
        }
        if self.cascade.modulus.x < 0.0 || self.cascade.modulus.y < 0.0 {
            return Err(DesktopError::InvalidConfig("cascade modulus must not be negative"));
        }
        Wallpaper::by_name(&self.wallpaper)?;
        Ok(())
    }

    /// The configured wallpaper, falling back to the catalog default
    pub fn wallpaper(&self) -> &'static Wallpaper {
        Wallpaper::by_name(&self.wallpaper).unwrap_or(&WALLPAPERS[0])
    }
}
