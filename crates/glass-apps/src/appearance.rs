//! Appearance State
//!
//! Theme, wallpaper and glass intensity. One instance lives in the desktop
//! shell for the whole session; the Settings app and the taskbar theme toggle
//! read and write it.

use crate::error::AppError;
use alloc::format;
use alloc::string::{String, ToString};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Light or dark UI theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The other theme
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Class applied to the document root; only the dark theme sets one.
    pub fn root_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(AppError::UnknownTheme(other.to_string())),
        }
    }
}

/// A wallpaper choice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Wallpaper {
    pub name: &'static str,
    pub url: &'static str,
}

/// The fixed wallpaper catalog. The first entry is the session default.
pub static WALLPAPERS: [Wallpaper; 4] = [
    Wallpaper {
        name: "Aurora",
        url: "https://images.unsplash.com/photo-1444703686981-a3abbc4d4fe3?q=80&w=1920&auto=format&fit=crop",
    },
    Wallpaper {
        name: "Glass Wave",
        url: "https://images.unsplash.com/photo-1549880338-65ddcdfd017b?q=80&w=1920&auto=format&fit=crop",
    },
    Wallpaper {
        name: "Pastel City",
        url: "https://images.unsplash.com/photo-1520857014576-2c4f4c972b57?q=80&w=1920&auto=format&fit=crop",
    },
    Wallpaper {
        name: "Gradient Mesh",
        url: "https://images.unsplash.com/photo-1549880338-3281d14b2c6b?q=80&w=1920&auto=format&fit=crop",
    },
];

impl Wallpaper {
    /// Look up a catalog wallpaper by its display name
    pub fn by_name(name: &str) -> Result<&'static Wallpaper, AppError> {
        WALLPAPERS
            .iter()
            .find(|w| w.name == name)
            .ok_or_else(|| AppError::UnknownWallpaper(name.to_string()))
    }
}

/// Backdrop blur strength, always within `MIN..=MAX`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct GlassIntensity(u8);

impl GlassIntensity {
    pub const MIN: u8 = 4;
    pub const MAX: u8 = 28;
    pub const DEFAULT: GlassIntensity = GlassIntensity(16);

    /// Create an intensity, clamping into the slider range
    #[inline]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Tailwind-style class the host applies to glass surfaces
    pub fn blur_class(self) -> String {
        format!("backdrop-blur-{}", self.0)
    }
}

impl Default for GlassIntensity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for GlassIntensity {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<GlassIntensity> for u8 {
    fn from(glass: GlassIntensity) -> Self {
        glass.0
    }
}

/// Shared appearance state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Appearance {
    pub theme: Theme,
    pub wallpaper: &'static Wallpaper,
    pub glass: GlassIntensity,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            wallpaper: &WALLPAPERS[0],
            glass: GlassIntensity::default(),
        }
    }
}

impl Appearance {
    /// Flip between light and dark
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        log::debug!("theme toggled to {}", self.theme.id());
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_wallpaper(&mut self, wallpaper: &'static Wallpaper) {
        self.wallpaper = wallpaper;
    }

    /// Select a catalog wallpaper by name; unknown names leave the state untouched
    pub fn set_wallpaper_by_name(&mut self, name: &str) -> Result<(), AppError> {
        self.wallpaper = Wallpaper::by_name(name)?;
        Ok(())
    }

    /// Set the glass intensity; out-of-range values are clamped
    pub fn set_glass(&mut self, value: u8) {
        self.glass = GlassIntensity::new(value);
    }
}
