//! Application Catalog
//!
//! The fixed mapping from application kind to display title and icon.
//! Desktop icons, the start menu and the taskbar all read from here so
//! they stay in sync.

use crate::error::AppError;
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// The six applications the desktop can host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    Notes,
    Music,
    Gallery,
    Calculator,
    Settings,
    About,
}

/// Icon identifiers understood by the host renderer.
///
/// Names follow the lucide icon set the UI is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    NotebookPen,
    #[serde(rename = "music-2")]
    Music2,
    Image,
    Calculator,
    Settings,
    Info,
    AppWindow,
    Wifi,
    #[serde(rename = "volume-2")]
    Volume2,
    BatteryFull,
    Sun,
    Moon,
    Search,
}

/// A catalog entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AppEntry {
    pub id: AppKind,
    pub title: &'static str,
    pub icon: Icon,
}

/// Catalog order, used by the start menu and the taskbar pins.
pub static APP_CATALOG: [AppEntry; 6] = [
    AppEntry { id: AppKind::Notes, title: "Notes", icon: Icon::NotebookPen },
    AppEntry { id: AppKind::Music, title: "Music", icon: Icon::Music2 },
    AppEntry { id: AppKind::Gallery, title: "Gallery", icon: Icon::Image },
    AppEntry { id: AppKind::Calculator, title: "Calculator", icon: Icon::Calculator },
    AppEntry { id: AppKind::Settings, title: "Settings", icon: Icon::Settings },
    AppEntry { id: AppKind::About, title: "About GlassOS", icon: Icon::Info },
];

/// Order of the icons laid out on the desktop itself.
pub const DESKTOP_ICONS: [AppKind; 6] = [
    AppKind::Notes,
    AppKind::Gallery,
    AppKind::Music,
    AppKind::Calculator,
    AppKind::Settings,
    AppKind::About,
];

impl AppKind {
    /// All kinds in catalog order
    pub fn all() -> impl Iterator<Item = AppKind> {
        APP_CATALOG.iter().map(|entry| entry.id)
    }

    /// Catalog entry for this kind
    pub fn entry(self) -> &'static AppEntry {
        match self {
            AppKind::Notes => &APP_CATALOG[0],
            AppKind::Music => &APP_CATALOG[1],
            AppKind::Gallery => &APP_CATALOG[2],
            AppKind::Calculator => &APP_CATALOG[3],
            AppKind::Settings => &APP_CATALOG[4],
            AppKind::About => &APP_CATALOG[5],
        }
    }

    #[inline]
    pub fn title(self) -> &'static str {
        self.entry().title
    }

    #[inline]
    pub fn icon(self) -> Icon {
        self.entry().icon
    }

    /// String id used on the host side
    pub fn id(self) -> &'static str {
        match self {
            AppKind::Notes => "notes",
            AppKind::Music => "music",
            AppKind::Gallery => "gallery",
            AppKind::Calculator => "calculator",
            AppKind::Settings => "settings",
            AppKind::About => "about",
        }
    }

    /// Parse from string ID (e.g., "notes", "calculator")
    pub fn from_id(id: &str) -> Option<Self> {
        AppKind::all().find(|kind| kind.id() == id)
    }
}

impl FromStr for AppKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppKind::from_id(s).ok_or_else(|| AppError::UnknownApp(s.to_string()))
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Filter the catalog by a case-insensitive title substring.
///
/// An empty (or all-whitespace) query matches every entry.
pub fn search(query: &str) -> impl Iterator<Item = &'static AppEntry> + '_ {
    let needle = query.trim().to_lowercase();
    APP_CATALOG
        .iter()
        .filter(move |entry| needle.is_empty() || entry.title.to_lowercase().contains(&needle))
}
