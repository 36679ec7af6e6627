//! Settings Application
//!
//! Presents the shared appearance state. The panel holds no state of its
//! own; edits go straight to [`Appearance`](crate::appearance::Appearance).

use super::{ContentProvider, ContentView, RenderContext};
use crate::appearance::{GlassIntensity, Theme, WALLPAPERS};
use crate::catalog::AppKind;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsApp;

/// One wallpaper tile in the picker
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WallpaperChoice {
    pub name: &'static str,
    pub url: &'static str,
    pub selected: bool,
}

/// Settings content view
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub theme: Theme,
    pub wallpapers: Vec<WallpaperChoice>,
    pub glass: u8,
    pub glass_min: u8,
    pub glass_max: u8,
    pub blur_class: String,
}

impl ContentProvider for SettingsApp {
    fn kind(&self) -> AppKind {
        AppKind::Settings
    }

    fn render(&self, ctx: &RenderContext<'_>) -> ContentView {
        let appearance = ctx.appearance;
        let wallpapers = WALLPAPERS
            .iter()
            .map(|w| WallpaperChoice {
                name: w.name,
                url: w.url,
                selected: w.name == appearance.wallpaper.name,
            })
            .collect();

        ContentView::Settings(SettingsView {
            theme: appearance.theme,
            wallpapers,
            glass: appearance.glass.value(),
            glass_min: GlassIntensity::MIN,
            glass_max: GlassIntensity::MAX,
            blur_class: appearance.glass.blur_class(),
        })
    }
}
