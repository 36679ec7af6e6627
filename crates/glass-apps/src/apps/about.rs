//! About Application

use super::{ContentProvider, ContentView, RenderContext};
use crate::catalog::AppKind;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AboutApp;

/// Static about text
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AboutView {
    pub title: &'static str,
    pub tagline: &'static str,
    pub features: &'static [&'static str],
    pub tip: &'static str,
}

pub const ABOUT: AboutView = AboutView {
    title: "GlassOS",
    tagline: "A cute, glassy web desktop built with Rust and WebAssembly. ✨",
    features: &[
        "Draggable windows with depth",
        "Taskbar, Start panel, quick toggles",
        "Light/Dark theme, wallpapers",
    ],
    tip: "Tip: Drag windows by the titlebar, use the controls to minimize / maximize / close.",
};

impl ContentProvider for AboutApp {
    fn kind(&self) -> AppKind {
        AppKind::About
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> ContentView {
        ContentView::About(ABOUT)
    }
}
