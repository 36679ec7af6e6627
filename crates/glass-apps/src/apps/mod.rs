//! GlassOS Applications
//!
//! Each application has its own module containing:
//! - Its per-window state (if any)
//! - Its `ContentProvider` implementation producing a serializable view
//!
//! The desktop hosts one [`AppInstance`] per window and dispatches on the
//! variant; there is no open-ended lookup by string.

pub mod about;
pub mod calculator;
pub mod gallery;
pub mod music;
pub mod notes;
pub mod settings;

pub use about::{AboutApp, AboutView};
pub use calculator::{CalculatorApp, CalculatorKey, CalculatorView, EvalError};
pub use gallery::{GalleryApp, GalleryView};
pub use music::{MusicApp, MusicView, Track, PLAYLIST};
pub use notes::{NotesApp, NotesView};
pub use settings::{SettingsApp, SettingsView, WallpaperChoice};

use crate::appearance::Appearance;
use crate::catalog::AppKind;
use serde::Serialize;

/// Shared state a content provider may read while rendering
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    /// Session-wide appearance (theme, wallpaper, glass)
    pub appearance: &'a Appearance,
    /// The shell-owned notes buffer
    pub notes: &'a str,
}

/// Interface implemented by every hosted application
pub trait ContentProvider {
    /// Which catalog entry this provider belongs to
    fn kind(&self) -> AppKind;

    /// Render the content area from local state and the shared slice
    fn render(&self, ctx: &RenderContext<'_>) -> ContentView;
}

/// Rendered content of one window, tagged by app for the host
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentView {
    Notes(NotesView),
    Music(MusicView),
    Gallery(GalleryView),
    Calculator(CalculatorView),
    Settings(SettingsView),
    About(AboutView),
}

/// Per-window application state
#[derive(Clone, Debug, PartialEq)]
pub enum AppInstance {
    Notes(NotesApp),
    Music(MusicApp),
    Gallery(GalleryApp),
    Calculator(CalculatorApp),
    Settings(SettingsApp),
    About(AboutApp),
}

impl AppInstance {
    /// Fresh instance for a newly launched window
    pub fn new(kind: AppKind) -> Self {
        match kind {
            AppKind::Notes => AppInstance::Notes(NotesApp),
            AppKind::Music => AppInstance::Music(MusicApp::default()),
            AppKind::Gallery => AppInstance::Gallery(GalleryApp),
            AppKind::Calculator => AppInstance::Calculator(CalculatorApp::default()),
            AppKind::Settings => AppInstance::Settings(SettingsApp),
            AppKind::About => AppInstance::About(AboutApp),
        }
    }

    fn provider(&self) -> &dyn ContentProvider {
        match self {
            AppInstance::Notes(app) => app,
            AppInstance::Music(app) => app,
            AppInstance::Gallery(app) => app,
            AppInstance::Calculator(app) => app,
            AppInstance::Settings(app) => app,
            AppInstance::About(app) => app,
        }
    }

    /// Get the calculator state if this is a calculator window
    pub fn as_calculator_mut(&mut self) -> Option<&mut CalculatorApp> {
        match self {
            AppInstance::Calculator(app) => Some(app),
            _ => None,
        }
    }

    /// Get the music player state if this is a music window
    pub fn as_music_mut(&mut self) -> Option<&mut MusicApp> {
        match self {
            AppInstance::Music(app) => Some(app),
            _ => None,
        }
    }
}

impl ContentProvider for AppInstance {
    fn kind(&self) -> AppKind {
        self.provider().kind()
    }

    fn render(&self, ctx: &RenderContext<'_>) -> ContentView {
        self.provider().render(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_kind_matches_launch_kind() {
        for kind in AppKind::all() {
            assert_eq!(AppInstance::new(kind).kind(), kind);
        }
    }

    #[test]
    fn test_render_dispatches_by_variant() {
        let appearance = Appearance::default();
        let ctx = RenderContext { appearance: &appearance, notes: "hello" };

        match AppInstance::new(AppKind::Notes).render(&ctx) {
            ContentView::Notes(view) => assert_eq!(view.value, "hello"),
            other => panic!("Expected notes view, got {:?}", other),
        }
        assert!(matches!(
            AppInstance::new(AppKind::Gallery).render(&ctx),
            ContentView::Gallery(_)
        ));
    }

    #[test]
    fn test_typed_accessors() {
        let mut calc = AppInstance::new(AppKind::Calculator);
        assert!(calc.as_calculator_mut().is_some());
        assert!(calc.as_music_mut().is_none());
    }

    #[test]
    fn test_content_view_is_tagged() {
        let appearance = Appearance::default();
        let ctx = RenderContext { appearance: &appearance, notes: "" };
        let json = serde_json::to_value(AppInstance::new(AppKind::About).render(&ctx)).unwrap();
        assert_eq!(json["type"], "about");
    }
}
