//! Integration tests for glass-apps
//!
//! These exercise the public surface the desktop shell relies on.

use glass_apps::apps::{CalculatorKey, MusicApp};
use glass_apps::{
    catalog, AppInstance, AppKind, Appearance, ContentProvider, ContentView, RenderContext, Theme,
};

#[test]
fn test_every_app_renders() {
    let appearance = Appearance::default();
    let ctx = RenderContext { appearance: &appearance, notes: "" };

    for kind in AppKind::all() {
        let view = AppInstance::new(kind).render(&ctx);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["type"], kind.id());
    }
}

#[test]
fn test_calculator_session() {
    let mut instance = AppInstance::new(AppKind::Calculator);
    let calc = instance.as_calculator_mut().unwrap();

    for key in ["(", "1", "+", "2", ")", "*", "3", "="] {
        calc.press(key.parse::<CalculatorKey>().unwrap());
    }
    assert_eq!(calc.expression(), "9");

    let appearance = Appearance::default();
    let ctx = RenderContext { appearance: &appearance, notes: "" };
    match instance.render(&ctx) {
        ContentView::Calculator(view) => {
            assert_eq!(view.expression, "9");
            assert_eq!(view.keypad.len(), 16);
        }
        other => panic!("Expected calculator view, got {:?}", other),
    }
}

#[test]
fn test_music_windows_are_independent() {
    let mut a = MusicApp::default();
    let b = MusicApp::default();

    a.next();
    a.next();
    assert_eq!(a.current_track().title, "Soft Neon");
    assert_eq!(b.current_track().title, "Night Drive");

    a.next();
    assert_eq!(a.current(), 0);
}

#[test]
fn test_music_view_json_shape() {
    let appearance = Appearance::default();
    let ctx = RenderContext { appearance: &appearance, notes: "" };
    let json = serde_json::to_value(AppInstance::new(AppKind::Music).render(&ctx)).unwrap();

    assert_eq!(json["nowPlaying"]["title"], "Night Drive");
    assert_eq!(json["tracks"][0]["active"], true);
    assert_eq!(json["tracks"][1]["artist"], "Aero");
}

#[test]
fn test_notes_view_reads_shared_buffer() {
    let appearance = Appearance::default();
    let ctx = RenderContext { appearance: &appearance, notes: "buy milk" };
    let json = serde_json::to_value(AppInstance::new(AppKind::Notes).render(&ctx)).unwrap();
    assert_eq!(json["value"], "buy milk");
}

#[test]
fn test_settings_view_follows_theme() {
    let mut appearance = Appearance::default();
    appearance.toggle_theme();
    assert_eq!(appearance.theme, Theme::Light);

    let ctx = RenderContext { appearance: &appearance, notes: "" };
    let json = serde_json::to_value(AppInstance::new(AppKind::Settings).render(&ctx)).unwrap();
    assert_eq!(json["theme"], "light");
    assert_eq!(json["wallpapers"][0]["selected"], true);
}

#[test]
fn test_catalog_search() {
    let titles: Vec<&str> = catalog::search("about").map(|e| e.title).collect();
    assert_eq!(titles, ["About GlassOS"]);
    assert_eq!(catalog::search("zzz").count(), 0);
}
