//! Integration tests for DesktopShell
//!
//! These tests verify the full desktop workflow including:
//! - Window lifecycle (launch, move, minimize, maximize, close)
//! - Z-order and focus
//! - Spawn cascade
//! - Taskbar, start menu and desktop icons
//! - App routing and the rendered frame

use glass_desktop::{
    AppKind, DesktopConfig, DesktopShell, FixedTime, InputResult, Theme, TimeOfDay, Vec2,
    WindowId, WindowState, ZOrder,
};

fn shell() -> DesktopShell {
    DesktopShell::new().with_time_source(Box::new(FixedTime(TimeOfDay { hour: 14, minute: 5 })))
}

fn open_ids(shell: &DesktopShell) -> Vec<WindowId> {
    shell.windows().list_open().map(|r| r.id).collect()
}

// =============================================================================
// Window Lifecycle Tests
// =============================================================================

#[test]
fn test_window_lifecycle_full() {
    let mut shell = shell();

    let id = shell.launch(AppKind::Notes);
    let record = shell.windows().get(id).unwrap();
    assert_eq!(record.title, "Notes");
    assert_eq!(record.state(), WindowState::Normal);

    shell.move_window(id, 200.0, 150.0);
    assert_eq!(shell.windows().get(id).unwrap().position, Vec2::new(200.0, 150.0));

    shell.toggle_minimize(id);
    assert_eq!(shell.windows().get(id).unwrap().state(), WindowState::Minimized);
    shell.toggle_minimize(id);

    shell.toggle_maximize(id);
    assert_eq!(shell.windows().get(id).unwrap().state(), WindowState::Maximized);
    shell.toggle_maximize(id);
    assert_eq!(shell.windows().get(id).unwrap().state(), WindowState::Normal);

    shell.close_window(id);
    assert_eq!(shell.windows().get(id).unwrap().state(), WindowState::Closed);
    assert!(open_ids(&shell).is_empty());
}

#[test]
fn test_launch_ids_are_unique() {
    let mut shell = shell();
    let mut ids = Vec::new();
    for kind in AppKind::all().chain(AppKind::all()) {
        ids.push(shell.launch(kind));
    }
    shell.compact();
    ids.push(shell.launch(AppKind::Notes));

    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}

#[test]
fn test_spawn_cascade_sequence() {
    let mut shell = shell();
    let positions: Vec<(f32, f32)> = (0..5)
        .map(|_| {
            let id = shell.launch(AppKind::About);
            let p = shell.windows().get(id).unwrap().position;
            (p.x, p.y)
        })
        .collect();

    assert_eq!(
        positions,
        [
            (232.0, 224.0),
            (264.0, 248.0),
            (296.0, 272.0),
            (328.0, 296.0),
            (360.0, 120.0),
        ]
    );
}

#[test]
fn test_closed_window_never_reappears() {
    let mut shell = shell();
    let a = shell.launch(AppKind::Notes);
    let b = shell.launch(AppKind::Music);
    shell.close_window(a);

    shell.toggle_minimize(a);
    shell.toggle_maximize(a);
    shell.move_window(a, 10.0, 10.0);
    shell.focus_window(a);
    shell.close_window(a);

    assert_eq!(open_ids(&shell), [b]);
    assert!(shell.frame().windows.iter().all(|w| w.id != a));
}

#[test]
fn test_unknown_ids_are_noops() {
    let mut shell = shell();
    let id = shell.launch(AppKind::Gallery);
    let before = shell.frame();

    shell.close_window(777);
    shell.toggle_minimize(777);
    shell.toggle_maximize(777);
    shell.move_window(777, 0.0, 0.0);
    shell.focus_window(777);

    assert_eq!(shell.frame(), before);
    assert_eq!(open_ids(&shell), [id]);
}

// =============================================================================
// Z-Order Tests
// =============================================================================

#[test]
fn test_bring_to_front_idempotent() {
    let mut z = ZOrder::new();
    z.bring_to_front(1);
    z.bring_to_front(2);
    z.bring_to_front(1);
    let once = z.clone();
    z.bring_to_front(1);
    assert_eq!(z, once);
}

#[test]
fn test_focus_order_and_z_index() {
    let mut shell = shell();
    let a = shell.launch(AppKind::Notes);
    let b = shell.launch(AppKind::Music);
    let c = shell.launch(AppKind::Gallery);

    shell.focus_window(a);
    assert_eq!(shell.z_order().ids(), &[b, c, a]);
    assert_eq!(shell.focused_window(), Some(a));

    let frame = shell.frame();
    let z: Vec<(WindowId, u32)> = frame.windows.iter().map(|w| (w.id, w.z_index)).collect();
    assert_eq!(z, [(a, 102), (b, 100), (c, 101)]);
    assert!(frame.windows.iter().find(|w| w.id == a).unwrap().focused);
}

#[test]
fn test_pointer_interaction_raises_and_drags() {
    let mut shell = shell();
    let a = shell.launch(AppKind::Notes); // (232, 224)
    let _b = shell.launch(AppKind::Music); // (264, 248)

    // Title bar of `a`, left of where `b` starts
    assert_eq!(shell.pointer_down(240.0, 234.0), InputResult::Handled);
    assert_eq!(shell.focused_window(), Some(a));

    shell.pointer_move(140.0, 134.0);
    shell.pointer_up();
    assert_eq!(shell.windows().get(a).unwrap().position, Vec2::new(132.0, 124.0));
    assert!(!shell.input().is_dragging());
}

// =============================================================================
// Taskbar / Start Menu Tests
// =============================================================================

#[test]
fn test_taskbar_toggle_cycle() {
    let mut shell = shell();
    let id = shell.taskbar_click(AppKind::Calculator).window_id();

    shell.taskbar_click(AppKind::Calculator);
    assert!(shell.frame().windows.is_empty());
    assert!(shell.frame().taskbar.pinned[3].open);

    shell.taskbar_click(AppKind::Calculator);
    assert_eq!(shell.frame().windows[0].id, id);
}

#[test]
fn test_start_menu_flow() {
    let mut shell = shell();
    shell.toggle_start_menu();
    shell.set_start_query("set");
    assert_eq!(shell.frame().start_menu.apps.len(), 1);

    let id = shell.start_menu_launch(AppKind::Settings);
    let frame = shell.frame();
    assert!(!frame.start_menu.open);
    assert_eq!(frame.start_menu.query, "");
    assert_eq!(frame.windows[0].id, id);
}

#[test]
fn test_desktop_icons_order() {
    let shell = shell();
    let ids: Vec<AppKind> = shell.frame().desktop_icons.iter().map(|e| e.id).collect();
    assert_eq!(
        ids,
        [
            AppKind::Notes,
            AppKind::Gallery,
            AppKind::Music,
            AppKind::Calculator,
            AppKind::Settings,
            AppKind::About,
        ]
    );
}

#[test]
fn test_clock_refreshes_on_window_changes() {
    let mut shell = shell();
    assert_eq!(shell.frame().taskbar.clock, "14:05");

    shell.launch(AppKind::Notes);
    assert_eq!(shell.clock_label(), "14:05");
}

// =============================================================================
// Appearance and App Tests
// =============================================================================

#[test]
fn test_theme_toggle_flip() {
    let mut shell = shell();
    assert_eq!(shell.appearance().theme, Theme::Dark);
    assert_eq!(shell.frame().root_class, Some("dark"));

    shell.toggle_theme();
    assert_eq!(shell.appearance().theme, Theme::Light);
    assert_eq!(shell.frame().root_class, None);

    shell.toggle_theme();
    assert_eq!(shell.appearance().theme, Theme::Dark);
}

#[test]
fn test_calculator_examples() {
    let mut shell = shell();
    let id = shell.launch(AppKind::Calculator);

    let cases = [("2+2", "4"), ("2+", "2+"), ("(1+2)*3", "9")];
    for (input, expected) in cases {
        shell.calculator_set(id, input);
        shell.calculator_key_by_name(id, "=").unwrap();
        let json = serde_json::to_value(&shell.frame().windows[0].content).unwrap();
        assert_eq!(json["expression"], expected, "input {}", input);
    }
}

#[test]
fn test_music_wraparound() {
    let mut shell = shell();
    let id = shell.launch(AppKind::Music);

    shell.music_prev(id);
    let json = serde_json::to_value(&shell.frame().windows[0].content).unwrap();
    assert_eq!(json["current"], 2);

    shell.music_next(id);
    let json = serde_json::to_value(&shell.frame().windows[0].content).unwrap();
    assert_eq!(json["current"], 0);
}

#[test]
fn test_settings_changes_show_in_frame() {
    let mut shell = shell();
    shell.launch(AppKind::Settings);
    shell.set_wallpaper("Glass Wave").unwrap();
    shell.set_glass(24);

    let frame = shell.frame();
    assert_eq!(frame.wallpaper.name, "Glass Wave");
    assert_eq!(frame.blur_class, "backdrop-blur-24");
    let json = serde_json::to_value(&frame.windows[0].content).unwrap();
    assert_eq!(json["glass"], 24);
    assert_eq!(json["wallpapers"][1]["selected"], true);
}

#[test]
fn test_compact_after_many_closes() {
    let mut shell = shell();
    let ids: Vec<WindowId> = (0..10).map(|_| shell.launch(AppKind::About)).collect();
    for id in &ids[..9] {
        shell.close_window(*id);
    }

    assert_eq!(shell.windows().len(), 10);
    assert_eq!(shell.compact(), 9);
    assert_eq!(shell.windows().len(), 1);
    assert_eq!(shell.z_order().ids(), &[ids[9]]);
}

#[test]
fn test_custom_config() {
    let config = DesktopConfig::from_json(
        r#"{"baseZIndex":10,"cascade":{"origin":{"x":0,"y":0},"initialOffset":{"x":0,"y":0}}}"#,
    )
    .unwrap();
    let mut shell = DesktopShell::with_config(config).unwrap();
    let id = shell.launch(AppKind::Notes);

    assert_eq!(shell.windows().get(id).unwrap().position, Vec2::new(32.0, 24.0));
    assert_eq!(shell.frame().windows[0].z_index, 10);
}
