//! Browser tests for the wasm controller
//!
//! Run with `wasm-pack test --headless --chrome -- --features wasm`.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use glass_desktop::DesktopController;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn controller_launch_and_frame() {
    let mut controller = DesktopController::new();
    let id = controller.launch_app("notes").expect("notes is a catalog app");
    assert!(controller.launch_app("terminal").is_none());

    controller.set_notes("hi");
    let frame: serde_json::Value = serde_json::from_str(&controller.frame_json()).unwrap();
    assert_eq!(frame["windows"][0]["id"], id);
    assert_eq!(frame["windows"][0]["content"]["value"], "hi");
}

#[wasm_bindgen_test]
fn controller_theme_updates_root_class() {
    let mut controller = DesktopController::new();
    assert_eq!(controller.toggle_theme(), "light");

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .unwrap();
    assert!(!root.class_list().contains("dark"));

    assert!(controller.set_theme("dark"));
    assert!(root.class_list().contains("dark"));
    assert!(!controller.set_theme("sepia"));
}

#[wasm_bindgen_test]
fn controller_pointer_json() {
    let mut controller = DesktopController::new();
    controller.launch_app("calculator");

    let result: serde_json::Value = serde_json::from_str(&controller.pointer_down(5.0, 5.0)).unwrap();
    assert_eq!(result["type"], "unhandled");
}
