//! Input handling for pointer events and drag operations

use crate::input::InputResult;
use crate::math::Vec2;
use crate::window::{WindowFrame, WindowId, WindowRegion};
use super::DesktopShell;

impl DesktopShell {
    /// Topmost visible window and region under `pos`
    pub fn region_at(&self, pos: Vec2) -> Option<(WindowId, WindowRegion, WindowFrame)> {
        self.z_order.ids().iter().rev().find_map(|&id| {
            let frame = self.window_frame(id)?;
            frame.hit_test(pos).map(|region| (id, region, frame))
        })
    }

    /// CSS cursor for the pointer at `(x, y)`
    pub fn cursor_at(&self, x: f32, y: f32) -> &'static str {
        match self.input.drag_state() {
            Some(_) => "grabbing",
            None => self
                .region_at(Vec2::new(x, y))
                .map(|(_, region, _)| region.cursor())
                .unwrap_or("default"),
        }
    }

    /// Handle pointer down
    ///
    /// Any press on a window raises it. Controls then apply their registry
    /// operation, the title bar starts a move, and content presses are
    /// forwarded with content-local coordinates.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        let pos = Vec2::new(x, y);
        let (window_id, region, frame) = match self.region_at(pos) {
            Some(hit) => hit,
            None => return InputResult::Unhandled,
        };

        self.focus_window(window_id);

        match region {
            WindowRegion::CloseButton => self.close_window(window_id),
            WindowRegion::MinimizeButton => self.toggle_minimize(window_id),
            WindowRegion::MaximizeButton => self.toggle_maximize(window_id),
            WindowRegion::TitleBar => {
                self.input.start_window_move(window_id, pos - frame.rect().position());
                return InputResult::Handled;
            }
            WindowRegion::Content => {
                let local = pos - frame.content_rect().position();
                return InputResult::Forward {
                    window_id,
                    local_x: local.x,
                    local_y: local.y,
                };
            }
        }

        InputResult::Control { window_id, region }
    }

    /// Handle pointer move
    pub fn pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let drag = match self.input.drag_state() {
            Some(state) => *state,
            None => return InputResult::Unhandled,
        };

        let position = drag.position_for(Vec2::new(x, y));
        self.move_window(drag.window_id, position.x, position.y);
        InputResult::Handled
    }

    /// Handle pointer up
    pub fn pointer_up(&mut self) -> InputResult {
        if self.input.is_dragging() {
            self.input.end_drag();
            return InputResult::Handled;
        }
        InputResult::Unhandled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::FRAME_STYLE;
    use glass_apps::AppKind;

    fn center(rect: crate::math::Rect) -> (f32, f32) {
        (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
    }

    #[test]
    fn test_pointer_down_on_empty_area_unhandled() {
        let mut shell = DesktopShell::new();
        shell.launch(AppKind::Notes);

        let result = shell.pointer_down(5.0, 5.0);
        assert_eq!(result, InputResult::Unhandled);
        assert!(!shell.input().is_dragging());
    }

    #[test]
    fn test_title_bar_drag_moves_window() {
        let mut shell = DesktopShell::new();
        let id = shell.launch(AppKind::Notes);
        // Spawned at (232, 224)
        let result = shell.pointer_down(252.0, 234.0);
        assert_eq!(result, InputResult::Handled);
        assert!(shell.input().is_dragging());

        shell.pointer_move(352.0, 134.0);
        let pos = shell.windows().get(id).unwrap().position;
        assert!((pos.x - 332.0).abs() < 0.001);
        assert!((pos.y - 124.0).abs() < 0.001);

        assert_eq!(shell.pointer_up(), InputResult::Handled);
        assert!(!shell.input().is_dragging());
        assert_eq!(shell.pointer_move(0.0, 0.0), InputResult::Unhandled);
    }

    #[test]
    fn test_drag_has_no_containment() {
        let mut shell = DesktopShell::new();
        let id = shell.launch(AppKind::Notes);
        shell.pointer_down(242.0, 234.0);
        shell.pointer_move(-500.0, -500.0);

        let pos = shell.windows().get(id).unwrap().position;
        assert!(pos.x < 0.0 && pos.y < 0.0);
    }

    #[test]
    fn test_pointer_down_raises_topmost_only() {
        let mut shell = DesktopShell::new();
        let a = shell.launch(AppKind::Notes); // (232, 224)
        let b = shell.launch(AppKind::Music); // (264, 248), overlaps a

        // Inside both frames: the top one (b) wins
        shell.pointer_down(400.0, 400.0);
        assert_eq!(shell.z_order().focused_id(), Some(b));

        // Only inside a
        shell.pointer_down(240.0, 300.0);
        assert_eq!(shell.z_order().focused_id(), Some(a));
    }

    #[test]
    fn test_content_press_is_forwarded() {
        let mut shell = DesktopShell::new();
        let id = shell.launch(AppKind::Calculator);

        let result = shell.pointer_down(242.0, 224.0 + FRAME_STYLE.title_bar_height + 5.0);
        match result {
            InputResult::Forward { window_id, local_x, local_y } => {
                assert_eq!(window_id, id);
                assert!((local_x - 10.0).abs() < 0.001);
                assert!((local_y - 5.0).abs() < 0.001);
            }
            other => panic!("Expected forward, got {:?}", other),
        }
        assert!(!shell.input().is_dragging());
    }

    #[test]
    fn test_control_buttons() {
        let mut shell = DesktopShell::new();
        let id = shell.launch(AppKind::Notes);
        let frame = shell.window_frame(id).unwrap();

        let (x, y) = center(frame.maximize_button_rect());
        let result = shell.pointer_down(x, y);
        assert_eq!(result, InputResult::Control { window_id: id, region: WindowRegion::MaximizeButton });
        assert!(shell.windows().get(id).unwrap().maximized);

        let frame = shell.window_frame(id).unwrap();
        let (x, y) = center(frame.minimize_button_rect());
        shell.pointer_down(x, y);
        assert!(shell.windows().get(id).unwrap().minimized);
        assert!(shell.window_frame(id).is_none());

        shell.toggle_minimize(id);
        let frame = shell.window_frame(id).unwrap();
        let (x, y) = center(frame.close_button_rect());
        shell.pointer_down(x, y);
        assert!(!shell.windows().is_open(id));
    }

    #[test]
    fn test_minimized_windows_are_not_hit() {
        let mut shell = DesktopShell::new();
        let id = shell.launch(AppKind::Notes);
        shell.toggle_minimize(id);

        assert_eq!(shell.pointer_down(300.0, 400.0), InputResult::Unhandled);
    }

    #[test]
    fn test_cursor() {
        let mut shell = DesktopShell::new();
        shell.launch(AppKind::Notes);

        assert_eq!(shell.cursor_at(5.0, 5.0), "default");
        assert_eq!(shell.cursor_at(252.0, 234.0), "grab");
        shell.pointer_down(252.0, 234.0);
        assert_eq!(shell.cursor_at(252.0, 234.0), "grabbing");
    }
}
