use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::controllers::view::ViewEvent;
use crate::core::data::screen::{ScreenPoint, ScreenSize};
use crate::core::hue::HueKind;

/// Logical pixels per wheel line for touchpads that report pixel deltas.
pub const PIXELS_PER_SCROLL_LINE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    View(ViewEvent),
    ToggleHud,
    Close,
}

/// Turns winit input into [`ViewEvent`]s, working in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewInputState {
    scale_factor: f64,
}

impl Default for ViewInputState {
    fn default() -> Self {
        Self { scale_factor: 1.0 }
    }
}

impl ViewInputState {
    pub fn new(scale_factor: f64) -> Self {
        Self { scale_factor }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Keys act on press only. Repeats step the iteration count but never
    /// toggle the HUD or close the window.
    pub fn handle_key_event(
        &self,
        key_code: KeyCode,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        let action = match key_code {
            KeyCode::ArrowUp => InputAction::View(ViewEvent::IterationsUp),
            KeyCode::ArrowDown => InputAction::View(ViewEvent::IterationsDown),
            _ if repeat => return None,
            KeyCode::Digit1 => select_hue(1)?,
            KeyCode::Digit2 => select_hue(2)?,
            KeyCode::Digit3 => select_hue(3)?,
            KeyCode::Digit4 => select_hue(4)?,
            KeyCode::KeyR => InputAction::View(ViewEvent::ResetView),
            KeyCode::KeyH => InputAction::ToggleHud,
            KeyCode::Escape => InputAction::Close,
            _ => return None,
        };

        Some(action)
    }

    pub fn handle_mouse_button(&self, button: MouseButton, state: ElementState) -> Option<InputAction> {
        match button {
            MouseButton::Left => Some(InputAction::View(ViewEvent::PanButton(
                state == ElementState::Pressed,
            ))),
            _ => None,
        }
    }

    pub fn handle_cursor_moved(&self, position: PhysicalPosition<f64>) -> ViewEvent {
        let logical = position.to_logical::<f64>(self.scale_factor);

        ViewEvent::CursorMoved(ScreenPoint {
            x: logical.x,
            y: logical.y,
        })
    }

    pub fn handle_scroll(&self, delta: MouseScrollDelta) -> ViewEvent {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => {
                position.to_logical::<f64>(self.scale_factor).y / PIXELS_PER_SCROLL_LINE
            }
        };

        ViewEvent::Scroll(lines)
    }

    pub fn handle_resized(&self, size: PhysicalSize<u32>) -> ViewEvent {
        let logical = size.to_logical::<f64>(self.scale_factor);

        ViewEvent::Resized(ScreenSize::new(logical.width, logical.height))
    }
}

fn select_hue(digit: u8) -> Option<InputAction> {
    HueKind::from_digit(digit).map(|kind| InputAction::View(ViewEvent::SelectHue(kind)))
}

#[cfg(test)]
mod tests {
    use super::{InputAction, ViewInputState};
    use crate::controllers::view::ViewEvent;
    use crate::core::data::screen::{ScreenPoint, ScreenSize};
    use crate::core::hue::HueKind;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::{ElementState, MouseButton, MouseScrollDelta};
    use winit::keyboard::KeyCode;

    #[test]
    fn arrows_step_iterations_including_repeats() {
        let input = ViewInputState::default();

        assert_eq!(
            input.handle_key_event(KeyCode::ArrowUp, ElementState::Pressed, false),
            Some(InputAction::View(ViewEvent::IterationsUp))
        );
        assert_eq!(
            input.handle_key_event(KeyCode::ArrowDown, ElementState::Pressed, true),
            Some(InputAction::View(ViewEvent::IterationsDown))
        );
    }

    #[test]
    fn releases_are_ignored() {
        let input = ViewInputState::default();

        assert_eq!(
            input.handle_key_event(KeyCode::ArrowUp, ElementState::Released, false),
            None
        );
        assert_eq!(
            input.handle_key_event(KeyCode::Digit2, ElementState::Released, false),
            None
        );
    }

    #[test]
    fn digits_select_hues_in_order() {
        let input = ViewInputState::default();
        let keys = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4];

        for (key, &kind) in keys.into_iter().zip(HueKind::ALL) {
            assert_eq!(
                input.handle_key_event(key, ElementState::Pressed, false),
                Some(InputAction::View(ViewEvent::SelectHue(kind)))
            );
        }

        assert_eq!(
            input.handle_key_event(KeyCode::Digit5, ElementState::Pressed, false),
            None
        );
    }

    #[test]
    fn repeats_do_not_toggle_or_close() {
        let input = ViewInputState::default();

        assert_eq!(
            input.handle_key_event(KeyCode::KeyH, ElementState::Pressed, false),
            Some(InputAction::ToggleHud)
        );
        assert_eq!(
            input.handle_key_event(KeyCode::KeyH, ElementState::Pressed, true),
            None
        );
        assert_eq!(
            input.handle_key_event(KeyCode::Escape, ElementState::Pressed, true),
            None
        );
        assert_eq!(
            input.handle_key_event(KeyCode::Escape, ElementState::Pressed, false),
            Some(InputAction::Close)
        );
        assert_eq!(
            input.handle_key_event(KeyCode::KeyR, ElementState::Pressed, false),
            Some(InputAction::View(ViewEvent::ResetView))
        );
    }

    #[test]
    fn left_button_drives_panning() {
        let input = ViewInputState::default();

        assert_eq!(
            input.handle_mouse_button(MouseButton::Left, ElementState::Pressed),
            Some(InputAction::View(ViewEvent::PanButton(true)))
        );
        assert_eq!(
            input.handle_mouse_button(MouseButton::Left, ElementState::Released),
            Some(InputAction::View(ViewEvent::PanButton(false)))
        );
        assert_eq!(
            input.handle_mouse_button(MouseButton::Right, ElementState::Pressed),
            None
        );
    }

    #[test]
    fn cursor_and_size_are_converted_to_logical_pixels() {
        let input = ViewInputState::new(2.0);

        assert_eq!(
            input.handle_cursor_moved(PhysicalPosition::new(300.0, 100.0)),
            ViewEvent::CursorMoved(ScreenPoint { x: 150.0, y: 50.0 })
        );
        assert_eq!(
            input.handle_resized(PhysicalSize::new(1600, 1200)),
            ViewEvent::Resized(ScreenSize::new(800.0, 600.0))
        );
    }

    #[test]
    fn scroll_deltas_become_wheel_lines() {
        let mut input = ViewInputState::default();

        assert_eq!(
            input.handle_scroll(MouseScrollDelta::LineDelta(0.0, -2.0)),
            ViewEvent::Scroll(-2.0)
        );

        input.set_scale_factor(2.0);
        assert_eq!(
            input.handle_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 80.0))),
            ViewEvent::Scroll(2.0)
        );
    }
}
