use tracing::trace;

use crate::controllers::view::events::ViewEvent;
use crate::controllers::view::frame::FrameRequest;
use crate::core::data::complex::Complex;
use crate::core::data::screen::{ScreenPoint, ScreenSize};
use crate::core::hue::HueKind;
use crate::core::view::{ViewLimits, ViewState};

/// Owns the view state and applies input to it.
#[derive(Debug, Clone)]
pub struct ViewController {
    view: ViewState,
    hue: HueKind,
    is_panning: bool,
    cursor: ScreenPoint,
    window: ScreenSize,
}

impl ViewController {
    #[must_use]
    pub fn new(limits: ViewLimits, window: ScreenSize) -> Self {
        Self {
            view: ViewState::new(limits),
            hue: HueKind::default(),
            is_panning: false,
            cursor: window.center(),
            window,
        }
    }

    /// Applies `event`; returns whether the rendered frame changed.
    pub fn handle(&mut self, event: ViewEvent) -> bool {
        let before = self.frame();

        match event {
            // Minimised windows report 0x0; keep the last real size.
            ViewEvent::Resized(size) if size.is_empty() => {}
            ViewEvent::Resized(size) => {
                self.window = size;
            }
            ViewEvent::CursorMoved(point) => {
                if self.is_panning {
                    self.view.pan_by(point - self.cursor);
                }
                self.cursor = point;
            }
            ViewEvent::PanButton(pressed) => {
                self.is_panning = pressed;
            }
            ViewEvent::Scroll(lines) => {
                self.view.zoom_at(self.cursor, self.window, lines);
            }
            ViewEvent::IterationsUp => self.view.increase_iterations(),
            ViewEvent::IterationsDown => self.view.decrease_iterations(),
            ViewEvent::SetIterations(iterations) => self.view.set_iterations(iterations),
            ViewEvent::SelectHue(kind) => {
                self.hue = kind;
            }
            ViewEvent::ResetView => self.view.reset(),
        }

        let changed = self.frame() != before;
        if changed {
            trace!(?event, position = ?self.view.position, scale = self.view.scale, "View changed");
        }
        changed
    }

    #[must_use]
    pub fn frame(&self) -> FrameRequest {
        FrameRequest {
            position: self.view.position,
            half_frame: self.view.half_frame(self.window),
            iterations: self.view.iterations,
            hue: self.hue,
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn hue(&self) -> HueKind {
        self.hue
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.is_panning
    }

    #[must_use]
    pub fn window(&self) -> ScreenSize {
        self.window
    }

    /// Gaussian point under the last known cursor position.
    #[must_use]
    pub fn cursor_gaussian(&self) -> Complex {
        self.view.screen_to_gaussian(self.cursor, self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ViewController {
        ViewController::new(ViewLimits::default(), ScreenSize::new(800.0, 600.0))
    }

    #[test]
    fn cursor_motion_without_button_only_tracks_cursor() {
        let mut controller = controller();

        let changed = controller.handle(ViewEvent::CursorMoved(ScreenPoint { x: 10.0, y: 10.0 }));

        assert!(!changed);
        assert_eq!(controller.view().position, Complex::ZERO);
    }

    #[test]
    fn drag_pans_by_cursor_delta() {
        let mut controller = controller();
        controller.handle(ViewEvent::CursorMoved(ScreenPoint { x: 100.0, y: 100.0 }));
        controller.handle(ViewEvent::PanButton(true));

        let changed = controller.handle(ViewEvent::CursorMoved(ScreenPoint { x: 175.0, y: 25.0 }));

        assert!(changed);
        assert!(controller.is_panning());
        assert!((controller.view().position.real - (-1.0)).abs() < 1e-12);
        assert!((controller.view().position.imag - (-1.0)).abs() < 1e-12);

        controller.handle(ViewEvent::PanButton(false));
        let changed = controller.handle(ViewEvent::CursorMoved(ScreenPoint { x: 0.0, y: 0.0 }));

        assert!(!changed);
        assert!(!controller.is_panning());
    }

    #[test]
    fn scroll_zooms_around_last_cursor() {
        let mut controller = controller();
        let cursor = ScreenPoint { x: 600.0, y: 150.0 };
        controller.handle(ViewEvent::CursorMoved(cursor));
        let anchor = controller.cursor_gaussian();

        let changed = controller.handle(ViewEvent::Scroll(4.0));

        assert!(changed);
        assert_eq!(controller.view().scale, 150.0);
        let after = controller.cursor_gaussian();
        assert!((anchor.real - after.real).abs() < 1e-12);
        assert!((anchor.imag - after.imag).abs() < 1e-12);
    }

    #[test]
    fn scroll_out_at_minimum_scale_changes_nothing() {
        let mut controller = controller();

        assert!(!controller.handle(ViewEvent::Scroll(-1.0)));
    }

    #[test]
    fn iteration_keys_report_change_until_clamped() {
        let mut controller = controller();

        assert!(controller.handle(ViewEvent::IterationsUp));
        assert_eq!(controller.frame().iterations, 510);

        controller.handle(ViewEvent::SetIterations(1000));
        assert!(!controller.handle(ViewEvent::IterationsUp));

        controller.handle(ViewEvent::SetIterations(2));
        assert!(!controller.handle(ViewEvent::IterationsDown));
    }

    #[test]
    fn selecting_hue_changes_frame_once() {
        let mut controller = controller();

        assert!(controller.handle(ViewEvent::SelectHue(HueKind::Ash)));
        assert_eq!(controller.frame().hue, HueKind::Ash);
        assert!(!controller.handle(ViewEvent::SelectHue(HueKind::Ash)));
    }

    #[test]
    fn resize_updates_half_frame() {
        let mut controller = controller();

        let changed = controller.handle(ViewEvent::Resized(ScreenSize::new(150.0, 75.0)));

        assert!(changed);
        assert_eq!(controller.frame().half_frame, Complex { real: 1.0, imag: 0.5 });
    }

    #[test]
    fn minimised_window_keeps_last_size() {
        let mut controller = controller();

        assert!(!controller.handle(ViewEvent::Resized(ScreenSize::new(0.0, 0.0))));
        assert_eq!(controller.window(), ScreenSize::new(800.0, 600.0));
    }

    #[test]
    fn reset_keeps_hue_but_restores_view() {
        let mut controller = controller();
        controller.handle(ViewEvent::SelectHue(HueKind::Ice));
        controller.handle(ViewEvent::Scroll(8.0));
        controller.handle(ViewEvent::IterationsDown);

        controller.handle(ViewEvent::ResetView);

        assert_eq!(controller.view(), &ViewState::default());
        assert_eq!(controller.hue(), HueKind::Ice);
    }
}
