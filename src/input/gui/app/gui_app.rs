use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::debug;
use winit::{
    event::WindowEvent,
    event_loop::EventLoop,
    window::Window,
};

use crate::controllers::view::{ViewController, ViewEvent};
use crate::error::Result;
use crate::input::gui::app::hud::HudState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::view_input::ViewInputState;

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    pub controller: ViewController,
    pub input: ViewInputState,
    pub hud: HudState,
    pub redraw_pending: bool,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: ViewController,
        hud: HudState,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            controller,
            input: ViewInputState::new(scale_factor),
            hud,
            redraw_pending: true,
            egui_ctx,
            egui_state,
        }
    }

    /// Feeds `event` to the view and marks a redraw when the frame changed.
    pub fn apply(&mut self, event: ViewEvent) {
        if self.controller.handle(event) {
            self.redraw_pending = true;
        }
    }

    pub fn toggle_hud(&mut self) {
        self.hud.toggle();
        debug!(visible = self.hud.is_visible(), "Toggled HUD");
        self.redraw_pending = true;
    }

    pub fn resize(&mut self, window: &Window) -> Result<()> {
        let size = window.inner_size();
        self.presenter.resize(size.width, size.height)?;

        self.apply(self.input.handle_resized(size));
        self.redraw_pending = true;

        Ok(())
    }

    pub fn set_scale_factor(&mut self, window: &Window, scale_factor: f64) -> Result<()> {
        self.input.set_scale_factor(scale_factor);
        self.egui_ctx.set_pixels_per_point(scale_factor as f32);
        self.resize(window)
    }

    /// Runs the HUD, applies its edits and draws the frame.
    pub fn redraw(&mut self, window: &Window) -> Result<()> {
        self.redraw_pending = false;

        let raw_input = self.egui_state.take_egui_input(window);
        let mut hud_events = Vec::new();
        let mut egui_output = self.egui_ctx.run(raw_input, |ctx| {
            hud_events = self.hud.show(ctx, &self.controller);
        });

        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state.handle_platform_output(window, platform_output);

        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        // The fractal picks these up below; the HUD readouts lag one frame.
        for event in hud_events {
            self.apply(event);
        }

        let frame = self.controller.frame();
        self.presenter.render(&frame, egui_output, &self.egui_ctx)
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
