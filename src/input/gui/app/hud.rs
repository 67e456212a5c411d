//! The egui overlay: view readouts and controls that mirror the keyboard.

use crate::controllers::view::{ViewController, ViewEvent};
use crate::core::data::complex::Complex;
use crate::core::escape::escape_time;
use crate::core::hue::HueKind;

pub struct HudState {
    visible: bool,
    fragment_source: String,
}

impl HudState {
    pub fn new(visible: bool, fragment_source: String) -> Self {
        Self {
            visible,
            fragment_source,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Draws the panel and returns the edits the user made this frame.
    pub fn show(&self, ctx: &egui::Context, controller: &ViewController) -> Vec<ViewEvent> {
        let mut events = Vec::new();

        if !self.visible {
            return events;
        }

        let view = controller.view();
        let limits = view.limits();

        egui::Window::new("Mandel-GL")
            .default_pos([10.0, 10.0])
            .default_size([280.0, 240.0])
            .show(ctx, |ui| {
                ui.label(format!("Position: {}", format_complex(view.position)));
                ui.label(format!("Zoom: {}", format_zoom(view.zoom_factor())));
                let cursor = controller.cursor_gaussian();
                ui.label(format!("Cursor: {}", format_complex(cursor)));
                ui.label(format_escape(escape_time(cursor, view.iterations)));
                if controller.is_panning() {
                    ui.label("Panning");
                }
                ui.separator();

                let mut iterations = view.iterations;
                ui.horizontal(|ui| {
                    ui.label("Iterations:");
                    ui.add(egui::Slider::new(
                        &mut iterations,
                        limits.min_iterations..=limits.max_iterations,
                    ));
                });
                if iterations != view.iterations {
                    events.push(ViewEvent::SetIterations(iterations));
                }

                let mut hue = controller.hue();
                ui.horizontal(|ui| {
                    ui.label("Hue:");
                    egui::ComboBox::from_id_source("mandel_gl_hue")
                        .selected_text(hue.display_name())
                        .show_ui(ui, |ui| {
                            for &kind in HueKind::ALL {
                                ui.selectable_value(&mut hue, kind, hue_label(kind));
                            }
                        });
                });
                if hue != controller.hue() {
                    events.push(ViewEvent::SelectHue(hue));
                }

                if ui.button("Reset view").clicked() {
                    events.push(ViewEvent::ResetView);
                }

                ui.separator();
                egui::CollapsingHeader::new("Fragment shader")
                    .default_open(false)
                    .show(ui, |ui| {
                        egui::ScrollArea::vertical()
                            .max_height(240.0)
                            .show(ui, |ui| {
                                ui.monospace(self.fragment_source.as_str());
                            });
                    });

                ui.small("Drag to pan, scroll to zoom, arrows for iterations, 1-4 for hues, H hides");
            });

        events
    }
}

fn format_complex(c: Complex) -> String {
    let sign = if c.imag < 0.0 { '-' } else { '+' };
    format!("{:.8} {} {:.8}i", c.real, sign, c.imag.abs())
}

fn format_zoom(factor: f64) -> String {
    if factor >= 1.0e4 {
        format!("{factor:.3e}x")
    } else {
        format!("{factor:.2}x")
    }
}

fn format_escape(escape: Option<u32>) -> String {
    match escape {
        Some(iterations) => format!("Escapes after {iterations} iterations"),
        None => "Inside the set".to_string(),
    }
}

fn hue_label(kind: HueKind) -> String {
    format!("{} ({})", kind.display_name(), kind.index() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_visibility() {
        let mut hud = HudState::new(true, String::new());

        hud.toggle();
        assert!(!hud.is_visible());
        hud.toggle();
        assert!(hud.is_visible());
    }

    #[test]
    fn complex_readout_keeps_sign_on_the_imaginary_part() {
        assert_eq!(
            format_complex(Complex {
                real: -0.75,
                imag: -0.1
            }),
            "-0.75000000 - 0.10000000i"
        );
        assert_eq!(
            format_complex(Complex {
                real: 0.25,
                imag: 0.0
            }),
            "0.25000000 + 0.00000000i"
        );
    }

    #[test]
    fn large_zoom_switches_to_scientific_notation() {
        assert_eq!(format_zoom(1.0), "1.00x");
        assert_eq!(format_zoom(1.0e6), "1.000e6x");
    }

    #[test]
    fn escape_readout() {
        assert_eq!(format_escape(Some(3)), "Escapes after 3 iterations");
        assert_eq!(format_escape(None), "Inside the set");
    }

    #[test]
    fn hue_labels_name_their_key() {
        assert_eq!(hue_label(HueKind::Fire), "Fire (1)");
        assert_eq!(hue_label(HueKind::Psychedelic), "Psychedelic (4)");
    }

    #[test]
    fn panning_shows_in_the_panel_without_emitting_edits() {
        let hud = HudState::new(true, String::new());
        let mut controller = ViewController::new(
            crate::core::view::ViewLimits::default(),
            crate::core::data::screen::ScreenSize::new(800.0, 600.0),
        );
        controller.handle(ViewEvent::PanButton(true));
        let ctx = egui::Context::default();
        let mut events = vec![ViewEvent::ResetView];

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            events = hud.show(ctx, &controller);
        });

        assert!(controller.is_panning());
        assert!(events.is_empty());
    }

    #[test]
    fn hidden_hud_emits_nothing() {
        let hud = HudState::new(false, String::new());
        let controller = ViewController::new(
            crate::core::view::ViewLimits::default(),
            crate::core::data::screen::ScreenSize::new(800.0, 600.0),
        );
        let ctx = egui::Context::default();
        let mut events = Vec::new();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            events = hud.show(ctx, &controller);
        });

        assert!(events.is_empty());
    }
}
