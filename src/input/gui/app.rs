//! Main GUI application loop.

pub mod gui_app;
pub mod hud;
pub mod view_input;

pub mod ports {
    pub mod presenter;
}

use tracing::{error, info};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::Window,
};

use crate::error::Result;
use gui_app::GuiApp;
use ports::presenter::GuiPresenterPort;
use view_input::InputAction;

/// Runs the event loop until the window closes or a frame fails to render.
pub fn run<T: GuiPresenterPort>(
    window: &'static Window,
    event_loop: EventLoop<()>,
    mut app: GuiApp<T>,
) -> Result<()> {
    let mut outcome: Result<()> = Ok(());

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            // Forward event to egui first
            let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);
            if egui_repaint && app.hud.is_visible() {
                app.redraw_pending = true;
            }

            let step = match event {
                WindowEvent::CloseRequested => {
                    info!("Window closed");
                    elwt.exit();
                    Ok(())
                }
                WindowEvent::RedrawRequested => app.redraw(window),
                WindowEvent::Resized(_) => app.resize(window),
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    app.set_scale_factor(window, *scale_factor)
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(key_code),
                            state,
                            repeat,
                            ..
                        },
                    ..
                } if !egui_consumed => {
                    match app.input.handle_key_event(*key_code, *state, *repeat) {
                        Some(InputAction::View(view_event)) => app.apply(view_event),
                        Some(InputAction::ToggleHud) => app.toggle_hud(),
                        Some(InputAction::Close) => {
                            info!("Escape pressed, closing");
                            elwt.exit();
                        }
                        None => {}
                    }
                    Ok(())
                }
                // Releases always reach the view so a drag ending over the HUD stops panning.
                WindowEvent::MouseInput { state, button, .. }
                    if !egui_consumed || *state == ElementState::Released =>
                {
                    if let Some(InputAction::View(view_event)) =
                        app.input.handle_mouse_button(*button, *state)
                    {
                        app.apply(view_event);
                    }
                    Ok(())
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let view_event = app.input.handle_cursor_moved(*position);
                    app.apply(view_event);
                    // cursor readout
                    if app.hud.is_visible() {
                        app.redraw_pending = true;
                    }
                    Ok(())
                }
                WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                    let view_event = app.input.handle_scroll(*delta);
                    app.apply(view_event);
                    Ok(())
                }
                _ => Ok(()),
            };

            if let Err(err) = step {
                error!(error = %err, "Stopping event loop");
                outcome = Err(err);
                elwt.exit();
            }
        }
        Event::AboutToWait => {
            // Only request redraw if state changed
            if app.redraw_pending {
                window.request_redraw();
            }
        }
        _ => {}
    })?;

    outcome
}
