//! Windowed front end.
//!
//! winit owns the window and event loop, the pixels presenter draws the
//! fractal, and egui provides the HUD.

pub mod app;

pub mod commands {
    pub mod run_gui;
}

pub use commands::run_gui::RunGuiCommand;
