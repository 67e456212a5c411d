//! Interactive Mandelbrot set viewer rendered on the GPU.

pub mod config;
pub mod controllers;
pub mod core;
pub mod error;
#[cfg(feature = "gui")]
pub mod input;
pub mod logging;
#[cfg(feature = "gui")]
pub mod presenters;

pub use config::{ViewerConfig, load_config};
pub use error::{Result, ViewerError};

#[cfg(feature = "gui")]
pub use input::gui::RunGuiCommand;
