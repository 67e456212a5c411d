//! Windowing-free domain types: the Gaussian plane, view navigation and hue textures.

pub mod data;
pub mod escape;
pub mod hue;
pub mod shader;
pub mod view;
