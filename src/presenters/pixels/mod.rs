//! GPU presentation through `pixels`.
//!
//! `pixels` owns the surface, device and queue; the Mandelbrot pipeline draws a
//! full-screen quad into the surface texture and egui draws the HUD on top.

pub mod gpu_check;
pub mod pipeline;
pub mod presenter;
pub mod quad;
pub mod uniforms;
