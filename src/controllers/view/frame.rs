use crate::core::data::complex::Complex;
use crate::core::hue::HueKind;

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRequest {
    pub position: Complex,
    pub half_frame: Complex,
    pub iterations: u32,
    pub hue: HueKind,
}
