use bytemuck::{Pod, Zeroable};

use crate::controllers::view::FrameRequest;

/// Mirror of the `View` uniform struct in both shader stages.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ViewUniforms {
    pub gaussian_position: [f32; 2],
    pub gaussian_half_frame: [f32; 2],
    pub iterations: u32,
    _padding: [u32; 3],
}

impl From<&FrameRequest> for ViewUniforms {
    fn from(frame: &FrameRequest) -> Self {
        Self {
            gaussian_position: [frame.position.real as f32, frame.position.imag as f32],
            gaussian_half_frame: [frame.half_frame.real as f32, frame.half_frame.imag as f32],
            iterations: frame.iterations,
            _padding: [0; 3],
        }
    }
}
