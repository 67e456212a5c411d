use bytemuck::{Pod, Zeroable};
use pixels::wgpu;

pub const POSITION_ATTRIBUTE: u32 = 0;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub x: f32,
    pub y: f32,
}

/// Corners of a full-screen quad in triangle-strip order.
pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { x: -1.0, y: -1.0 },
    QuadVertex { x: 1.0, y: -1.0 },
    QuadVertex { x: -1.0, y: 1.0 },
    QuadVertex { x: 1.0, y: 1.0 },
];

const ATTRIBUTES: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    format: wgpu::VertexFormat::Float32x2,
    offset: 0,
    shader_location: POSITION_ATTRIBUTE,
}];

impl QuadVertex {
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}
