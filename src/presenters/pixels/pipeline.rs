//! GPU resources for drawing the Mandelbrot set on a full-screen quad.

use std::borrow::Cow;

use pixels::wgpu::{self, util::DeviceExt};
use tracing::{debug, info};

use crate::core::hue::{HueKind, HuePalette, HuePalettes};
use crate::core::shader::{FRAGMENT_ENTRY_POINT, ShaderSources, VERTEX_ENTRY_POINT};
use crate::error::{Result, ViewerError};
use crate::presenters::pixels::gpu_check::validated;
use crate::presenters::pixels::quad::{QUAD_VERTICES, QuadVertex};
use crate::presenters::pixels::uniforms::ViewUniforms;

const VIEW_BINDING: u32 = 0;
const HUE_TEXTURE_BINDING: u32 = 1;
const HUE_SAMPLER_BINDING: u32 = 2;

pub struct MandelbrotPipeline {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    /// One bind group per hue texture, indexed by [`HueKind::index`].
    hue_bind_groups: Vec<wgpu::BindGroup>,
    _hue_textures: Vec<wgpu::Texture>,
}

impl MandelbrotPipeline {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target_format: wgpu::TextureFormat,
        sources: &ShaderSources,
        palettes: &HuePalettes,
    ) -> Result<Self> {
        info!("Uploading vertex data ...");
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mandelbrot Quad"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Mandelbrot View Uniforms"),
            size: std::mem::size_of::<ViewUniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        info!("Compiling shaders ...");
        let vertex_module = compile_shader(device, "vertex", &sources.vertex)?;
        let fragment_module = compile_shader(device, "fragment", &sources.fragment)?;

        let bind_group_layout = create_bind_group_layout(device);
        let pipeline = link_pipeline(
            device,
            &bind_group_layout,
            &vertex_module,
            &fragment_module,
            target_format,
        )?;

        info!("Uploading textures ...");
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Hue Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        // Bytes must reach the screen unchanged, so match the target's encoding.
        let hue_format = if target_format.is_srgb() {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        };
        let max_width = device.limits().max_texture_dimension_2d;

        let mut hue_textures = Vec::with_capacity(HueKind::ALL.len());
        let mut hue_bind_groups = Vec::with_capacity(HueKind::ALL.len());

        for palette in palettes.iter() {
            let texture = upload_hue_texture(device, queue, palette, hue_format, max_width)?;
            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

            hue_bind_groups.push(device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(palette.kind().display_name()),
                layout: &bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: VIEW_BINDING,
                        resource: uniform_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: HUE_TEXTURE_BINDING,
                        resource: wgpu::BindingResource::TextureView(&view),
                    },
                    wgpu::BindGroupEntry {
                        binding: HUE_SAMPLER_BINDING,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            }));
            hue_textures.push(texture);
        }

        Ok(Self {
            pipeline,
            vertex_buffer,
            uniform_buffer,
            hue_bind_groups,
            _hue_textures: hue_textures,
        })
    }

    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &ViewUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Clears `target` to black and draws the quad with the `hue` texture bound.
    pub fn draw(&self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView, hue: HueKind) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("mandelbrot"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.hue_bind_groups[hue.index()], &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..QUAD_VERTICES.len() as u32, 0..1);
    }
}

fn compile_shader(
    device: &wgpu::Device,
    stage: &'static str,
    source: &str,
) -> Result<wgpu::ShaderModule> {
    let (module, error) = validated(device, || {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(stage),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(source)),
        })
    });

    match error {
        Some(error) => Err(ViewerError::ShaderCompile {
            stage,
            message: error.to_string(),
        }),
        None => Ok(module),
    }
}

fn create_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Mandelbrot Bind Group Layout"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: VIEW_BINDING,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: HUE_TEXTURE_BINDING,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: HUE_SAMPLER_BINDING,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

fn link_pipeline(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    vertex_module: &wgpu::ShaderModule,
    fragment_module: &wgpu::ShaderModule,
    target_format: wgpu::TextureFormat,
) -> Result<wgpu::RenderPipeline> {
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Mandelbrot Pipeline Layout"),
        bind_group_layouts: &[bind_group_layout],
        push_constant_ranges: &[],
    });

    let (pipeline, error) = validated(device, || {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mandelbrot Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: vertex_module,
                entry_point: VERTEX_ENTRY_POINT,
                buffers: &[QuadVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: fragment_module,
                entry_point: FRAGMENT_ENTRY_POINT,
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        })
    });

    match error {
        Some(error) => Err(ViewerError::ProgramLink(error.to_string())),
        None => Ok(pipeline),
    }
}

fn upload_hue_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    palette: &HuePalette,
    format: wgpu::TextureFormat,
    max_width: u32,
) -> Result<wgpu::Texture> {
    let width = palette.width();
    if width > max_width {
        return Err(ViewerError::HueTextureTooWide {
            kind: palette.kind(),
            width,
            max: max_width,
        });
    }

    let size = wgpu::Extent3d {
        width,
        height: 1,
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(palette.kind().display_name()),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::ImageCopyTexture {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        palette.texels(),
        wgpu::ImageDataLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(1),
        },
        size,
    );

    debug!(hue = %palette.kind(), width, "Uploaded hue texture");

    Ok(texture)
}
