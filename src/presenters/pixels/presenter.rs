use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use tracing::info;
use winit::window::Window;

use crate::controllers::view::FrameRequest;
use crate::core::hue::HuePalettes;
use crate::core::shader::ShaderSources;
use crate::error::Result;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::presenters::pixels::pipeline::MandelbrotPipeline;
use crate::presenters::pixels::uniforms::ViewUniforms;

/// Draws the Mandelbrot quad and the egui HUD onto the window surface.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    pipeline: MandelbrotPipeline,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        vsync: bool,
        sources: &ShaderSources,
        palettes: &HuePalettes,
    ) -> Result<Self> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        // The quad covers the whole surface; the pixel buffer itself stays unused.
        let pixels = PixelsBuilder::new(1, 1, surface_texture)
            .enable_vsync(vsync)
            .clear_color(wgpu::Color::BLACK)
            .build()?;

        let target_format = pixels.render_texture_format();
        info!(?target_format, width = size.width, height = size.height, "Surface ready");

        let pipeline = MandelbrotPipeline::new(
            pixels.device(),
            pixels.queue(),
            target_format,
            sources,
            palettes,
        )?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            target_format,
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            pipeline,
            egui_renderer,
            width: size.width,
            height: size.height,
        })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        frame: &FrameRequest,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.pipeline
            .update_uniforms(self.pixels.queue(), &ViewUniforms::from(frame));

        #[cfg(feature = "checked")]
        self.pixels
            .device()
            .push_error_scope(wgpu::ErrorFilter::Validation);

        let result = self.pixels.render_with(|encoder, render_target, context| {
            self.pipeline.draw(encoder, render_target, frame.hue);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // HUD goes on top of the fractal
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        });

        #[cfg(feature = "checked")]
        if let Some(error) = pollster::block_on(self.pixels.device().pop_error_scope()) {
            return Err(crate::error::ViewerError::GpuValidation {
                domain: "Rendering frame",
                message: error.to_string(),
            });
        }

        result?;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        Ok(())
    }
}
