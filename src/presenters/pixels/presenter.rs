use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::{wgpu, Pixels, PixelsBuilder, SurfaceTexture};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::config::ViewerConfig;
use crate::core::data::rgba_image::RgbaImage;
use crate::core::ports::surface_events::SurfaceEvents;
use crate::errors::ViewerError;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::FrameReadyNotifier;
use crate::presenters::pixels::pipeline::ImagePipeline;
use crate::presenters::pixels::texture::ImageTexture;

/// Draws the image quad, then the egui overlay, onto the window surface.
///
/// The pixels framebuffer itself is unused; pixels only provides the surface,
/// device and queue.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    pipeline: ImagePipeline,
    texture: ImageTexture,
    egui_renderer: EguiRenderer,
    notifier: FrameReadyNotifier,
    clear_colour: wgpu::Color,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        config: &ViewerConfig,
        image: &RgbaImage,
    ) -> Result<Self, ViewerError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width.max(1), size.height.max(1), window);

        let pixels = PixelsBuilder::new(1, 1, surface_texture)
            .enable_vsync(true)
            .build()?;

        let pipeline = ImagePipeline::new(pixels.device(), pixels.render_texture_format(), config.filter_mode);
        let texture = ImageTexture::upload(pixels.device(), pixels.queue(), &pipeline, image)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        let [r, g, b, a] = config.clear_colour;

        tracing::info!(
            surface_width = size.width,
            surface_height = size.height,
            slices = texture.slice_count(),
            "presenter ready"
        );

        Ok(Self {
            pixels,
            pipeline,
            texture,
            egui_renderer,
            notifier: FrameReadyNotifier::new(event_loop_proxy),
            clear_colour: wgpu::Color { r, g, b, a },
            width: size.width,
            height: size.height,
        })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        overlay: egui::FullOutput,
        egui_ctx: &EguiContext,
        events: &mut dyn SurfaceEvents,
    ) -> Result<(), ViewerError> {
        // Nothing to draw into while minimized, but the surface is free.
        if self.width == 0 || self.height == 0 {
            events.on_ready();
            return Ok(());
        }

        let clipped_primitives = egui_ctx.tessellate(overlay.shapes, egui_ctx.pixels_per_point());
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.width, self.height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };
        let textures_delta = overlay.textures_delta;
        let clear_colour = self.clear_colour;

        let result = self.pixels.render_with(|encoder, render_target, context| {
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("image"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(clear_colour),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.texture.draw(&mut render_pass, &self.pipeline);
            }

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

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        });

        match result {
            Ok(()) => {
                self.notifier.notify_ready();
                Ok(())
            }
            Err(pixels::Error::Surface(
                error @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Timeout),
            )) => {
                tracing::warn!(%error, "surface unavailable, reconfiguring");
                self.resize(self.width, self.height);
                events.on_dirty();
                events.on_ready();
                Ok(())
            }
            Err(error) => Err(error.into()),
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        if let Err(error) = self.pixels.resize_surface(width, height) {
            tracing::error!(%error, width, height, "failed to resize surface");
        }
    }
}
