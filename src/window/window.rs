//! The window the wireframe is drawn into.

use std::sync::mpsc::{self, Receiver};

use crate::camera::Camera3d;
use crate::color::{self, Color};
use crate::context::Context;
use crate::event::WindowEvent;
use crate::renderer::Renderer3d;
use crate::setup::ViewerSetup;
use crate::window::canvas::Canvas;

/// Structure representing a window and its rendering surface.
pub struct Window {
    events: Receiver<WindowEvent>,
    background: Color,
    should_close: bool,
    canvas: Canvas,
}

impl Drop for Window {
    fn drop(&mut self) {
        Context::reset();
    }
}

impl Window {
    /// Opens a window with the title, size and vsync mode of `setup`.
    ///
    /// # Errors
    /// Fails if no window can be created, or if no GPU device can present to it.
    pub async fn new_with_setup(setup: &ViewerSetup) -> anyhow::Result<Window> {
        let (event_send, event_receive) = mpsc::channel();
        let canvas = Canvas::open(setup, event_send).await?;

        Ok(Window {
            events: event_receive,
            background: setup.background,
            should_close: false,
            canvas,
        })
    }

    /// Indicates whether this window should be closed.
    #[inline]
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Width of the surface, in physical pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.canvas.size().0
    }

    /// Height of the surface, in physical pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.canvas.size().1
    }

    /// Polls pending events without blocking.
    ///
    /// A close request marks the window as [closing](Self::should_close).
    pub fn poll_events(&mut self) {
        self.canvas.poll_events();

        // Drain the channel even after a quit request.
        let quit = self.events.try_iter().fold(false, |quit, e| quit | e.is_quit());
        self.should_close |= quit;
    }

    /// Renders and presents one frame.
    ///
    /// Clears the color and depth buffers, lets `renderer` record its draw calls, then
    /// submits and presents. If no surface texture can be acquired, the frame is
    /// skipped.
    pub fn render_frame(&mut self, camera: &dyn Camera3d, renderer: &mut dyn Renderer3d) {
        let frame = match self.canvas.get_current_texture() {
            Ok(frame) => frame,
            Err(e @ wgpu::SurfaceError::Lost) | Err(e @ wgpu::SurfaceError::Outdated) => {
                log::warn!("Reconfiguring the surface after: {}", e);
                self.canvas.reconfigure();
                return;
            }
            Err(e) => {
                log::warn!("Failed to acquire surface texture: {}", e);
                return;
            }
        };
        let frame_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let ctxt = Context::get();
        let mut encoder = ctxt
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(color::to_wgpu(self.background)),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.canvas.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            renderer.render(camera, &mut render_pass);
        }

        ctxt.queue.submit(Some(encoder.finish()));
        self.canvas.present(frame);
    }
}
