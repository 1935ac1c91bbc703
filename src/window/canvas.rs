//! A winit window with a wgpu surface and its depth buffer.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use crate::context::Context;
use crate::event::WindowEvent;
use crate::setup::ViewerSetup;
use anyhow::Context as _;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent as WinitWindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::EventLoopExtPumpEvents;
use winit::window::{Window, WindowAttributes, WindowId};

/// A fixed-size window and the wgpu surface presenting into it.
pub struct Canvas {
    window: Arc<Window>,
    event_loop: EventLoop<()>,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    out_events: Sender<WindowEvent>,
}

/// Forwards the close requests seen during one `pump_app_events` call.
struct CloseForwarder<'a> {
    out_events: &'a Sender<WindowEvent>,
}

impl ApplicationHandler for CloseForwarder<'_> {
    fn resumed(&mut self, _: &ActiveEventLoop) {}

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WinitWindowEvent) {
        if let WinitWindowEvent::CloseRequested = event {
            // The receiver lives in the window owning this canvas.
            let _ = self.out_events.send(WindowEvent::Close);
        }
    }
}

impl Canvas {
    /// Opens the window described by `setup` and makes its GPU device current.
    ///
    /// The window is `setup.width` by `setup.height` physical pixels and cannot be
    /// resized.
    pub async fn open(setup: &ViewerSetup, out_events: Sender<WindowEvent>) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("Failed to create event loop")?;
        let attributes = WindowAttributes::default()
            .with_title(setup.title.as_str())
            .with_inner_size(PhysicalSize::new(setup.width, setup.height))
            .with_resizable(false);
        #[allow(deprecated)]
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create surface")?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .context("No GPU adapter can present to the window")?;
        log::info!("Using adapter: {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("transmilenio device"),
                ..Default::default()
            })
            .await
            .context("Failed to create device")?;

        let caps = surface.get_capabilities(&adapter);
        // Linear, so pure red stays (1, 0, 0) on screen.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .context("The surface supports no format")?;
        log::info!("Surface format: {:?}", format);

        let size = window.inner_size();
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: if setup.vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);
        let depth_view = create_depth_view(&device, &surface_config);

        Context::init(device, queue, format);

        Ok(Canvas {
            window,
            event_loop,
            surface,
            surface_config,
            depth_view,
            out_events,
        })
    }

    /// Sends the close requests received since the last call to the channel given to
    /// [`Canvas::open`], without blocking.
    pub fn poll_events(&mut self) {
        let mut forwarder = CloseForwarder {
            out_events: &self.out_events,
        };
        let _ = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut forwarder);
    }

    pub fn get_current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Configures a lost or outdated surface again, at its original size.
    pub fn reconfigure(&mut self) {
        let device = Context::get().device;
        self.surface.configure(&device, &self.surface_config);
        self.depth_view = create_depth_view(&device, &self.surface_config);
    }

    pub fn present(&self, frame: wgpu::SurfaceTexture) {
        self.window.pre_present_notify();
        frame.present();
    }

    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth_view
    }

    /// The size of the surface, in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }
}

fn create_depth_view(device: &wgpu::Device, config: &wgpu::SurfaceConfiguration) -> wgpu::TextureView {
    device
        .create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: config.width,
                height: config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Context::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        })
        .create_view(&wgpu::TextureViewDescriptor::default())
}
