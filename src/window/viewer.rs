use std::time::Duration;

use crate::camera::FixedView3d;
use crate::color::Color;
use crate::renderer::LineRenderer3d;
use crate::scene::Wireframe;
use crate::setup::ViewerSetup;
use crate::window::{FrameTarget, Window};
use glamx::Mat4;

/// A [`FrameTarget`] drawing into a real window.
///
/// Draws the wireframe as lines of a single color, seen through a [`FixedView3d`].
pub struct Viewer {
    // Dropped before the window, which resets the wgpu context.
    renderer: LineRenderer3d,
    camera: FixedView3d,
    line_color: Color,
    window: Window,
}

impl Viewer {
    /// Opens the window described by `setup` and prepares the line renderer.
    pub async fn open(setup: &ViewerSetup) -> anyhow::Result<Viewer> {
        let window = Window::new_with_setup(setup).await?;
        log::info!("Opened a {}x{} window.", window.width(), window.height());
        let camera = FixedView3d::new_with_frustum(
            setup.fov_degrees.to_radians(),
            setup.znear,
            setup.zfar,
            setup.eye_distance,
            (setup.width as f32, setup.height as f32),
        );

        Ok(Viewer {
            renderer: LineRenderer3d::new(),
            camera,
            line_color: setup.line_color,
            window,
        })
    }
}

impl FrameTarget for Viewer {
    fn poll_quit(&mut self) -> bool {
        self.window.poll_events();
        self.window.should_close()
    }

    fn draw_frame(&mut self, scene: &Wireframe, model: Mat4) {
        self.renderer.draw_wireframe(scene, model, self.line_color);
        self.window.render_frame(&self.camera, &mut self.renderer);
    }

    fn pause(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}
