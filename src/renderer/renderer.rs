use crate::camera::Camera3d;

/// Something drawn into the frame once per iteration.
///
/// The window calls [`render`](Self::render) after clearing the color and depth buffers
/// and before presenting.
pub trait Renderer3d {
    /// Records the draw calls of this renderer into `render_pass`, seen through `camera`.
    fn render(&mut self, camera: &dyn Camera3d, render_pass: &mut wgpu::RenderPass<'_>);
}
