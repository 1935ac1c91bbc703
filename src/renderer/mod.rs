//! Structures responsible for drawing into the frame.

pub use self::line_renderer3d::LineRenderer3d;
pub use self::renderer::Renderer3d;

pub mod line_renderer3d;
mod renderer;
