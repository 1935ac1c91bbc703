//! The window, and things to handle the rendering loop and events.

mod canvas;
mod frame_loop;
mod viewer;
mod window;

pub use canvas::Canvas;
pub use frame_loop::{FrameLoop, FrameTarget, LoopState};
pub use viewer::Viewer;
pub use window::Window;
