//! Fixed settings of the viewer.

use crate::color::{self, Color};
use std::time::Duration;

/// Everything the viewer needs to know before opening its window.
///
/// There are no command-line flags or configuration files: the application runs with
/// [`ViewerSetup::default`].
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerSetup {
    /// The window title.
    pub title: String,
    /// The window width, in physical pixels.
    pub width: u32,
    /// The window height, in physical pixels.
    pub height: u32,
    /// Is vsync enabled?
    pub vsync: bool,
    /// Vertical field of view, in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// How far the model is pushed away from the eye along `-z`.
    pub eye_distance: f32,
    /// Rotation applied around the vertical axis at each frame, in degrees.
    pub spin_degrees: f32,
    /// Pause between two frames.
    pub frame_interval: Duration,
    /// Color of the wireframe lines.
    pub line_color: Color,
    /// Color the framebuffer is cleared with.
    pub background: Color,
}

impl Default for ViewerSetup {
    fn default() -> Self {
        ViewerSetup {
            title: "Transmilenio".to_string(),
            width: 800,
            height: 600,
            vsync: true,
            fov_degrees: 45.0,
            znear: 0.1,
            zfar: 50.0,
            eye_distance: 5.0,
            spin_degrees: 1.0,
            frame_interval: Duration::from_millis(10),
            line_color: color::RED,
            background: color::BLACK,
        }
    }
}
