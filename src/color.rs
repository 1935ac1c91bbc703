//! Color constants used by the viewer.
//!
//! Colors are [`Color`] values with RGBA components in the range [0.0, 1.0].
//!
//! # Example
//! ```
//! use transmilenio::color::{self, Color};
//!
//! let line: Color = color::RED;
//! assert_eq!((line.r, line.g, line.b, line.a), (1.0, 0.0, 0.0, 1.0));
//! ```

pub use rgb::Rgba;

/// The color type used throughout the crate. RGBA with f32 components in [0.0, 1.0].
pub type Color = Rgba<f32>;

/// Black (0, 0, 0)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Red (255, 0, 0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Converts a color to the `[r, g, b, a]` layout expected by vertex buffers.
#[inline]
pub fn to_array(color: Color) -> [f32; 4] {
    [color.r, color.g, color.b, color.a]
}

/// Converts a color to the clear value of a render pass.
#[inline]
pub fn to_wgpu(color: Color) -> wgpu::Color {
    wgpu::Color {
        r: color.r as f64,
        g: color.g as f64,
        b: color.b as f64,
        a: color.a as f64,
    }
}
