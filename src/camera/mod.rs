//! Camera trait and the fixed perspective camera of the viewer.

pub use self::camera3d::Camera3d;
pub use self::fixed_view3d::FixedView3d;

mod camera3d;
mod fixed_view3d;
