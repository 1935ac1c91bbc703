use crate::camera::Camera3d;
use glamx::{Mat4, Vec3};

/// A camera that cannot move.
///
/// It looks down the `-z` axis from `eye_distance` units away from the origin, through a
/// perspective projection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedView3d {
    view: Mat4,
    proj: Mat4,
}

impl FixedView3d {
    /// Creates a new fixed camera.
    ///
    /// # Arguments
    /// * `fov` - The vertical field of view, in radians
    /// * `znear` - The near clipping plane distance
    /// * `zfar` - The far clipping plane distance
    /// * `eye_distance` - How far the scene is pushed along `-z`
    /// * `framebuffer_size` - Width and height used for the aspect ratio
    pub fn new_with_frustum(
        fov: f32,
        znear: f32,
        zfar: f32,
        eye_distance: f32,
        framebuffer_size: (f32, f32),
    ) -> FixedView3d {
        let aspect = framebuffer_size.0 / framebuffer_size.1;

        FixedView3d {
            view: Mat4::from_translation(Vec3::new(0.0, 0.0, -eye_distance)),
            // wgpu clip space has its depth in [0, 1].
            proj: Mat4::perspective_rh(fov, aspect, znear, zfar),
        }
    }
}

impl Camera3d for FixedView3d {
    #[inline]
    fn view_transform_pair(&self) -> (Mat4, Mat4) {
        (self.view, self.proj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOV: f32 = std::f32::consts::FRAC_PI_4;

    fn camera() -> FixedView3d {
        FixedView3d::new_with_frustum(FOV, 0.1, 50.0, 5.0, (800.0, 600.0))
    }

    /// Normalized device coordinates of a world point.
    fn ndc(camera: &FixedView3d, p: Vec3) -> Vec3 {
        let (view, proj) = camera.view_transform_pair();
        (proj * view).project_point3(p)
    }

    #[test]
    fn origin_is_at_the_center_of_the_screen() {
        let p = ndc(&camera(), Vec3::ZERO);
        assert!(p.x.abs() < 1.0e-6 && p.y.abs() < 1.0e-6);
        assert!(p.z > 0.0 && p.z < 1.0);
    }

    #[test]
    fn frustum_edges_reach_the_screen_corners() {
        let half_height = 5.0 * (FOV / 2.0).tan();
        let half_width = half_height * 800.0 / 600.0;

        let corner = ndc(&camera(), Vec3::new(half_width, half_height, 0.0));
        assert!((corner.x - 1.0).abs() < 1.0e-5);
        assert!((corner.y - 1.0).abs() < 1.0e-5);
    }

    #[test]
    fn clip_planes_bound_the_depth_range() {
        let camera = camera();
        // The eye sits at z = 5.
        let near = ndc(&camera, Vec3::new(0.0, 0.0, 5.0 - 0.1));
        let far = ndc(&camera, Vec3::new(0.0, 0.0, 5.0 - 50.0));

        assert!(near.z.abs() < 1.0e-4);
        assert!((far.z - 1.0).abs() < 1.0e-4);
    }
}
