use glamx::Mat4;

/// A viewpoint the wireframe is rendered from.
pub trait Camera3d {
    /// Returns `(view, projection)`.
    ///
    /// `view` maps world coordinates to camera space, and `projection` maps camera space
    /// to wgpu clip space.
    fn view_transform_pair(&self) -> (Mat4, Mat4);
}
