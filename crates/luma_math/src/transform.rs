// Transform utilities for Mat4
//
// Extends glam::Mat4 with the affine helpers the camera and meshes need.
// Note: glam::Mat4 already provides transform_point3() and inverse()

use glam::{Mat3, Mat4, Vec3, Vec4};

/// Extension trait for Mat4 to provide additional transform utilities
pub trait Mat4Ext {
    /// Assemble a basis + translation transform whose columns are
    /// `right`, `up`, `forward` and `origin`.
    fn from_basis(right: Vec3, up: Vec3, forward: Vec3, origin: Vec3) -> Self
    where
        Self: Sized;

    /// Transform a direction (applies rotation and scale, but NOT translation).
    /// Directions have an implicit w=0 component.
    fn transform_direction(&self, direction: Vec3) -> Vec3;

    /// Transform a surface normal with the inverse-transpose of the linear part
    /// and renormalize, so non-uniform scale keeps normals perpendicular.
    fn transform_normal(&self, normal: Vec3) -> Vec3;
}

impl Mat4Ext for Mat4 {
    fn from_basis(right: Vec3, up: Vec3, forward: Vec3, origin: Vec3) -> Self {
        Mat4::from_cols(
            right.extend(0.0),
            up.extend(0.0),
            forward.extend(0.0),
            origin.extend(1.0),
        )
    }

    fn transform_direction(&self, direction: Vec3) -> Vec3 {
        let v4 = Vec4::new(direction.x, direction.y, direction.z, 0.0);
        let transformed = *self * v4;
        Vec3::new(transformed.x, transformed.y, transformed.z)
    }

    fn transform_normal(&self, normal: Vec3) -> Vec3 {
        let linear = Mat3::from_mat4(*self);
        let normal_matrix = if linear.determinant().abs() > f32::EPSILON {
            linear.inverse().transpose()
        } else {
            // Singular (flattened) transform: the plain linear part is the best we can do
            linear
        };
        (normal_matrix * normal).normalize_or_zero()
    }
}
