//! Triangles and face culling policy.

use luma_math::Vec3;
use serde::{Deserialize, Serialize};

/// Which face of a triangle, by winding, is skipped during hit testing.
///
/// A ray approaches the front face when `normal · direction < 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CullMode {
    /// Rays approaching the front face are rejected.
    FrontFace,
    /// Rays approaching the back face are rejected.
    BackFace,
    /// Both faces are hit-testable.
    #[default]
    NoCulling,
}

impl CullMode {
    /// The policy used for shadow rays: front and back swap, `NoCulling` is unchanged.
    ///
    /// Shadow rays travel from the surface toward the light, the opposite way
    /// light does, so the face light enters through is the one the ray leaves by.
    pub fn for_any_hit(self) -> CullMode {
        match self {
            CullMode::FrontFace => CullMode::BackFace,
            CullMode::BackFace => CullMode::FrontFace,
            CullMode::NoCulling => CullMode::NoCulling,
        }
    }

    /// Returns true if a ray with the given `normal · direction` is culled.
    #[inline]
    pub fn culls(self, normal_dot_direction: f32) -> bool {
        match self {
            CullMode::FrontFace => normal_dot_direction < 0.0,
            CullMode::BackFace => normal_dot_direction > 0.0,
            CullMode::NoCulling => false,
        }
    }
}

/// A single triangle with a precomputed face normal.
///
/// Meshes hand these out as short-lived views over their world-space buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    /// Face normal (unit length, or zero for degenerate triangles)
    pub normal: Vec3,
    pub cull_mode: CullMode,
    pub material_index: usize,
}

impl Triangle {
    /// Create a triangle, deriving the normal from the winding `v0 → v1 → v2`.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, cull_mode: CullMode, material_index: usize) -> Self {
        let normal = face_normal(v0, v1, v2);
        Self::with_normal(v0, v1, v2, normal, cull_mode, material_index)
    }

    /// Create a triangle with a pre-computed normal.
    pub fn with_normal(
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        normal: Vec3,
        cull_mode: CullMode,
        material_index: usize,
    ) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal,
            cull_mode,
            material_index,
        }
    }

    /// Center of mass of the three vertices.
    #[inline]
    pub fn centroid(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }
}

/// Unit face normal for the winding `v0 → v1 → v2`, zero when degenerate.
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_normal_from_winding() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y, CullMode::NoCulling, 0);
        assert_eq!(tri.normal, Vec3::Z);

        let flipped = Triangle::new(Vec3::ZERO, Vec3::Y, Vec3::X, CullMode::NoCulling, 0);
        assert_eq!(flipped.normal, Vec3::NEG_Z);
    }

    #[test]
    fn test_degenerate_triangle_has_zero_normal() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0, CullMode::BackFace, 0);
        assert_eq!(tri.normal, Vec3::ZERO);
    }

    #[test]
    fn test_centroid() {
        let tri = Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
            CullMode::NoCulling,
            0,
        );
        assert_eq!(tri.centroid(), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_cull_mode_any_hit_swaps_faces() {
        assert_eq!(CullMode::FrontFace.for_any_hit(), CullMode::BackFace);
        assert_eq!(CullMode::BackFace.for_any_hit(), CullMode::FrontFace);
        assert_eq!(CullMode::NoCulling.for_any_hit(), CullMode::NoCulling);
    }

    #[test]
    fn test_cull_mode_culls() {
        // Facing the ray (front face approached)
        assert!(CullMode::FrontFace.culls(-1.0));
        assert!(!CullMode::BackFace.culls(-1.0));
        // Back face approached
        assert!(CullMode::BackFace.culls(1.0));
        assert!(!CullMode::FrontFace.culls(1.0));
        assert!(!CullMode::NoCulling.culls(1.0));
        assert!(!CullMode::NoCulling.culls(-1.0));
    }

    #[test]
    fn test_cull_mode_deserialize() {
        let mode: CullMode = serde_json::from_str("\"back_face\"").unwrap();
        assert_eq!(mode, CullMode::BackFace);
    }
}
