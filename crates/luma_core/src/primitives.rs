//! Analytic primitives: spheres and infinite planes.

use luma_math::Vec3;
use serde::{Deserialize, Serialize};

/// A sphere referencing a material by index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f32,
    #[serde(default)]
    pub material_index: usize,
}

impl Sphere {
    pub fn new(origin: Vec3, radius: f32, material_index: usize) -> Self {
        Self {
            origin,
            radius: radius.max(0.0),
            material_index,
        }
    }
}

/// An infinite plane through `origin` with a unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    #[serde(default)]
    pub material_index: usize,
}

impl Plane {
    /// Create a plane. The normal is normalized here so hit records can use it as-is.
    pub fn new(origin: Vec3, normal: Vec3, material_index: usize) -> Self {
        Self {
            origin,
            normal: normal.normalize_or_zero(),
            material_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_normalizes_normal() {
        let plane = Plane::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), 1);
        assert_eq!(plane.normal, Vec3::Y);
        assert_eq!(plane.material_index, 1);
    }

    #[test]
    fn test_sphere_negative_radius_clamped() {
        let sphere = Sphere::new(Vec3::ONE, -2.0, 0);
        assert_eq!(sphere.radius, 0.0);
    }

    #[test]
    fn test_sphere_deserialize_default_material() {
        let sphere: Sphere =
            serde_json::from_str(r#"{ "origin": [0.0, 1.0, 0.0], "radius": 0.75 }"#).unwrap();
        assert_eq!(sphere.origin, Vec3::Y);
        assert_eq!(sphere.material_index, 0);
    }
}
