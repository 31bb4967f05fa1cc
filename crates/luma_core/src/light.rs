//! Point and directional lights.

use luma_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::material::Color;

/// Where light comes from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LightKind {
    /// Radiates from a point; intensity falls off with the squared distance.
    Point { origin: Vec3 },
    /// Parallel rays travelling along `direction`; no falloff.
    Directional { direction: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    #[serde(flatten)]
    pub kind: LightKind,
    pub intensity: f32,
    pub color: Color,
}

impl Light {
    pub fn point(origin: Vec3, intensity: f32, color: Color) -> Self {
        Self {
            kind: LightKind::Point { origin },
            intensity,
            color,
        }
    }

    pub fn directional(direction: Vec3, intensity: f32, color: Color) -> Self {
        Self {
            kind: LightKind::Directional {
                direction: direction.normalize_or_zero(),
            },
            intensity,
            color,
        }
    }

    /// Unit direction from `point` toward the light, and the distance to travel.
    ///
    /// Directional lights are infinitely far away, reported as `f32::MAX`.
    /// Returns `None` when `point` sits on a point light, which then has no
    /// direction and contributes nothing.
    pub fn direction_from(&self, point: Vec3) -> Option<(Vec3, f32)> {
        match self.kind {
            LightKind::Point { origin } => {
                let to_light = origin - point;
                let distance = to_light.length();
                if distance <= f32::EPSILON {
                    return None;
                }
                Some((to_light / distance, distance))
            }
            LightKind::Directional { direction } => {
                Some((-direction.normalize_or_zero(), f32::MAX))
            }
        }
    }

    /// Incident radiance arriving at `target`; zero on top of a point light.
    pub fn radiance(&self, target: Vec3) -> Color {
        match self.kind {
            LightKind::Point { origin } => {
                let distance_squared = (origin - target).length_squared();
                if distance_squared <= f32::EPSILON * f32::EPSILON {
                    return Color::ZERO;
                }
                self.color * (self.intensity / distance_squared)
            }
            LightKind::Directional { .. } => self.color * self.intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_light_direction_and_distance() {
        let light = Light::point(Vec3::new(0.0, 5.0, 0.0), 10.0, Vec3::ONE);
        let (direction, distance) = light.direction_from(Vec3::new(0.0, 1.0, 0.0)).unwrap();

        assert!((direction - Vec3::Y).length() < 1e-6);
        assert!((distance - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_light_inverse_square() {
        let light = Light::point(Vec3::ZERO, 50.0, Vec3::new(1.0, 0.5, 0.0));
        let near = light.radiance(Vec3::new(0.0, 0.0, 1.0));
        let far = light.radiance(Vec3::new(0.0, 0.0, 2.0));

        assert!((near - Vec3::new(50.0, 25.0, 0.0)).length() < 1e-4);
        assert!((far * 4.0 - near).length() < 1e-4);
    }

    #[test]
    fn test_directional_light_no_falloff() {
        let light = Light::directional(Vec3::new(0.0, -2.0, 0.0), 3.0, Vec3::ONE);

        assert_eq!(light.radiance(Vec3::ZERO), Vec3::splat(3.0));
        assert_eq!(light.radiance(Vec3::splat(1000.0)), Vec3::splat(3.0));

        let (direction, distance) = light.direction_from(Vec3::ZERO).unwrap();
        assert_eq!(direction, Vec3::Y);
        assert_eq!(distance, f32::MAX);
    }

    #[test]
    fn test_point_light_at_shading_point_contributes_nothing() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let light = Light::point(origin, 70.0, Vec3::ONE);

        assert_eq!(light.direction_from(origin), None);
        assert_eq!(light.radiance(origin), Vec3::ZERO);
    }

    #[test]
    fn test_light_deserialize() {
        let json = r#"{ "type": "point", "origin": [0, 5, -5], "intensity": 70, "color": [1, 1, 1] }"#;
        let light: Light = serde_json::from_str(json).unwrap();
        assert_eq!(light, Light::point(Vec3::new(0.0, 5.0, -5.0), 70.0, Vec3::ONE));
    }
}
