use crate::{Interval, Vec3};

/// Smallest accepted hit distance; keeps rays from re-hitting their own origin surface.
pub const DEFAULT_T_MIN: f32 = 0.0001;

/// A ray in 3D space with origin, direction and a valid parametric range.
///
/// The direction is expected to be unit length but this is not enforced;
/// callers normalize before constructing primary and shadow rays.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    /// Accepted hit distances, `[DEFAULT_T_MIN, f32::MAX]` unless bounded.
    pub t: Interval,
}

impl Ray {
    /// Create a new ray with the default `[0.0001, f32::MAX]` range.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            t: Interval::new(DEFAULT_T_MIN, f32::MAX),
        }
    }

    /// Create a ray that only accepts hits in `[t_min, t_max]`.
    pub fn bounded(origin: Vec3, direction: Vec3, t_min: f32, t_max: f32) -> Self {
        Self {
            origin,
            direction,
            t: Interval::new(t_min, t_max),
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
        assert_eq!(ray.t.min, DEFAULT_T_MIN);
        assert_eq!(ray.t.max, f32::MAX);
    }

    #[test]
    fn test_ray_bounded() {
        let ray = Ray::bounded(Vec3::ZERO, Vec3::X, 0.5, 2.0);

        assert_eq!(ray.t.min, 0.5);
        assert_eq!(ray.t.max, 2.0);
        assert!(ray.t.contains(1.0));
        assert!(!ray.t.contains(2.5));
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_default_points_forward() {
        let ray = Ray::default();
        assert_eq!(ray.origin, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::Z);
    }
}
