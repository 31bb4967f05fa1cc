//! Hittable trait and HitRecord for ray-object intersection.

use luma_math::{Ray, Vec3};

/// Whether a hit test must find the nearest hit or only prove that one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitMode {
    /// Primary visibility: fill in the full record.
    Closest,
    /// Shadow rays: stop at the first valid hit, the record may be left untouched.
    Any,
}

/// Record of a ray-object intersection.
///
/// When `did_hit` is false the other fields carry no meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    pub did_hit: bool,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// World-space point of intersection
    pub origin: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Index into the scene's material list
    pub material_index: usize,
}

impl Default for HitRecord {
    fn default() -> Self {
        Self {
            did_hit: false,
            t: f32::INFINITY,
            origin: Vec3::ZERO,
            normal: Vec3::ZERO,
            material_index: 0,
        }
    }
}

impl HitRecord {
    #[inline]
    pub fn new(t: f32, origin: Vec3, normal: Vec3, material_index: usize) -> Self {
        Self {
            did_hit: true,
            t,
            origin,
            normal,
            material_index,
        }
    }
}

/// Trait for geometry that can be hit by rays.
///
/// Every primitive implements one algorithm for both modes; only the amount
/// of work done after a valid hit differs.
pub trait Hittable: Send + Sync {
    /// Test the ray against this object within `ray.t`.
    ///
    /// Returns true on a hit. In [`HitMode::Closest`] the nearest hit is
    /// written to `rec`; in [`HitMode::Any`] the test may return as soon as
    /// any hit is confirmed.
    fn intersect(&self, ray: &Ray, rec: &mut HitRecord, mode: HitMode) -> bool;

    /// Closest-hit test.
    #[inline]
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        self.intersect(ray, rec, HitMode::Closest)
    }

    /// Any-hit (occlusion) test.
    #[inline]
    fn occludes(&self, ray: &Ray) -> bool {
        let mut scratch = HitRecord::default();
        self.intersect(ray, &mut scratch, HitMode::Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_a_miss_at_infinity() {
        let rec = HitRecord::default();
        assert!(!rec.did_hit);
        assert_eq!(rec.t, f32::INFINITY);
    }

    #[test]
    fn test_new_record_is_a_hit() {
        let rec = HitRecord::new(2.0, Vec3::X, Vec3::Y, 3);
        assert!(rec.did_hit);
        assert_eq!(rec.t, 2.0);
        assert_eq!(rec.material_index, 3);
    }
}
