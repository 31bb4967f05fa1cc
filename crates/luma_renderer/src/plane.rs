//! Ray-plane intersection.

use luma_core::Plane;
use luma_math::Ray;

use crate::hittable::{HitMode, HitRecord, Hittable};

/// `|direction · normal|` below this counts as parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray, rec: &mut HitRecord, mode: HitMode) -> bool {
        let denominator = ray.direction.dot(self.normal);
        if denominator.abs() < PARALLEL_EPSILON {
            return false;
        }

        let t = (self.origin - ray.origin).dot(self.normal) / denominator;
        if !ray.t.contains_above_min(t) {
            return false;
        }

        if mode == HitMode::Any {
            return true;
        }

        *rec = HitRecord::new(t, ray.at(t), self.normal, self.material_index);
        true
    }
}
