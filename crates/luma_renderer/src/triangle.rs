//! Ray-triangle intersection.
//!
//! Intersects the triangle's plane through its centroid, then classifies the
//! hit point with one edge function per edge. Cull mode is checked before
//! any arithmetic on the hit point; shadow rays use the swapped mode.

use luma_core::{CullMode, Triangle};
use luma_math::Ray;

use crate::hittable::{HitMode, HitRecord, Hittable};

/// `|normal · direction|` below this counts as parallel.
const PARALLEL_EPSILON: f32 = 1e-8;

impl Hittable for Triangle {
    fn intersect(&self, ray: &Ray, rec: &mut HitRecord, mode: HitMode) -> bool {
        let normal_dot_direction = self.normal.dot(ray.direction);
        if normal_dot_direction.abs() < PARALLEL_EPSILON {
            return false;
        }

        let cull_mode: CullMode = match mode {
            HitMode::Closest => self.cull_mode,
            HitMode::Any => self.cull_mode.for_any_hit(),
        };
        if cull_mode.culls(normal_dot_direction) {
            return false;
        }

        let t = (self.centroid() - ray.origin).dot(self.normal) / normal_dot_direction;
        if !ray.t.contains(t) {
            return false;
        }

        let p = ray.at(t);
        let edges = [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)];
        for (a, b) in edges {
            if self.normal.dot((b - a).cross(p - a)) < 0.0 {
                return false;
            }
        }

        if mode == HitMode::Any {
            return true;
        }

        *rec = HitRecord::new(t, p, self.normal, self.material_index);
        true
    }
}
