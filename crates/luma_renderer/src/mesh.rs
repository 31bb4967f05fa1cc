//! Ray-mesh intersection over world-space triangle views.

use luma_core::TriangleMesh;
use luma_math::Ray;

use crate::hittable::{HitMode, HitRecord, Hittable};

impl Hittable for TriangleMesh {
    fn intersect(&self, ray: &Ray, rec: &mut HitRecord, mode: HitMode) -> bool {
        let mut closest = HitRecord::default();
        let mut candidate = HitRecord::default();

        for triangle in self.world_triangles() {
            if !triangle.intersect(ray, &mut candidate, mode) {
                continue;
            }
            if mode == HitMode::Any {
                return true;
            }
            if candidate.t < closest.t {
                closest = candidate;
            }
        }

        if !closest.did_hit {
            return false;
        }
        *rec = closest;
        true
    }
}
