//! Ray-sphere intersection.

use luma_core::Sphere;
use luma_math::Ray;

use crate::hittable::{HitMode, HitRecord, Hittable};

impl Hittable for Sphere {
    /// Solves `|o + t·d − c|² = r²` and accepts the smaller root only.
    fn intersect(&self, ray: &Ray, rec: &mut HitRecord, mode: HitMode) -> bool {
        let oc = ray.origin - self.origin;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 || a <= 0.0 {
            return false;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if !ray.t.contains(t) {
            return false;
        }

        if mode == HitMode::Any {
            return true;
        }

        let p = ray.at(t);
        *rec = HitRecord::new(
            t,
            p,
            (p - self.origin).normalize_or_zero(),
            self.material_index,
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luma_math::Vec3;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::ZERO, 1.0, 2)
    }

    #[test]
    fn test_sphere_hit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(unit_sphere().hit(&ray, &mut rec));
        assert!(rec.did_hit);
        assert!((rec.t - 4.0).abs() < 1e-6);
        assert!((rec.origin - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
        assert!((rec.normal - Vec3::NEG_Z).length() < 1e-6);
        assert_eq!(rec.material_index, 2);
    }

    #[test]
    fn test_sphere_miss() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::X);
        let mut rec = HitRecord::default();

        assert!(!unit_sphere().hit(&ray, &mut rec));
        assert!(!rec.did_hit);
        assert!(!unit_sphere().occludes(&ray));
    }

    #[test]
    fn test_sphere_root_uses_full_denominator() {
        // With a non-unit direction, (−B−√D)/2·A would give 4·4 = 16 instead of 1.
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 4.0));
        let mut rec = HitRecord::default();

        assert!(unit_sphere().hit(&ray, &mut rec));
        assert!((rec.t - 1.0).abs() < 1e-6);
        assert!((rec.origin - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_sphere_hit_outside_interval() {
        let ray = Ray::bounded(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, 0.0001, 3.0);
        let mut rec = HitRecord::default();

        assert!(!unit_sphere().hit(&ray, &mut rec));
        assert!(!unit_sphere().occludes(&ray));
    }

    #[test]
    fn test_sphere_behind_ray() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(!unit_sphere().occludes(&ray));
    }

    #[test]
    fn test_any_hit_leaves_record_untouched() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(unit_sphere().intersect(&ray, &mut rec, HitMode::Any));
        assert_eq!(rec, HitRecord::default());
    }
}
