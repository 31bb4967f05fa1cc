//! Shading for each material variant.

use luma_core::{Color, Material};
use luma_math::Vec3;

use crate::brdf;
use crate::hittable::HitRecord;

/// Base reflectivity of dielectrics.
const DIELECTRIC_F0: Color = Color::splat(0.04);

/// Cook-Torrance specular is dropped below this denominator.
const GRAZING_EPSILON: f32 = 1e-6;

/// Surface response to one light.
pub trait Shade: Send + Sync {
    /// Reflected color toward `view_dir` for light arriving from `light_dir`.
    ///
    /// Both directions point away from the surface and are unit length.
    fn shade(&self, hit: &HitRecord, light_dir: Vec3, view_dir: Vec3) -> Color;
}

impl Shade for Material {
    fn shade(&self, hit: &HitRecord, light_dir: Vec3, view_dir: Vec3) -> Color {
        match *self {
            Material::SolidColor { color } => color,
            Material::Lambert { diffuse_color, kd } => brdf::lambert(kd, diffuse_color),
            Material::LambertPhong {
                diffuse_color,
                kd,
                ks,
                exponent,
            } => {
                brdf::lambert(kd, diffuse_color)
                    + brdf::phong(ks, exponent, light_dir, view_dir, hit.normal)
            }
            Material::CookTorrance {
                albedo,
                metalness,
                roughness,
            } => cook_torrance(albedo, metalness, roughness, hit.normal, light_dir, view_dir),
        }
    }
}

fn cook_torrance(
    albedo: Color,
    metalness: f32,
    roughness: f32,
    n: Vec3,
    l: Vec3,
    v: Vec3,
) -> Color {
    let is_dielectric = metalness == 0.0;
    let alpha = roughness * roughness;
    let h = (l + v).normalize_or_zero();

    let f0 = if is_dielectric { DIELECTRIC_F0 } else { albedo };
    let kd = if is_dielectric { 1.0 - f0.x } else { 0.0 };

    let denominator = 4.0 * n.dot(v).max(0.0) * n.dot(l).max(0.0);
    let specular = if denominator < GRAZING_EPSILON {
        Color::ZERO
    } else {
        let d = brdf::normal_distribution_ggx(n, h, alpha);
        let f = brdf::fresnel_schlick(h, v, f0);
        let g = brdf::geometry_smith(n, v, l, alpha);
        let specular = d * f * g / denominator;
        if specular.is_finite() {
            specular
        } else {
            Color::ZERO
        }
    };

    brdf::lambert(kd, albedo) + specular
}
