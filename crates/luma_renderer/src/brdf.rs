//! Analytic reflectance functions.
//!
//! All inputs are unit vectors; colors are linear and unclamped. Nothing here
//! guards degenerate denominators, callers deal with grazing angles.

use std::f32::consts::PI;

use luma_core::Color;
use luma_math::Vec3;

/// Energy-normalized Lambert diffuse: `cd · kd / π`.
#[inline]
pub fn lambert(kd: f32, cd: Color) -> Color {
    cd * kd / PI
}

/// Mirror `l` about the plane with normal `n`: `l − 2(l·n)n`.
#[inline]
pub fn reflect(l: Vec3, n: Vec3) -> Vec3 {
    l - 2.0 * l.dot(n) * n
}

/// Phong specular lobe, achromatic: `ks · max(0, reflect(l, n)·v)^exponent`.
#[inline]
pub fn phong(ks: f32, exponent: f32, l: Vec3, v: Vec3, n: Vec3) -> Color {
    let cos_angle = reflect(l, n).dot(v).max(0.0);
    Color::splat(ks * cos_angle.powf(exponent))
}

/// Schlick's Fresnel approximation: `f0 + (1 − f0)(1 − max(0, h·v))^5`.
#[inline]
pub fn fresnel_schlick(h: Vec3, v: Vec3, f0: Color) -> Color {
    let falloff = (1.0 - h.dot(v).max(0.0)).powi(5);
    f0 + (Color::ONE - f0) * falloff
}

/// Trowbridge-Reitz GGX normal distribution.
///
/// `alpha` is already squared roughness and is squared once more here, so the
/// distribution is driven by roughness⁴.
#[inline]
pub fn normal_distribution_ggx(n: Vec3, h: Vec3, alpha: f32) -> f32 {
    let alpha_squared = alpha * alpha;
    let n_dot_h = n.dot(h);
    let denominator = n_dot_h * n_dot_h * (alpha_squared - 1.0) + 1.0;
    alpha_squared / (PI * denominator * denominator)
}

/// Schlick-GGX geometry term for one direction, `k = (α + 1)² / 8`.
#[inline]
pub fn geometry_schlick_ggx(n: Vec3, v: Vec3, alpha: f32) -> f32 {
    let n_dot_v = n.dot(v).max(0.0);
    let k = (alpha + 1.0) * (alpha + 1.0) / 8.0;
    n_dot_v / (n_dot_v * (1.0 - k) + k)
}

/// Smith shadowing-masking: the Schlick-GGX term for the view and light directions.
#[inline]
pub fn geometry_smith(n: Vec3, v: Vec3, l: Vec3, alpha: f32) -> f32 {
    geometry_schlick_ggx(n, v, alpha) * geometry_schlick_ggx(n, l, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_unit(rng: &mut StdRng) -> Vec3 {
        loop {
            let v = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if v.length_squared() > 1e-4 && v.length_squared() <= 1.0 {
                return v.normalize();
            }
        }
    }

    #[test]
    fn test_lambert() {
        let result = lambert(1.0, Color::new(PI, PI / 2.0, 0.0));
        assert!((result - Color::new(1.0, 0.5, 0.0)).length() < 1e-6);

        let half = lambert(0.5, Color::ONE);
        assert!((half.x - 0.5 / PI).abs() < 1e-7);
    }

    #[test]
    fn test_reflect() {
        let reflected = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(reflected, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_phong_is_achromatic_and_clamped() {
        let n = Vec3::Y;
        let l = Vec3::new(1.0, -1.0, 0.0).normalize();
        let v = Vec3::new(1.0, 1.0, 0.0).normalize();

        let peak = phong(0.5, 10.0, l, v, n);
        assert!((peak - Color::splat(0.5)).length() < 1e-5);

        // View opposite to the reflection: cosine clamps to zero
        let away = phong(0.5, 10.0, l, -v, n);
        assert_eq!(away, Color::ZERO);
    }

    #[test]
    fn test_fresnel_at_normal_incidence_is_f0() {
        let f0 = Color::new(0.972, 0.960, 0.915);
        let h = Vec3::new(0.0, 0.6, 0.8);
        assert_eq!(fresnel_schlick(h, h, f0), f0);
    }

    #[test]
    fn test_fresnel_at_grazing_angle_is_white() {
        let f0 = Color::splat(0.04);
        let result = fresnel_schlick(Vec3::Y, Vec3::X, f0);
        assert!((result - Color::ONE).length() < 1e-6);
    }

    #[test]
    fn test_ggx_peaks_at_normal() {
        let n = Vec3::Y;
        let alpha = 0.5 * 0.5;
        let aligned = normal_distribution_ggx(n, n, alpha);
        let tilted = normal_distribution_ggx(n, Vec3::new(0.0, 0.8, 0.6), alpha);

        // n·h = 1 collapses the denominator to π·α⁴
        assert!((aligned - 1.0 / (PI * alpha * alpha)).abs() < 1e-3);
        assert!(tilted < aligned);
    }

    #[test]
    fn test_ggx_rough_surface_is_uniform() {
        // alpha = 1: D = 1/π regardless of h
        let n = Vec3::Y;
        let h = Vec3::new(0.6, 0.8, 0.0);
        assert!((normal_distribution_ggx(n, h, 1.0) - 1.0 / PI).abs() < 1e-6);
    }

    #[test]
    fn test_geometry_schlick_ggx_clamps_backfacing() {
        assert_eq!(geometry_schlick_ggx(Vec3::Y, Vec3::NEG_Y, 0.5), 0.0);
        assert!((geometry_schlick_ggx(Vec3::Y, Vec3::Y, 0.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_smith_factorization() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let n = random_unit(&mut rng);
            let v = random_unit(&mut rng);
            let l = random_unit(&mut rng);
            let alpha: f32 = rng.gen_range(0.0..1.0);

            let smith = geometry_smith(n, v, l, alpha);
            let product = geometry_schlick_ggx(n, v, alpha) * geometry_schlick_ggx(n, l, alpha);
            assert_eq!(smith, product);
        }
    }
}
