//! Material parameters.
//!
//! Materials are plain data referenced by index from geometry. The shading
//! behavior for each variant lives in the renderer.

use luma_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (linear RGB, non-negative, unclamped until tone mapping)
pub type Color = Vec3;

/// Named colors used by scene setup code.
pub mod colors {
    use super::Color;

    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5);
}

/// Reflectance model of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Material {
    /// Constant color, ignores lighting geometry.
    SolidColor { color: Color },

    /// Energy-normalized diffuse.
    Lambert {
        diffuse_color: Color,
        /// Diffuse reflection coefficient
        kd: f32,
    },

    /// Lambert diffuse plus an achromatic Phong lobe.
    LambertPhong {
        diffuse_color: Color,
        kd: f32,
        /// Specular reflection coefficient
        ks: f32,
        exponent: f32,
    },

    /// Microfacet specular (GGX, Schlick Fresnel, Smith) over Lambert diffuse.
    CookTorrance {
        albedo: Color,
        /// 0 = dielectric, anything else = conductor
        metalness: f32,
        /// [0, 1], smooth to rough
        roughness: f32,
    },
}

impl Material {
    pub fn solid_color(color: Color) -> Self {
        Material::SolidColor { color }
    }

    pub fn lambert(diffuse_color: Color, kd: f32) -> Self {
        Material::Lambert { diffuse_color, kd }
    }

    pub fn lambert_phong(diffuse_color: Color, kd: f32, ks: f32, exponent: f32) -> Self {
        Material::LambertPhong {
            diffuse_color,
            kd,
            ks,
            exponent,
        }
    }

    pub fn cook_torrance(albedo: Color, metalness: f32, roughness: f32) -> Self {
        Material::CookTorrance {
            albedo,
            metalness,
            roughness: roughness.clamp(0.0, 1.0),
        }
    }
}

impl Default for Material {
    /// The scene's reserved material at index 0.
    fn default() -> Self {
        Material::solid_color(colors::RED)
    }
}
