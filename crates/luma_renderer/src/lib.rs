//! Luma Renderer - CPU Whitted-style ray tracing
//!
//! One primary ray per pixel, the nearest hit shaded against every light,
//! with an any-hit shadow ray per light. Rows are rendered in parallel with
//! rayon.
//!
//! # Example
//!
//! ```ignore
//! use luma_renderer::{RenderConfig, Renderer, Scene};
//!
//! let mut scene = Scene::new();
//! let red = scene.add_material(Material::lambert(colors::RED, 1.0));
//! scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, red)?;
//! scene.add_point_light(Vec3::new(0.0, 5.0, 0.0), 50.0, colors::WHITE);
//!
//! let image = Renderer::new(RenderConfig::default()).render(&mut scene)?;
//! ```

pub mod brdf;
mod camera;
mod error;
mod hittable;
mod import;
mod material;
mod mesh;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub use camera::{Camera, CameraInput, Viewport, MAX_FRAME_ELAPSED, MOVEMENT_SPEED};
pub use error::{RenderError, SceneError};
pub use hittable::{HitMode, HitRecord, Hittable};
pub use material::Shade;
pub use renderer::{
    quantize, ImageBuffer, LightingMode, RenderConfig, Renderer, ToneMap, SHADOW_BIAS,
};
pub use scene::Scene;

/// Re-export the scene data model and math types
pub use luma_core::{colors, Color, CullMode, Light, Material, TriangleMesh};
pub use luma_math::{Ray, Vec3};
