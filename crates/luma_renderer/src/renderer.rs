//! Whitted-style pixel loop: primary visibility, shadow rays and direct lighting.
//!
//! Every pixel is independent. A frame is split into image rows that rayon
//! workers render straight into their own slice of the output buffer.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use luma_core::Color;
use luma_math::{Interval, Ray, DEFAULT_T_MIN};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::camera::Viewport;
use crate::error::RenderError;
use crate::material::Shade;
use crate::scene::Scene;

/// Offset along the surface normal for shadow ray origins.
pub const SHADOW_BIAS: f32 = 1e-4;

/// What each light contributes to a shaded pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingMode {
    /// Cosine between normal and light direction, in grayscale
    ObservedArea,
    /// Incident light only, ignoring the surface
    Radiance,
    /// Material response only
    Brdf,
    /// Radiance × BRDF × cosine
    #[default]
    Combined,
}

impl LightingMode {
    /// The mode after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            LightingMode::ObservedArea => LightingMode::Radiance,
            LightingMode::Radiance => LightingMode::Brdf,
            LightingMode::Brdf => LightingMode::Combined,
            LightingMode::Combined => LightingMode::ObservedArea,
        }
    }
}

impl fmt::Display for LightingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LightingMode::ObservedArea => "observed area",
            LightingMode::Radiance => "radiance",
            LightingMode::Brdf => "BRDF",
            LightingMode::Combined => "combined",
        };
        f.write_str(name)
    }
}

/// Mapping from unbounded linear color to displayable [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneMap {
    /// Clip each channel independently
    #[default]
    Clamp,
    /// Scale all channels down by the largest one when it exceeds 1, keeping hue
    MaxToOne,
}

impl ToneMap {
    #[inline]
    pub fn apply(self, color: Color) -> Color {
        match self {
            ToneMap::Clamp => {
                let unit = Interval::UNIT;
                Color::new(unit.clamp(color.x), unit.clamp(color.y), unit.clamp(color.z))
            }
            ToneMap::MaxToOne => {
                let max = color.max_element();
                let scaled = if max > 1.0 { color / max } else { color };
                scaled.max(Color::ZERO)
            }
        }
    }
}

/// Quantize a tone-mapped color to 8 bits per channel.
#[inline]
pub fn quantize(color: Color) -> [u8; 3] {
    [
        (color.x * 255.0) as u8,
        (color.y * 255.0) as u8,
        (color.z * 255.0) as u8,
    ]
}

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub lighting_mode: LightingMode,
    pub shadows_enabled: bool,
    pub tone_map: ToneMap,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            lighting_mode: LightingMode::default(),
            shadows_enabled: true,
            tone_map: ToneMap::default(),
        }
    }
}

/// Tone-mapped render output, row-major, top row first.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// The 8-bit RGB triplet for pixel (x, y).
    pub fn rgb8(&self, x: u32, y: u32) -> [u8; 3] {
        quantize(self.get(x, y))
    }

    /// Packed RGB bytes for display or saving.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&color| quantize(color)).collect()
    }
}

/// The renderer: a configuration plus the per-pixel shading pipeline.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.config.width = width;
        self.config.height = height;
    }

    /// Switch to the next lighting mode and return it.
    pub fn cycle_lighting_mode(&mut self) -> LightingMode {
        self.config.lighting_mode = self.config.lighting_mode.next();
        log::info!("Lighting mode: {}", self.config.lighting_mode);
        self.config.lighting_mode
    }

    /// Flip shadow testing on or off and return the new state.
    pub fn toggle_shadows(&mut self) -> bool {
        self.config.shadows_enabled = !self.config.shadows_enabled;
        log::info!(
            "Shadows {}",
            if self.config.shadows_enabled { "enabled" } else { "disabled" }
        );
        self.config.shadows_enabled
    }

    /// Render one frame.
    ///
    /// Validates the scene and refreshes the camera transform first, so setup
    /// mistakes surface here rather than as wrong pixels.
    pub fn render(&self, scene: &mut Scene) -> Result<ImageBuffer, RenderError> {
        self.render_cancellable(scene, &AtomicBool::new(false))
    }

    /// Render one frame, giving up between rows once `cancel` is set.
    pub fn render_cancellable(
        &self,
        scene: &mut Scene,
        cancel: &AtomicBool,
    ) -> Result<ImageBuffer, RenderError> {
        let RenderConfig { width, height, .. } = self.config;
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyTarget { width, height });
        }

        scene.validate()?;
        scene.camera_mut().calculate_camera_to_world();

        let scene: &Scene = scene;
        let viewport = scene.camera().viewport(width, height);
        let tone_map = self.config.tone_map;
        let mut image = ImageBuffer::new(width, height);

        let start = Instant::now();

        image
            .pixels
            .par_chunks_mut(width as usize)
            .enumerate()
            .try_for_each(|(py, row)| {
                if cancel.load(Ordering::Relaxed) {
                    return Err(RenderError::Cancelled);
                }
                for (px, pixel) in row.iter_mut().enumerate() {
                    let color = self.shade_pixel(scene, &viewport, px as u32, py as u32);
                    *pixel = tone_map.apply(color);
                }
                Ok(())
            })?;

        log::info!(
            "Rendered {}x{} ({} mode, shadows {}) in {:.2?}",
            width,
            height,
            self.config.lighting_mode,
            if self.config.shadows_enabled { "on" } else { "off" },
            start.elapsed()
        );

        Ok(image)
    }

    /// The pixel sink: 8-bit RGB for pixel `(px, py)`.
    ///
    /// `scene` must be validated and `viewport` taken after the camera
    /// transform was refreshed.
    pub fn render_pixel(&self, scene: &Scene, viewport: &Viewport, px: u32, py: u32) -> [u8; 3] {
        let color = self.shade_pixel(scene, viewport, px, py);
        quantize(self.config.tone_map.apply(color))
    }

    /// Unmapped linear color for pixel `(px, py)`; black when nothing is hit.
    pub fn shade_pixel(&self, scene: &Scene, viewport: &Viewport, px: u32, py: u32) -> Color {
        let ray = viewport.primary_ray(px, py);
        let hit = scene.closest_hit(&ray);
        if !hit.did_hit {
            return Color::ZERO;
        }

        let view_dir = -ray.direction;
        let material = scene.material(hit.material_index);
        let shadow_origin = hit.origin + hit.normal * SHADOW_BIAS;

        let mut color = Color::ZERO;
        for light in scene.lights() {
            let Some((light_dir, distance)) = light.direction_from(shadow_origin) else {
                continue;
            };

            if self.config.shadows_enabled {
                let shadow_ray = Ray::bounded(shadow_origin, light_dir, DEFAULT_T_MIN, distance);
                if scene.any_hit(&shadow_ray) {
                    continue;
                }
            }

            let observed_area = hit.normal.dot(light_dir);

            match self.config.lighting_mode {
                LightingMode::ObservedArea => {
                    if observed_area < 0.0 {
                        continue;
                    }
                    color += Color::splat(observed_area);
                }
                LightingMode::Radiance => {
                    color += light.radiance(shadow_origin);
                }
                LightingMode::Brdf => {
                    color += material.shade(&hit, light_dir, view_dir);
                }
                LightingMode::Combined => {
                    if observed_area < 0.0 {
                        continue;
                    }
                    color += light.radiance(shadow_origin)
                        * material.shade(&hit, light_dir, view_dir)
                        * observed_area;
                }
            }
        }

        color
    }
}
