//! Scene files: a scene description plus optional render settings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use luma_core::SceneDescription;
use luma_renderer::RenderConfig;
use serde::Deserialize;

/// On-disk JSON layout. Render settings sit in a `render` block next to the
/// scene description fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(flatten)]
    pub scene: SceneDescription,
}

pub fn parse_scene_file(json: &str) -> Result<SceneFile> {
    serde_json::from_str(json).context("Invalid scene file")
}

pub fn load_scene_file(path: &Path) -> Result<SceneFile> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file {}", path.display()))?;
    let file = parse_scene_file(&json).with_context(|| format!("In {}", path.display()))?;

    log::info!(
        "Loaded {}: {} spheres, {} planes, {} meshes, {} lights",
        path.display(),
        file.scene.spheres.len(),
        file.scene.planes.len(),
        file.scene.meshes.len(),
        file.scene.lights.len()
    );

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use luma_renderer::{LightingMode, ToneMap};

    #[test]
    fn test_scene_file_with_render_block() {
        let json = r#"{
            "render": { "width": 320, "height": 240, "lighting_mode": "observed_area", "shadows_enabled": false },
            "camera": { "origin": [0, 1, -5], "fov_angle": 45 },
            "spheres": [ { "origin": [0, 1, 0], "radius": 0.75 } ],
            "lights": [ { "type": "point", "origin": [0, 5, -5], "intensity": 70, "color": [1, 1, 1] } ]
        }"#;
        let file = parse_scene_file(json).unwrap();

        assert_eq!(file.render.width, 320);
        assert_eq!(file.render.height, 240);
        assert_eq!(file.render.lighting_mode, LightingMode::ObservedArea);
        assert!(!file.render.shadows_enabled);
        assert_eq!(file.render.tone_map, ToneMap::Clamp);
        assert_eq!(file.scene.camera.fov_angle, 45.0);
        assert_eq!(file.scene.spheres.len(), 1);
        assert_eq!(file.scene.lights.len(), 1);
    }

    #[test]
    fn test_scene_file_without_render_block() {
        let file = parse_scene_file(r#"{ "spheres": [] }"#).unwrap();
        assert_eq!(file.render, RenderConfig::default());
    }

    #[test]
    fn test_missing_scene_file() {
        let err = load_scene_file(Path::new("no/such/scene.json")).unwrap_err();
        assert!(err.to_string().contains("no/such/scene.json"));
    }
}
