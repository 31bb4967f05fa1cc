//! Building a [`Scene`] from a [`SceneDescription`].

use std::path::Path;

use luma_core::{LightKind, SceneDescription, TriangleMesh};

use crate::camera::Camera;
use crate::error::SceneError;
use crate::scene::Scene;

impl Scene {
    /// Populate a scene through the regular construction API.
    ///
    /// OBJ paths in mesh entries are resolved against `base_dir`.
    pub fn from_description(
        description: &SceneDescription,
        base_dir: &Path,
    ) -> Result<Scene, SceneError> {
        let mut scene = Scene::new();

        for material in &description.materials {
            scene.add_material(*material);
        }

        for sphere in &description.spheres {
            scene.add_sphere(sphere.origin, sphere.radius, sphere.material_index)?;
        }

        for plane in &description.planes {
            scene.add_plane(plane.origin, plane.normal, plane.material_index)?;
        }

        for (index, entry) in description.meshes.iter().enumerate() {
            let data = entry.source.load(base_dir)?;
            let mut mesh = TriangleMesh::new(
                data.positions,
                data.indices,
                entry.cull_mode,
                entry.material_index,
            )
            .map_err(|source| SceneError::Mesh { index, source })?;

            mesh.scale(entry.scale);
            mesh.rotate_y(entry.rotation_y);
            mesh.translate(entry.translation);
            mesh.update_transforms();

            scene.add_mesh(mesh)?;
        }

        for light in &description.lights {
            match light.kind {
                LightKind::Point { origin } => {
                    scene.add_point_light(origin, light.intensity, light.color);
                }
                LightKind::Directional { direction } => {
                    scene.add_directional_light(direction, light.intensity, light.color);
                }
            }
        }

        *scene.camera_mut() = Camera::from_description(&description.camera);

        log::debug!(
            "Built scene: {} materials, {} spheres, {} planes, {} meshes, {} lights",
            scene.materials().len(),
            scene.spheres().len(),
            scene.planes().len(),
            scene.meshes().len(),
            scene.lights().len()
        );

        Ok(scene)
    }
}
