//! Scene file and OBJ loading.

use std::path::Path;

use luma_math::Vec3;

use crate::description::SceneDescription;
use crate::error::{LoadError, LoadResult};
use crate::mesh::TriangleMesh;
use crate::triangle::CullMode;

/// Raw geometry arrays as produced by a text-format loader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    /// Every 3 indices form a triangle
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Build a finalized mesh, rejecting malformed index buffers.
    pub fn into_mesh(self, cull_mode: CullMode, material_index: usize) -> LoadResult<TriangleMesh> {
        Ok(TriangleMesh::new(
            self.positions,
            self.indices,
            cull_mode,
            material_index,
        )?)
    }
}

/// Parse a JSON scene description.
pub fn parse_scene(json: &str) -> LoadResult<SceneDescription> {
    Ok(serde_json::from_str(json)?)
}

/// Load a JSON scene description from disk.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let description = parse_scene(&json)?;

    log::info!(
        "Loaded scene {}: {} materials, {} spheres, {} planes, {} meshes, {} lights",
        path.display(),
        description.materials.len(),
        description.spheres.len(),
        description.planes.len(),
        description.meshes.len(),
        description.lights.len()
    );

    Ok(description)
}

/// Load the first model of an OBJ file as triangulated position/index arrays.
pub fn load_obj<P: AsRef<Path>>(path: P) -> LoadResult<MeshData> {
    let path = path.as_ref();
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        },
    )?;

    let Some(model) = models.first() else {
        return Err(LoadError::EmptyObj(path.to_path_buf()));
    };
    if models.len() > 1 {
        log::warn!(
            "OBJ file {} has {} models, only the first is used",
            path.display(),
            models.len()
        );
    }

    let mesh = &model.mesh;
    let positions = mesh
        .positions
        .chunks_exact(3)
        .map(Vec3::from_slice)
        .collect::<Vec<_>>();

    log::info!(
        "Loaded OBJ {}: {} vertices, {} triangles",
        path.display(),
        positions.len(),
        mesh.indices.len() / 3
    );

    Ok(MeshData {
        positions,
        indices: mesh.indices.clone(),
    })
}
