//! Declarative scene description, as read from scene files.
//!
//! A description is application data: the renderer turns it into a `Scene`
//! through the regular construction API. Material indices in primitives
//! refer to the scene's material list, where index 0 is the reserved
//! default material and `materials[i]` lands at index `i + 1`.

use std::path::{Path, PathBuf};

use luma_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::LoadResult;
use crate::light::Light;
use crate::loader::{load_obj, MeshData};
use crate::material::Material;
use crate::primitives::{Plane, Sphere};
use crate::triangle::CullMode;

/// Initial camera placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    pub origin: Vec3,
    /// Vertical field of view in degrees
    pub fov_angle: f32,
    /// Initial pitch in radians
    pub pitch: f32,
    /// Initial yaw in radians
    pub yaw: f32,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            fov_angle: 90.0,
            pitch: 0.0,
            yaw: 0.0,
        }
    }
}

/// Where a mesh's vertex and index arrays come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeshSource {
    Inline {
        positions: Vec<Vec3>,
        indices: Vec<u32>,
    },
    Obj {
        obj: PathBuf,
    },
}

impl MeshSource {
    /// Produce the raw arrays, reading OBJ files relative to `base_dir`.
    pub fn load(&self, base_dir: &Path) -> LoadResult<MeshData> {
        match self {
            MeshSource::Inline { positions, indices } => Ok(MeshData {
                positions: positions.clone(),
                indices: indices.clone(),
            }),
            MeshSource::Obj { obj } => load_obj(base_dir.join(obj)),
        }
    }
}

/// A triangle mesh with its model transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshDescription {
    #[serde(flatten)]
    pub source: MeshSource,
    #[serde(default)]
    pub cull_mode: CullMode,
    #[serde(default)]
    pub material_index: usize,
    #[serde(default)]
    pub translation: Vec3,
    /// Yaw in degrees
    #[serde(default)]
    pub rotation_y: f32,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

/// Everything needed to populate a scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub camera: CameraDescription,
    /// Materials appended after the reserved default at index 0
    pub materials: Vec<Material>,
    pub spheres: Vec<Sphere>,
    pub planes: Vec<Plane>,
    pub meshes: Vec<MeshDescription>,
    pub lights: Vec<Light>,
}
