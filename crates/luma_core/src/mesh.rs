//! Indexed triangle meshes with cached world-space buffers.
//!
//! A mesh stores object-space positions, one index triple per triangle and
//! one face normal per triangle. Rendering never reads the object-space data:
//! hit tests walk `transformed_positions` / `transformed_normals`, which are
//! rebuilt by [`TriangleMesh::update_transforms`] whenever the model
//! transform changes.

use luma_math::{Mat4, Mat4Ext, Vec3};

use crate::error::MeshError;
use crate::triangle::{face_normal, CullMode, Triangle};

/// An indexed triangle mesh sharing one material and cull mode.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    /// Object-space vertex positions
    pub positions: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,

    /// Object-space face normals, one per triangle
    pub normals: Vec<Vec3>,

    pub cull_mode: CullMode,
    pub material_index: usize,

    rotation: Mat4,
    translation: Mat4,
    scale: Mat4,

    transformed_positions: Vec<Vec3>,
    transformed_normals: Vec<Vec3>,
}

impl TriangleMesh {
    /// Create an empty mesh to be filled in by the caller.
    pub fn empty(cull_mode: CullMode, material_index: usize) -> Self {
        Self {
            positions: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
            cull_mode,
            material_index,
            rotation: Mat4::IDENTITY,
            translation: Mat4::IDENTITY,
            scale: Mat4::IDENTITY,
            transformed_positions: Vec::new(),
            transformed_normals: Vec::new(),
        }
    }

    /// Create a mesh from parsed arrays, computing normals and world-space buffers.
    pub fn new(
        positions: Vec<Vec3>,
        indices: Vec<u32>,
        cull_mode: CullMode,
        material_index: usize,
    ) -> Result<Self, MeshError> {
        let mut mesh = Self::empty(cull_mode, material_index);
        mesh.positions = positions;
        mesh.indices = indices;
        mesh.check_indices()?;
        mesh.calculate_normals();
        mesh.update_transforms();
        Ok(mesh)
    }

    /// Recompute one face normal per index triple from its winding.
    pub fn calculate_normals(&mut self) {
        self.normals.clear();
        self.normals.reserve(self.indices.len() / 3);

        for face in self.indices.chunks_exact(3) {
            let vertex = |i: u32| self.positions.get(i as usize).copied();
            let (Some(p0), Some(p1), Some(p2)) = (vertex(face[0]), vertex(face[1]), vertex(face[2]))
            else {
                log::warn!(
                    "Invalid triangle indices: [{}, {}, {}], vertex count: {}",
                    face[0],
                    face[1],
                    face[2],
                    self.positions.len()
                );
                self.normals.push(Vec3::ZERO);
                continue;
            };

            let normal = face_normal(p0, p1, p2);
            if normal == Vec3::ZERO {
                log::warn!(
                    "Degenerate triangle [{}, {}, {}] has no normal; it will never be hit",
                    face[0],
                    face[1],
                    face[2]
                );
            }
            self.normals.push(normal);
        }
    }

    /// Append a single triangle, optionally skipping the world-space rebuild
    /// when many triangles are added in a row.
    pub fn append_triangle(&mut self, triangle: &Triangle, ignore_transform_update: bool) {
        let start = self.positions.len() as u32;

        self.positions.extend([triangle.v0, triangle.v1, triangle.v2]);
        self.indices.extend([start, start + 1, start + 2]);
        self.normals.push(triangle.normal);

        if !ignore_transform_update {
            self.update_transforms();
        }
    }

    /// Set the translation part of the model transform.
    pub fn translate(&mut self, translation: Vec3) {
        self.translation = Mat4::from_translation(translation);
    }

    /// Set the rotation part of the model transform (yaw, in degrees).
    pub fn rotate_y(&mut self, degrees: f32) {
        self.rotation = Mat4::from_rotation_y(degrees.to_radians());
    }

    /// Set the scale part of the model transform.
    pub fn scale(&mut self, scale: Vec3) {
        self.scale = Mat4::from_scale(scale);
    }

    /// The model transform: scale, then rotation, then translation.
    pub fn transform(&self) -> Mat4 {
        self.translation * self.rotation * self.scale
    }

    /// Rebuild the world-space positions and normals from the model transform.
    pub fn update_transforms(&mut self) {
        let transform = self.transform();

        self.transformed_positions.clear();
        self.transformed_positions
            .extend(self.positions.iter().map(|&p| transform.transform_point3(p)));

        self.transformed_normals.clear();
        self.transformed_normals
            .extend(self.normals.iter().map(|&n| transform.transform_normal(n)));

        log::debug!(
            "Updated mesh transforms: {} vertices, {} triangles",
            self.transformed_positions.len(),
            self.transformed_normals.len()
        );
    }

    /// World-space positions (valid after `update_transforms`).
    pub fn transformed_positions(&self) -> &[Vec3] {
        &self.transformed_positions
    }

    /// World-space face normals (valid after `update_transforms`).
    pub fn transformed_normals(&self) -> &[Vec3] {
        &self.transformed_normals
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Whether the world-space buffers match the current geometry.
    pub fn transforms_current(&self) -> bool {
        self.transformed_positions.len() == self.positions.len()
            && self.transformed_normals.len() == self.triangle_count()
    }

    /// World-space view of triangle `index`, or `None` if it is out of range
    /// or the world-space buffers do not cover it.
    #[inline]
    pub fn world_triangle(&self, index: usize) -> Option<Triangle> {
        let base = index * 3;
        let corner = |k: usize| {
            let vertex = *self.indices.get(base + k)? as usize;
            self.transformed_positions.get(vertex).copied()
        };
        Some(Triangle::with_normal(
            corner(0)?,
            corner(1)?,
            corner(2)?,
            *self.transformed_normals.get(index)?,
            self.cull_mode,
            self.material_index,
        ))
    }

    /// Iterate all triangles in world space.
    ///
    /// Yields nothing while the world-space buffers are stale, so a mesh
    /// edited without `update_transforms` is never hit.
    pub fn world_triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        let count = if self.transforms_current() {
            self.triangle_count()
        } else {
            0
        };
        (0..count).filter_map(move |i| self.world_triangle(i))
    }

    /// Check the index buffer against the vertex buffer.
    pub fn check_indices(&self) -> Result<(), MeshError> {
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::MalformedIndices {
                len: self.indices.len(),
            });
        }

        let vertex_count = self.positions.len();
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfBounds {
                index,
                vertex_count,
            });
        }

        Ok(())
    }

    /// Check every mesh invariant the hit tests rely on.
    pub fn validate(&self) -> Result<(), MeshError> {
        self.check_indices()?;

        if self.normals.len() != self.triangle_count() || !self.transforms_current() {
            return Err(MeshError::StaleTransforms);
        }

        Ok(())
    }
}
