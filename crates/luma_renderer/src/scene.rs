//! The renderable scene and its hit queries.
//!
//! A [`Scene`] owns every primitive, light and material. Geometry refers to
//! materials by index only; index 0 is always present and holds the default
//! solid red material. Material indices are checked when geometry is added,
//! and [`Scene::validate`] re-checks everything (including mesh buffers the
//! caller may have edited through a handle) before a frame is rendered.

use luma_core::{CullMode, Light, Material, Plane, Sphere, TriangleMesh};
use luma_math::{Ray, Vec3};

use crate::camera::Camera;
use crate::error::SceneError;
use crate::hittable::{HitRecord, Hittable};

const INITIAL_CAPACITY: usize = 32;

pub struct Scene {
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    meshes: Vec<TriangleMesh>,
    lights: Vec<Light>,
    materials: Vec<Material>,
    camera: Camera,
}

impl Scene {
    /// Create an empty scene with the default material at index 0.
    pub fn new() -> Self {
        let mut materials = Vec::with_capacity(INITIAL_CAPACITY);
        materials.push(Material::default());

        Self {
            spheres: Vec::with_capacity(INITIAL_CAPACITY),
            planes: Vec::with_capacity(INITIAL_CAPACITY),
            meshes: Vec::with_capacity(INITIAL_CAPACITY),
            lights: Vec::with_capacity(INITIAL_CAPACITY),
            materials,
            camera: Camera::default(),
        }
    }

    fn check_material(&self, index: usize) -> Result<(), SceneError> {
        if index < self.materials.len() {
            Ok(())
        } else {
            Err(SceneError::MaterialOutOfRange {
                index,
                count: self.materials.len(),
            })
        }
    }

    pub fn add_sphere(
        &mut self,
        origin: Vec3,
        radius: f32,
        material_index: usize,
    ) -> Result<&mut Sphere, SceneError> {
        self.check_material(material_index)?;
        self.spheres.push(Sphere::new(origin, radius, material_index));
        let index = self.spheres.len() - 1;
        Ok(&mut self.spheres[index])
    }

    pub fn add_plane(
        &mut self,
        origin: Vec3,
        normal: Vec3,
        material_index: usize,
    ) -> Result<&mut Plane, SceneError> {
        self.check_material(material_index)?;
        self.planes.push(Plane::new(origin, normal, material_index));
        let index = self.planes.len() - 1;
        Ok(&mut self.planes[index])
    }

    /// Add an empty mesh and hand it back for the caller to fill in.
    ///
    /// The mesh must be finalized with `update_transforms` before rendering.
    pub fn add_triangle_mesh(
        &mut self,
        cull_mode: CullMode,
        material_index: usize,
    ) -> Result<&mut TriangleMesh, SceneError> {
        self.add_mesh(TriangleMesh::empty(cull_mode, material_index))
    }

    /// Add a mesh that was built elsewhere.
    pub fn add_mesh(&mut self, mesh: TriangleMesh) -> Result<&mut TriangleMesh, SceneError> {
        self.check_material(mesh.material_index)?;
        self.meshes.push(mesh);
        let index = self.meshes.len() - 1;
        Ok(&mut self.meshes[index])
    }

    pub fn add_point_light(&mut self, origin: Vec3, intensity: f32, color: Vec3) -> &mut Light {
        self.lights.push(Light::point(origin, intensity, color));
        let index = self.lights.len() - 1;
        &mut self.lights[index]
    }

    pub fn add_directional_light(
        &mut self,
        direction: Vec3,
        intensity: f32,
        color: Vec3,
    ) -> &mut Light {
        self.lights.push(Light::directional(direction, intensity, color));
        let index = self.lights.len() - 1;
        &mut self.lights[index]
    }

    /// Append a material and return its index.
    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn meshes(&self) -> &[TriangleMesh] {
        &self.meshes
    }

    pub fn meshes_mut(&mut self) -> &mut [TriangleMesh] {
        &mut self.meshes
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Material at `index`, falling back to the default material.
    ///
    /// Validated scenes never take the fallback.
    #[inline]
    pub fn material(&self, index: usize) -> &Material {
        self.materials.get(index).unwrap_or(&self.materials[0])
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Nearest hit over every primitive; `did_hit` is false when nothing is hit.
    pub fn closest_hit(&self, ray: &Ray) -> HitRecord {
        let mut closest = HitRecord::default();
        let mut candidate = HitRecord::default();

        let primitives = self
            .spheres
            .iter()
            .map(|s| s as &dyn Hittable)
            .chain(self.planes.iter().map(|p| p as &dyn Hittable))
            .chain(self.meshes.iter().map(|m| m as &dyn Hittable));

        for primitive in primitives {
            if primitive.hit(ray, &mut candidate) && candidate.t < closest.t {
                closest = candidate;
            }
        }

        closest
    }

    /// True as soon as any primitive is hit within `ray.t`.
    pub fn any_hit(&self, ray: &Ray) -> bool {
        self.spheres.iter().any(|s| s.occludes(ray))
            || self.planes.iter().any(|p| p.occludes(ray))
            || self.meshes.iter().any(|m| m.occludes(ray))
    }

    /// Check every material index and mesh buffer.
    pub fn validate(&self) -> Result<(), SceneError> {
        let indices = self
            .spheres
            .iter()
            .map(|s| s.material_index)
            .chain(self.planes.iter().map(|p| p.material_index))
            .chain(self.meshes.iter().map(|m| m.material_index));

        for index in indices {
            self.check_material(index)?;
        }

        for (index, mesh) in self.meshes.iter().enumerate() {
            mesh.validate()
                .map_err(|source| SceneError::Mesh { index, source })?;
        }

        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
