//! Luma Core - scene data model for the Luma ray tracer.
//!
//! This crate provides:
//!
//! - **Geometry**: `Sphere`, `Plane`, `Triangle`, `TriangleMesh` with cull modes
//!   and cached world-space mesh buffers
//! - **Shading data**: `Material` parameters and `Light`s
//! - **Scene files**: JSON `SceneDescription` loading and OBJ ingestion
//!
//! # Example
//!
//! ```ignore
//! use luma_core::load_scene;
//!
//! let description = load_scene("scenes/spheres.json")?;
//! println!("{} spheres, {} lights", description.spheres.len(), description.lights.len());
//! ```

pub mod description;
pub mod error;
pub mod light;
pub mod loader;
pub mod material;
pub mod mesh;
pub mod primitives;
pub mod triangle;

// Re-export commonly used types
pub use description::{CameraDescription, MeshDescription, MeshSource, SceneDescription};
pub use error::{LoadError, LoadResult, MeshError};
pub use light::{Light, LightKind};
pub use loader::{load_obj, load_scene, parse_scene, MeshData};
pub use material::{colors, Color, Material};
pub use mesh::TriangleMesh;
pub use primitives::{Plane, Sphere};
pub use triangle::{face_normal, CullMode, Triangle};
