//! Error types for scene loading and mesh validation.

use std::path::PathBuf;

use thiserror::Error;

/// Broken mesh invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("Index count {len} is not a multiple of 3")]
    MalformedIndices { len: usize },

    #[error("Vertex index {index} out of bounds (vertex count: {vertex_count})")]
    IndexOutOfBounds { index: u32, vertex_count: usize },

    #[error("World-space buffers are stale; call update_transforms() before rendering")]
    StaleTransforms,
}

/// Errors that can occur while loading scene files and geometry.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("OBJ error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("No models found in OBJ file {0}")]
    EmptyObj(PathBuf),

    #[error("Invalid mesh: {0}")]
    Mesh(#[from] MeshError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;
