//! Scene configuration and render errors.

use luma_core::{LoadError, MeshError};
use thiserror::Error;

/// Scene setup mistakes, reported when the scene is built or validated,
/// never per pixel.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Material index {index} out of range (scene has {count} materials)")]
    MaterialOutOfRange { index: usize, count: usize },

    #[error("Mesh {index}: {source}")]
    Mesh {
        index: usize,
        #[source]
        source: MeshError,
    },

    #[error("Failed to load scene data: {0}")]
    Load(#[from] LoadError),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Render target is empty ({width}x{height})")]
    EmptyTarget { width: u32, height: u32 },

    #[error("Render cancelled")]
    Cancelled,

    #[error(transparent)]
    Scene(#[from] SceneError),
}
