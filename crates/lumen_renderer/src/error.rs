//! Errors raised while assembling a scene.

use thiserror::Error;

/// Errors that can occur while building scene acceleration structures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("Missing bounding box: unbounded objects cannot be placed in a BVH")]
    MissingBoundingBox,

    #[error("Cannot build a BVH from an empty object list")]
    EmptyBvh,
}

pub type SceneResult<T> = Result<T, SceneError>;
