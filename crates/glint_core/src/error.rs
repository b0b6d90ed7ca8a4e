//! Errors raised while building a scene.

use thiserror::Error;

/// Errors that make a scene unrenderable.
///
/// All of them surface while the scene is assembled or checked, never
/// while pixels are being traced.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Invalid geometry: sphere radius must be a finite number greater than 0, got {radius}")]
    InvalidGeometry { radius: f64 },

    #[error("Invalid material: {field} must be a finite number in [0, 1], got {value}")]
    InvalidMaterial { field: &'static str, value: f64 },

    #[error("Degenerate camera: {0}")]
    DegenerateCamera(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
