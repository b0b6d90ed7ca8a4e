//! Render errors.

use glint_core::SceneError;
use thiserror::Error;

/// Errors that stop a render before any pixel is traced.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid image dimensions {width}x{height}: both must be at least 2")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
