//! Glint math - vector algebra and rays for the tracer.
//!
//! `Vector3` is glam's double precision vector. It is used uniformly as a
//! point, a direction and an RGB color (0-255 per channel).

// Re-export glam for convenience
pub use glam::DVec3;

mod ray;
mod vector;

pub use ray::Ray;
pub use vector::{add, add3, cross, dot, length, normalize, reflect, scale, subtract, Vector3, VectorOps};
pub use vector::{UP, WHITE, ZERO};
