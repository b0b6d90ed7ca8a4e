//! Shape trait for ray-primitive queries.

use std::fmt;

use glint_math::{Ray, Vector3};

use crate::Material;

/// Trait for primitives that can be placed in a scene.
///
/// The intersector and the shader only talk to primitives through this
/// trait, so a new primitive is one new implementation and nothing else.
pub trait Shape: Send + Sync + fmt::Debug {
    /// Distance along `ray` to the near intersection, or `None` on a miss.
    ///
    /// The distance may be negative when the near intersection lies behind
    /// the ray origin. Callers decide what to do with that.
    fn intersect(&self, ray: &Ray) -> Option<f64>;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: Vector3) -> Vector3;

    /// Shading coefficients of the surface.
    fn material(&self) -> &Material;
}
