//! Sphere primitive for ray tracing.

use glint_math::{dot, normalize, Ray, Vector3};

use crate::{
    error::{SceneError, SceneResult},
    Material, Shape,
};

/// A sphere primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vector3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Fails with `InvalidGeometry` unless `radius` is a finite number
    /// greater than zero, and with `InvalidMaterial` if a coefficient is
    /// outside [0, 1].
    pub fn new(center: Vector3, radius: f64, material: Material) -> SceneResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SceneError::InvalidGeometry { radius });
        }
        material.validate()?;

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Get the sphere's center.
    #[inline]
    pub fn center(&self) -> Vector3 {
        self.center
    }

    /// Get the sphere's radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let to_center = self.center - ray.origin;
        let v = dot(to_center, ray.direction);
        let proj_sq = dot(to_center, to_center);
        let discriminant = self.radius * self.radius - proj_sq + v * v;

        if discriminant < 0.0 {
            return None;
        }

        // Near root only
        Some(v - discriminant.sqrt())
    }

    fn normal_at(&self, point: Vector3) -> Vector3 {
        normalize(point - self.center)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
