use crate::Vector3;

/// A ray in 3D space with an origin and a direction.
///
/// Camera rays, shadow rays and reflection rays are all built fresh for a
/// single query and thrown away. The direction is expected to be unit
/// length; nothing here enforces it, the intersection math simply assumes it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}
