//! Pure vector operations.
//!
//! Every operation takes its inputs by value and returns a fresh vector;
//! nothing is mutated in place. The free functions and the [`VectorOps`]
//! methods are the same operations, pick whichever reads better.

use glam::DVec3;

/// Point, direction or RGB color.
pub type Vector3 = DVec3;

/// The origin / black.
pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

/// World up axis used to build the camera basis.
pub const UP: Vector3 = Vector3::new(0.0, 1.0, 0.0);

/// Background color for rays that escape the scene.
pub const WHITE: Vector3 = Vector3::new(255.0, 255.0, 255.0);

/// Operations that glam either lacks or names differently.
pub trait VectorOps {
    /// Componentwise sum of three vectors.
    fn add3(self, a: Vector3, b: Vector3) -> Vector3;

    /// Multiply every component by `t`.
    fn scale(self, t: f64) -> Vector3;

    /// Mirror `self` about the plane whose unit normal is `normal`.
    ///
    /// `normal` must already be unit length; it is not re-normalized.
    fn reflect_through(self, normal: Vector3) -> Vector3;
}

impl VectorOps for Vector3 {
    #[inline]
    fn add3(self, a: Vector3, b: Vector3) -> Vector3 {
        Vector3::new(self.x + a.x + b.x, self.y + a.y + b.y, self.z + a.z + b.z)
    }

    #[inline]
    fn scale(self, t: f64) -> Vector3 {
        Vector3::new(self.x * t, self.y * t, self.z * t)
    }

    #[inline]
    fn reflect_through(self, normal: Vector3) -> Vector3 {
        let d = normal.scale(self.dot(normal));
        self - d.scale(2.0)
    }
}

#[inline]
pub fn add(a: Vector3, b: Vector3) -> Vector3 {
    a + b
}

#[inline]
pub fn add3(a: Vector3, b: Vector3, c: Vector3) -> Vector3 {
    a.add3(b, c)
}

#[inline]
pub fn subtract(a: Vector3, b: Vector3) -> Vector3 {
    a - b
}

#[inline]
pub fn scale(v: Vector3, t: f64) -> Vector3 {
    v.scale(t)
}

#[inline]
pub fn dot(a: Vector3, b: Vector3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Right-handed cross product.
#[inline]
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

#[inline]
pub fn length(v: Vector3) -> f64 {
    dot(v, v).sqrt()
}

/// Scale `v` to unit length.
///
/// Not guarded: the zero vector yields non-finite components. Callers that
/// can see degenerate input validate it before it reaches here.
#[inline]
pub fn normalize(v: Vector3) -> Vector3 {
    v.scale(1.0 / length(v))
}

/// See [`VectorOps::reflect_through`].
#[inline]
pub fn reflect(v: Vector3, normal: Vector3) -> Vector3 {
    v.reflect_through(normal)
}
