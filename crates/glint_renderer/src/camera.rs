//! Primary ray generation.

use glint_core::Camera;
use glint_math::{cross, normalize, Ray, Vector3, VectorOps, UP};

/// Camera basis and image plane for one output resolution.
///
/// Built once per render; `ray` is then a pure function of the pixel.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    origin: Vector3,

    // Camera basis
    eye: Vector3,
    right: Vector3,
    up: Vector3,

    // Image plane at unit distance along `eye`
    half_width: f64,
    half_height: f64,
    pixel_width: f64,
    pixel_height: f64,
}

impl Viewport {
    /// Lay out the image plane for a `width` x `height` image.
    ///
    /// The camera must have passed `Camera::validate` and both dimensions
    /// must be at least 2, otherwise the basis or the pixel size is not
    /// finite.
    pub fn new(camera: &Camera, width: u32, height: u32) -> Self {
        // Calculate camera basis vectors
        let eye = normalize(camera.look_at - camera.origin);
        let right = normalize(cross(eye, UP));
        let up = normalize(cross(right, eye));

        // Half the field of view, in radians
        let fov_radians = std::f64::consts::PI * (camera.field_of_view / 2.0) / 180.0;
        let height_width_ratio = height as f64 / width as f64;
        let half_width = fov_radians.tan();
        let half_height = height_width_ratio * half_width;

        let pixel_width = (half_width * 2.0) / (width as f64 - 1.0);
        let pixel_height = (half_height * 2.0) / (height as f64 - 1.0);

        Self {
            origin: camera.origin,
            eye,
            right,
            up,
            half_width,
            half_height,
            pixel_width,
            pixel_height,
        }
    }

    /// Generate the camera ray through pixel (x, y).
    ///
    /// x runs along `right` and y along `up`, so y = 0 is the bottom edge
    /// of the view.
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        let xcomp = self.right.scale(x as f64 * self.pixel_width - self.half_width);
        let ycomp = self.up.scale(y as f64 * self.pixel_height - self.half_height);

        Ray::new(self.origin, normalize(self.eye.add3(xcomp, ycomp)))
    }

    /// Get the unit view direction.
    pub fn eye(&self) -> Vector3 {
        self.eye
    }

    /// Get the unit right and up vectors.
    pub fn basis(&self) -> (Vector3, Vector3) {
        (self.right, self.up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::{dot, length};

    const EPS: f64 = 1e-12;

    #[test]
    fn test_basis_is_orthonormal() {
        let camera = Camera::new(Vector3::new(0.0, 1.8, 10.0), Vector3::new(0.0, 3.0, 0.0), 45.0);
        let viewport = Viewport::new(&camera, 64, 48);
        let (right, up) = viewport.basis();
        let eye = viewport.eye();

        for v in [eye, right, up] {
            assert!((length(v) - 1.0).abs() < EPS);
        }
        assert!(dot(eye, right).abs() < EPS);
        assert!(dot(eye, up).abs() < EPS);
        assert!(dot(right, up).abs() < EPS);
        assert!(up.y > 0.0);
    }

    #[test]
    fn test_corner_and_center_rays() {
        // 90 degree fov puts the image plane corners at +-1
        let camera = Camera::new(Vector3::new(0.0, 0.0, 10.0), Vector3::ZERO, 90.0);
        let viewport = Viewport::new(&camera, 3, 3);

        let center = viewport.ray(1, 1);
        assert_eq!(center.origin, camera.origin);
        assert!((center.direction - Vector3::new(0.0, 0.0, -1.0)).length() < EPS);

        let corner = viewport.ray(0, 0);
        let expected = normalize(Vector3::new(-1.0, -1.0, -1.0));
        assert!((corner.direction - expected).length() < EPS);

        let corner = viewport.ray(2, 2);
        let expected = normalize(Vector3::new(1.0, 1.0, -1.0));
        assert!((corner.direction - expected).length() < EPS);
    }

    #[test]
    fn test_aspect_ratio_scales_height() {
        let camera = Camera::new(Vector3::new(0.0, 0.0, 10.0), Vector3::ZERO, 90.0);
        let viewport = Viewport::new(&camera, 5, 3);

        // Top-right corner: x at +1, y at +3/5
        let corner = viewport.ray(4, 2);
        let expected = normalize(Vector3::new(1.0, 0.6, -1.0));
        assert!((corner.direction - expected).length() < 1e-9);
    }
}
