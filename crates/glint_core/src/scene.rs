//! Scene types for Glint.
//!
//! A scene is plain data: a camera, point lights and shapes. It is built
//! once by the caller and only read while rendering.

use glint_math::{cross, length, Vector3, UP};

use crate::error::{SceneError, SceneResult};
use crate::Shape;

/// A point light. Lights carry no color or intensity, only a position.
pub type Light = Vector3;

/// Pinhole camera looking from `origin` towards `look_at`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Eye position
    pub origin: Vector3,

    /// Point the camera looks at
    pub look_at: Vector3,

    /// Horizontal field of view in degrees
    pub field_of_view: f64,
}

impl Camera {
    /// Create a new camera.
    pub fn new(origin: Vector3, look_at: Vector3, field_of_view: f64) -> Self {
        Self {
            origin,
            look_at,
            field_of_view,
        }
    }

    /// Check that a camera basis can be built from this camera.
    ///
    /// The renderer normalizes the view direction and its cross product
    /// with the world up axis, so both must be non-zero.
    pub fn validate(&self) -> SceneResult<()> {
        if !self.origin.is_finite() || !self.look_at.is_finite() {
            return Err(SceneError::DegenerateCamera(
                "origin and look_at must be finite".to_string(),
            ));
        }

        if !self.field_of_view.is_finite()
            || self.field_of_view <= 0.0
            || self.field_of_view >= 180.0
        {
            return Err(SceneError::DegenerateCamera(format!(
                "field of view must be in (0, 180) degrees, got {}",
                self.field_of_view
            )));
        }

        let view = self.look_at - self.origin;
        if length(view) == 0.0 {
            return Err(SceneError::DegenerateCamera(
                "look_at coincides with origin".to_string(),
            ));
        }

        if length(cross(view, UP)) <= f64::EPSILON * length(view) {
            return Err(SceneError::DegenerateCamera(
                "view direction is parallel to the up axis".to_string(),
            ));
        }

        Ok(())
    }
}

/// A complete scene: camera, lights and objects.
///
/// Object order matters: when two objects are hit at the same distance the
/// one added first wins.
#[derive(Debug)]
pub struct Scene {
    /// Viewpoint
    pub camera: Camera,

    /// Point lights, in insertion order
    pub lights: Vec<Light>,

    /// Shapes, in insertion order
    pub objects: Vec<Box<dyn Shape>>,
}

impl Scene {
    /// Create an empty scene seen through `camera`.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Add a light, builder style.
    pub fn with_light(mut self, light: Light) -> Self {
        self.add_light(light);
        self
    }

    /// Add an object, builder style.
    pub fn with_object(mut self, object: impl Shape + 'static) -> Self {
        self.add_object(Box::new(object));
        self
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Add an object to the scene.
    pub fn add_object(&mut self, object: Box<dyn Shape>) {
        self.objects.push(object);
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Get the number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Check everything that must hold before the scene is rendered.
    ///
    /// Shapes validate themselves on construction, so only the camera is
    /// left to check.
    pub fn validate(&self) -> SceneResult<()> {
        self.camera.validate()?;

        if self.objects.is_empty() {
            log::warn!("Scene has no objects, every pixel will be background");
        } else if self.lights.is_empty() {
            log::warn!("Scene has no lights, only ambient and reflected color will show");
        }

        Ok(())
    }
}
