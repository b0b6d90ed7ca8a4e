//! JSON scene descriptions.
//!
//! A description is the serialized form of a [`Scene`]. Vectors are written
//! as `[x, y, z]` arrays and sphere material fields fall back to the
//! [`Material`] defaults when omitted:
//!
//! ```json
//! {
//!   "camera": { "origin": [0, 1.8, 10], "look_at": [0, 3, 0], "field_of_view": 45 },
//!   "lights": [[-30, -10, 20]],
//!   "objects": [
//!     { "type": "sphere", "center": [0, 3.5, -3], "radius": 3, "color": [155, 200, 155] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use glint_math::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::SceneResult;
use crate::{Camera, Material, Scene, Sphere};

/// Serialized camera.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraDescription {
    pub origin: [f64; 3],
    pub look_at: [f64; 3],
    /// Degrees
    pub field_of_view: f64,
}

/// Serialized sphere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereDescription {
    pub center: [f64; 3],
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default)]
    pub color: [f64; 3],
    #[serde(default = "default_specular")]
    pub specular: f64,
    #[serde(default = "default_lambert")]
    pub lambert: f64,
    #[serde(default = "default_ambient")]
    pub ambient: f64,
}

fn default_radius() -> f64 {
    1.0
}

fn default_specular() -> f64 {
    Material::DEFAULT_SPECULAR
}

fn default_lambert() -> f64 {
    Material::DEFAULT_LAMBERT
}

fn default_ambient() -> f64 {
    Material::DEFAULT_AMBIENT
}

/// Serialized scene object, tagged by primitive type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectDescription {
    Sphere(SphereDescription),
}

/// Serialized scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    pub camera: CameraDescription,
    #[serde(default)]
    pub lights: Vec<[f64; 3]>,
    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
}

impl SceneDescription {
    /// Parse a description from JSON text.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the description as pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build and validate the scene.
    ///
    /// Fails on the first invalid sphere or on a degenerate camera.
    pub fn into_scene(self) -> SceneResult<Scene> {
        let camera = Camera::new(
            Vector3::from_array(self.camera.origin),
            Vector3::from_array(self.camera.look_at),
            self.camera.field_of_view,
        );

        let mut scene = Scene::new(camera);

        for light in self.lights {
            scene.add_light(Vector3::from_array(light));
        }

        for object in self.objects {
            match object {
                ObjectDescription::Sphere(sphere) => {
                    let material = Material::new(
                        Vector3::from_array(sphere.color),
                        sphere.specular,
                        sphere.lambert,
                        sphere.ambient,
                    );
                    let shape = Sphere::new(Vector3::from_array(sphere.center), sphere.radius, material)?;
                    scene.add_object(Box::new(shape));
                }
            }
        }

        scene.validate()?;

        log::debug!(
            "Built scene with {} lights and {} objects",
            scene.light_count(),
            scene.object_count()
        );

        Ok(scene)
    }
}

/// Load a JSON scene file and build the scene.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    log::info!("Loading scene from {}", path.display());

    let json = fs::read_to_string(path)?;
    SceneDescription::from_json_str(&json)?.into_scene()
}

/// The scene rendered when no scene file is given.
///
/// A large green sphere with two small satellites, lit from the lower left.
pub fn demo_scene() -> SceneDescription {
    SceneDescription {
        camera: CameraDescription {
            origin: [0.0, 1.8, 10.0],
            look_at: [0.0, 3.0, 0.0],
            field_of_view: 45.0,
        },
        lights: vec![[-30.0, -10.0, 20.0]],
        objects: vec![
            ObjectDescription::Sphere(SphereDescription {
                center: [0.0, 3.5, -3.0],
                radius: 3.0,
                color: [155.0, 200.0, 155.0],
                specular: 0.2,
                lambert: 0.7,
                ambient: 0.1,
            }),
            ObjectDescription::Sphere(SphereDescription {
                center: [-4.0, 2.0, -1.0],
                radius: 0.2,
                color: [155.0, 155.0, 155.0],
                specular: 0.1,
                lambert: 0.9,
                ambient: 0.0,
            }),
            ObjectDescription::Sphere(SphereDescription {
                center: [-4.0, 3.0, -1.0],
                radius: 0.1,
                color: [255.0, 255.0, 255.0],
                specular: 0.2,
                lambert: 0.7,
                ambient: 0.1,
            }),
        ],
    }
}
