//! Glint Core - scene model for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Shapes**: the `Shape` capability and its `Sphere` primitive
//! - **Scene types**: `Camera`, `Light`, `Material`, `Scene`
//! - **Scene files**: JSON scene descriptions and the built-in demo scene
//!
//! # Example
//!
//! ```
//! use glint_core::{Camera, Material, Scene, Sphere};
//! use glint_math::Vector3;
//!
//! let camera = Camera::new(Vector3::new(0.0, 1.8, 10.0), Vector3::new(0.0, 3.0, 0.0), 45.0);
//! let sphere = Sphere::new(Vector3::new(0.0, 3.5, -3.0), 3.0, Material::default()).unwrap();
//!
//! let scene = Scene::new(camera)
//!     .with_light(Vector3::new(-30.0, -10.0, 20.0))
//!     .with_object(sphere);
//! assert_eq!(scene.object_count(), 1);
//! ```

pub mod description;
pub mod error;
pub mod material;
pub mod scene;
pub mod shape;
pub mod sphere;

// Re-export commonly used types
pub use description::{demo_scene, load_scene, SceneDescription};
pub use error::{SceneError, SceneResult};
pub use material::Material;
pub use scene::{Camera, Light, Scene};
pub use shape::Shape;
pub use sphere::Sphere;
