//! Glint Renderer - CPU Whitted ray tracing
//!
//! A textbook recursive ray tracer: one camera ray per pixel, Lambert
//! diffuse with hard shadows, mirror reflection and a constant ambient
//! term, with reflections cut off after a fixed depth.

mod camera;
mod error;
mod intersect;
mod renderer;
mod shade;

pub use camera::Viewport;
pub use error::{RenderError, RenderResult};
pub use intersect::{intersect_scene, Hit};
pub use renderer::{color_to_rgba, render, render_pixel, FrameBuffer, PixelLayout, RenderConfig, Renderer};
pub use shade::{is_light_visible, surface, trace, Color, ShadeConfig, Shader, MAX_DEPTH, SHADOW_EPSILON};

/// Re-export the scene model and math types
pub use glint_core::{Camera, Light, Material, Scene, SceneError, Shape, Sphere};
pub use glint_math::{Ray, Vector3};
