//! Recursive shading.
//!
//! `trace` finds what a ray sees and `surface` lights the hit point:
//! - Lambert diffuse from every unshadowed light, summed without clamping
//! - Mirror reflection traced recursively, weighted by `specular`
//! - Constant ambient term
//!
//! Recursion stops once the depth passes [`MAX_DEPTH`]; a ray past the
//! cutoff contributes nothing rather than a color.

use glint_core::{Light, Scene, Shape};
use glint_math::{dot, normalize, reflect, Ray, Vector3, VectorOps, WHITE, ZERO};

use crate::intersect::intersect_scene;

/// Color type alias (RGB, nominally 0-255, unclamped while shading)
pub type Color = Vector3;

/// Deepest recursion level that still traces.
pub const MAX_DEPTH: u32 = 3;

/// Shadow rays whose nearest hit lies above `-SHADOW_EPSILON` count as
/// unoccluded. Absorbs the shadow ray hitting its own surface point.
pub const SHADOW_EPSILON: f64 = 0.005;

/// Tunables for the shading pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeConfig {
    /// Self-intersection tolerance of the shadow test. Scene-scale
    /// dependent.
    pub shadow_epsilon: f64,
}

impl Default for ShadeConfig {
    fn default() -> Self {
        Self {
            shadow_epsilon: SHADOW_EPSILON,
        }
    }
}

/// Shades rays against one scene.
#[derive(Debug, Clone, Copy)]
pub struct Shader<'a> {
    scene: &'a Scene,
    config: ShadeConfig,
}

impl<'a> Shader<'a> {
    pub fn new(scene: &'a Scene, config: ShadeConfig) -> Self {
        Self { scene, config }
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    /// Compute the color seen by a ray.
    ///
    /// Returns `None` past the depth cutoff and [`WHITE`] when the ray
    /// escapes the scene.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Option<Color> {
        if depth > MAX_DEPTH {
            return None;
        }

        let Some(hit) = intersect_scene(ray, self.scene) else {
            return Some(WHITE);
        };

        let point = ray.at(hit.distance);
        let normal = hit.shape.normal_at(point);

        Some(self.surface(ray, hit.shape, point, normal, depth))
    }

    /// Light a hit point.
    pub fn surface(
        &self,
        ray: &Ray,
        shape: &dyn Shape,
        point: Vector3,
        normal: Vector3,
        depth: u32,
    ) -> Color {
        let material = shape.material();

        let mut color = ZERO;
        let mut lambert_amount = 0.0;

        if material.is_diffuse() {
            for &light in &self.scene.lights {
                if !self.is_light_visible(point, light) {
                    continue;
                }

                let contribution = dot(normalize(light - point), normal);
                if contribution > 0.0 {
                    lambert_amount += contribution;
                }
            }
        }

        if material.is_reflective() {
            let reflected_ray = Ray::new(point, reflect(ray.direction, normal));
            if let Some(reflected) = self.trace(&reflected_ray, depth + 1) {
                color = color + reflected.scale(material.specular);
            }
        }

        color.add3(
            material.color.scale(lambert_amount * material.lambert),
            material.color.scale(material.ambient),
        )
    }

    /// Shadow test between a surface point and a light.
    ///
    /// The probe starts at `point` and runs along `point - light`, away from
    /// the light, so an occluder between the two shows up as a negative
    /// distance. The light counts as visible when nothing hits or the
    /// nearest hit is above `-shadow_epsilon`.
    pub fn is_light_visible(&self, point: Vector3, light: Light) -> bool {
        let probe = Ray::new(point, normalize(point - light));

        match intersect_scene(&probe, self.scene) {
            Some(hit) => hit.distance > -self.config.shadow_epsilon,
            None => true,
        }
    }
}

/// [`Shader::trace`] with the default configuration.
pub fn trace(ray: &Ray, scene: &Scene, depth: u32) -> Option<Color> {
    Shader::new(scene, ShadeConfig::default()).trace(ray, depth)
}

/// [`Shader::surface`] with the default configuration.
pub fn surface(
    ray: &Ray,
    scene: &Scene,
    shape: &dyn Shape,
    point: Vector3,
    normal: Vector3,
    depth: u32,
) -> Color {
    Shader::new(scene, ShadeConfig::default()).surface(ray, shape, point, normal, depth)
}

/// [`Shader::is_light_visible`] with the default configuration.
pub fn is_light_visible(point: Vector3, scene: &Scene, light: Light) -> bool {
    Shader::new(scene, ShadeConfig::default()).is_light_visible(point, light)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Camera, Material, Sphere};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn camera() -> Camera {
        Camera::new(Vector3::new(0.0, 0.0, 10.0), Vector3::ZERO, 45.0)
    }

    fn down_z() -> Ray {
        Ray::new(Vector3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, -1.0))
    }

    fn sphere(center: Vector3, radius: f64, material: Material) -> Sphere {
        Sphere::new(center, radius, material).unwrap()
    }

    /// Sphere wrapper that counts intersection queries.
    #[derive(Debug)]
    struct Counting {
        inner: Sphere,
        calls: Arc<AtomicUsize>,
    }

    impl Shape for Counting {
        fn intersect(&self, ray: &Ray) -> Option<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.intersect(ray)
        }

        fn normal_at(&self, point: Vector3) -> Vector3 {
            self.inner.normal_at(point)
        }

        fn material(&self) -> &Material {
            self.inner.material()
        }
    }

    #[test]
    fn test_background_is_white() {
        let scene = Scene::new(camera());
        assert_eq!(trace(&down_z(), &scene, 0), Some(WHITE));
    }

    #[test]
    fn test_past_cutoff_is_none() {
        let scene = Scene::new(camera());
        assert!(trace(&down_z(), &scene, MAX_DEPTH).is_some());
        assert_eq!(trace(&down_z(), &scene, MAX_DEPTH + 1), None);
    }

    #[test]
    fn test_lambert_facing_light() {
        let color = Vector3::new(200.0, 100.0, 50.0);
        let scene = Scene::new(camera())
            .with_light(Vector3::new(0.0, 0.0, 20.0))
            .with_object(sphere(Vector3::ZERO, 1.0, Material::new(color, 0.0, 1.0, 0.0)));

        let shaded = trace(&down_z(), &scene, 0).unwrap();
        assert!((shaded - color).length() < 1e-6, "got {shaded}");
    }

    #[test]
    fn test_back_facing_light_contributes_nothing() {
        let color = Vector3::new(200.0, 100.0, 50.0);
        let scene = Scene::new(camera())
            .with_light(Vector3::new(0.0, 0.0, -20.0))
            .with_object(sphere(Vector3::ZERO, 1.0, Material::new(color, 0.0, 1.0, 0.25)));

        // Only the ambient term is left
        let shaded = trace(&down_z(), &scene, 0).unwrap();
        assert!((shaded - color * 0.25).length() < 1e-9, "got {shaded}");
    }

    #[test]
    fn test_lights_sum_unclamped() {
        let color = Vector3::new(100.0, 100.0, 100.0);
        let scene = Scene::new(camera())
            .with_light(Vector3::new(0.0, 0.0, 20.0))
            .with_light(Vector3::new(0.0, 0.0, 30.0))
            .with_object(sphere(Vector3::ZERO, 1.0, Material::new(color, 0.0, 1.0, 0.0)));

        let shaded = trace(&down_z(), &scene, 0).unwrap();
        assert!((shaded - color * 2.0).length() < 1e-6, "got {shaded}");
    }

    #[test]
    fn test_specular_recursion_stops_after_depth_three() {
        // Reflections off a lone sphere keep landing on the sphere itself,
        // so the chain only ends at the cutoff: 0.5 + 0.5 * (0.5 + ...)
        let color = Vector3::new(160.0, 80.0, 16.0);
        let scene = Scene::new(camera())
            .with_object(sphere(Vector3::ZERO, 1.0, Material::new(color, 0.5, 0.0, 0.5)));

        let shaded = trace(&down_z(), &scene, 0).unwrap();
        assert!((shaded - color * 0.9375).length() < 1e-9, "got {shaded}");
    }

    #[test]
    fn test_facing_mirrors_terminate() {
        let mirror = Material::new(Vector3::new(255.0, 255.0, 255.0), 1.0, 0.0, 0.0);
        let calls = Arc::new(AtomicUsize::new(0));

        let scene = Scene::new(camera())
            .with_light(Vector3::new(0.0, 10.0, 0.0))
            .with_object(Counting {
                inner: sphere(Vector3::new(0.0, 0.0, 2.0), 1.0, mirror),
                calls: Arc::clone(&calls),
            })
            .with_object(Counting {
                inner: sphere(Vector3::new(0.0, 0.0, -2.0), 1.0, mirror),
                calls: Arc::clone(&calls),
            });

        let ray = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, 1.0));
        let shaded = trace(&ray, &scene, 0).expect("depth 0 always yields a color");

        assert!(shaded.is_finite());
        // At most one scene scan per depth level 0..=3, no shadow rays
        assert!(calls.load(Ordering::SeqCst) <= 2 * (MAX_DEPTH as usize + 1));
    }

    #[test]
    fn test_occluded_light() {
        let scene = Scene::new(camera())
            .with_object(sphere(Vector3::new(0.0, 0.0, 5.0), 1.0, Material::default()));

        let point = Vector3::ZERO;
        let light = Vector3::new(0.0, 0.0, 10.0);
        assert!(!is_light_visible(point, &scene, light));
    }

    #[test]
    fn test_unobstructed_light() {
        let scene = Scene::new(camera())
            .with_object(sphere(Vector3::new(5.0, 0.0, 5.0), 1.0, Material::default()));

        let point = Vector3::ZERO;
        let light = Vector3::new(0.0, 0.0, 10.0);
        assert!(is_light_visible(point, &scene, light));

        // Nothing at all in the scene
        assert!(is_light_visible(point, &Scene::new(camera()), light));
    }

    #[test]
    fn test_object_beyond_point_does_not_shadow() {
        // Sphere on the far side of the point, away from the light
        let scene = Scene::new(camera())
            .with_object(sphere(Vector3::new(0.0, 0.0, -5.0), 1.0, Material::default()));

        assert!(is_light_visible(Vector3::ZERO, &scene, Vector3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn test_shadowed_point_gets_ambient_only() {
        let color = Vector3::new(100.0, 100.0, 100.0);
        let scene = Scene::new(camera())
            .with_light(Vector3::new(10.0, 11.0, 0.0))
            .with_object(sphere(Vector3::ZERO, 1.0, Material::new(color, 0.0, 1.0, 0.1)))
            // Blocker between the top of the sphere and the light, off the camera ray
            .with_object(sphere(Vector3::new(5.0, 6.0, 0.0), 1.0, Material::default()));

        let ray = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        let shaded = trace(&ray, &scene, 0).unwrap();
        assert!((shaded - color * 0.1).length() < 1e-9, "got {shaded}");
    }

    #[test]
    fn test_shadow_epsilon_is_tunable() {
        let scene = Scene::new(camera())
            .with_object(sphere(Vector3::new(0.0, 0.0, 5.0), 1.0, Material::default()));

        // Occluder sits at distance -6 along the probe
        let loose = Shader::new(&scene, ShadeConfig { shadow_epsilon: 10.0 });
        assert!(loose.is_light_visible(Vector3::ZERO, Vector3::new(0.0, 0.0, 10.0)));

        let strict = Shader::new(&scene, ShadeConfig::default());
        assert!(!strict.is_light_visible(Vector3::ZERO, Vector3::new(0.0, 0.0, 10.0)));
    }
}
