//! Nearest-hit search over the scene's objects.

use std::fmt;

use glint_core::{Scene, Shape};
use glint_math::Ray;

/// The closest object along a ray.
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    /// Parameter t of the hit (may be negative)
    pub distance: f64,
    /// The object that was hit
    pub shape: &'a dyn Shape,
}

impl fmt::Debug for Hit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hit")
            .field("distance", &self.distance)
            .field("shape", &self.shape)
            .finish()
    }
}

/// Find the object with the smallest intersection distance.
///
/// Objects are scanned in scene order and a candidate replaces the current
/// best only when strictly closer, so ties go to the earlier object.
/// Distances are not filtered for sign: a hit behind the origin wins if it
/// is numerically smallest.
pub fn intersect_scene<'a>(ray: &Ray, scene: &'a Scene) -> Option<Hit<'a>> {
    let mut closest: Option<Hit<'a>> = None;
    let mut closest_so_far = f64::INFINITY;

    for object in &scene.objects {
        let Some(distance) = object.intersect(ray) else {
            continue;
        };

        if distance.is_finite() && distance < closest_so_far {
            closest_so_far = distance;
            closest = Some(Hit {
                distance,
                shape: object.as_ref(),
            });
        }
    }

    closest
}
