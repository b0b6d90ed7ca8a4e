//! Surface material for the Whitted shading model.

use glint_math::{Vector3, ZERO};

use crate::error::{SceneError, SceneResult};

/// Shading coefficients of a surface.
///
/// `color` is RGB in the 0-255 range. The three coefficients weight the
/// reflected, diffuse and constant parts of the final color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Surface color (RGB, 0-255)
    pub color: Vector3,

    /// Weight of the mirror reflection
    pub specular: f64,

    /// Weight of the diffuse (Lambert) term
    pub lambert: f64,

    /// Constant contribution independent of lighting
    pub ambient: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: ZERO,
            specular: Self::DEFAULT_SPECULAR,
            lambert: Self::DEFAULT_LAMBERT,
            ambient: Self::DEFAULT_AMBIENT,
        }
    }
}

impl Material {
    pub const DEFAULT_SPECULAR: f64 = 0.2;
    pub const DEFAULT_LAMBERT: f64 = 0.7;
    pub const DEFAULT_AMBIENT: f64 = 0.1;

    /// Create a material from a color and its three coefficients.
    pub fn new(color: Vector3, specular: f64, lambert: f64, ambient: f64) -> Self {
        Self {
            color,
            specular,
            lambert,
            ambient,
        }
    }

    /// Create a material with the default coefficients and the given color.
    pub fn with_color(color: Vector3) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Check that every coefficient is a finite number in [0, 1].
    pub fn validate(&self) -> SceneResult<()> {
        for (field, value) in [
            ("specular", self.specular),
            ("lambert", self.lambert),
            ("ambient", self.ambient),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SceneError::InvalidMaterial { field, value });
            }
        }
        Ok(())
    }

    /// True if the surface takes part in diffuse lighting.
    #[inline]
    pub fn is_diffuse(&self) -> bool {
        self.lambert > 0.0
    }

    /// True if the surface spawns reflection rays.
    #[inline]
    pub fn is_reflective(&self) -> bool {
        self.specular > 0.0
    }
}
