//! Point light sources.

use glam::DVec3;
use serde::Deserialize;

use crate::material::Color;

/// Point light with separate ambient, diffuse and specular contributions.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Light {
    /// World position of the light.
    pub position: DVec3,
    /// Color multiplied into every material's ambient reflectance.
    pub ambient: Color,
    /// Color multiplied into the Lambertian term.
    pub diffuse: Color,
    /// Color multiplied into the specular highlight.
    pub specular: Color,
    /// Scalar applied to this light's whole contribution.
    #[serde(default = "default_intensity")]
    pub intensity: f64,
}

fn default_intensity() -> f64 {
    1.0
}

impl Light {
    /// Create a new light.
    pub fn new(position: DVec3, ambient: Color, diffuse: Color, specular: Color, intensity: f64) -> Self {
        Self {
            position,
            ambient,
            diffuse,
            specular,
            intensity,
        }
    }

    /// White light of unit intensity with the given per-term gray level.
    pub fn white(position: DVec3, level: f64) -> Self {
        let c = Color::splat(level);
        Self::new(position, c, c, c, 1.0)
    }
}
