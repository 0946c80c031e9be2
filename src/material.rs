//! Surface materials for Phong shading.
//!
//! A material carries the per-term reflectance colors and the specular
//! exponent. Materials are plain data shared by the geometry that owns them.

use glam::DVec3;
use serde::Deserialize;

/// RGB color accumulator. Channels are never clamped inside the tracer.
pub type Color = DVec3;

/// Phong material with ambient, diffuse and specular reflectance.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Material {
    /// Reflectance for the ambient term.
    pub ambient: Color,
    /// Reflectance for the Lambertian term.
    pub diffuse: Color,
    /// Reflectance for the specular highlight.
    pub specular: Color,
    /// Specular exponent; larger values give tighter highlights.
    pub shininess: f64,
}

impl Material {
    /// Create a new material.
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f64) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// Material using the same reflectance for all three terms.
    pub fn uniform(reflectance: Color, shininess: f64) -> Self {
        Self::new(reflectance, reflectance, reflectance, shininess)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::uniform(Color::splat(0.5), 10.0)
    }
}

/// Mirror `l` about the unit normal `n`: R = 2(N·L)N − L.
///
/// Both vectors point away from the surface; the result is normalized.
pub fn reflect(l: DVec3, n: DVec3) -> DVec3 {
    (2.0 * n.dot(l) * n - l).normalize()
}
