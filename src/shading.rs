//! Phong local illumination.
//!
//! Combines ambient, diffuse and specular terms per light. There is no
//! recursive reflection, refraction or indirect bounce.

use glam::DVec3;

use crate::geometry::Intersection;
use crate::light::Light;
use crate::material::{reflect, Color};
use crate::scene::Scene;

/// Contribution of a single light, before intensity scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightContribution {
    /// Ambient term; present regardless of shadowing.
    pub ambient: Color,
    /// Lambertian term; zero when shadowed or back-facing.
    pub diffuse: Color,
    /// Specular term; zero when shadowed or the viewer is off the highlight.
    pub specular: Color,
}

impl LightContribution {
    /// Sum of all three terms.
    pub fn total(&self) -> Color {
        self.ambient + self.diffuse + self.specular
    }
}

/// Evaluate one light at a visible hit seen from `viewer`.
///
/// Returns all-zero terms when `hit` is not a visible intersection.
pub fn light_contribution(scene: &Scene, hit: &Intersection<'_>, viewer: DVec3, light: &Light) -> LightContribution {
    let zero = LightContribution {
        ambient: Color::ZERO,
        diffuse: Color::ZERO,
        specular: Color::ZERO,
    };
    let Some(material) = hit.material().filter(|_| hit.is_hit()) else {
        return zero;
    };

    let mut contribution = LightContribution {
        ambient: material.ambient * light.ambient,
        ..zero
    };

    if !scene.is_lit(hit.position, light) {
        return contribution;
    }

    let n = hit.normal;
    let l = (light.position - hit.position).normalize();
    let v = (viewer - hit.position).normalize();

    let n_dot_l = n.dot(l);
    if n_dot_l > 0.0 {
        contribution.diffuse = material.diffuse * light.diffuse * n_dot_l;
    }

    let r_dot_v = reflect(l, n).dot(v);
    if r_dot_v > 0.0 {
        contribution.specular = material.specular * light.specular * r_dot_v.powf(material.shininess);
    }

    contribution
}

/// Total color at a hit: the intensity-scaled sum over every light.
///
/// The result is not clamped.
pub fn shade(scene: &Scene, hit: &Intersection<'_>, viewer: DVec3) -> Color {
    scene
        .lights
        .iter()
        .map(|light| light_contribution(scene, hit, viewer, light).total() * light.intensity)
        .fold(Color::ZERO, |acc, c| acc + c)
}
