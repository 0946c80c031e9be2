//! Scene container, nearest-hit search and shadow test.
//!
//! Uses linear search over every geometry; there is no spatial acceleration
//! structure.

use glam::DVec3;

use crate::ellipsoid::Ellipsoid;
use crate::geometry::{Geometry, Intersection};
use crate::interval::Interval;
use crate::light::Light;
use crate::material::{Color, Material};
use crate::ray::Ray;
use crate::sphere::Sphere;

/// Lower bound of the shadow-ray window, and tolerance subtracted from the
/// light distance at the far end.
///
/// Keeps a surface from shadowing itself through floating-point noise at
/// the ray origin.
pub const SHADOW_EPSILON: f64 = 0.001;

/// Geometries and lights forming a scene. Read-only while rendering.
#[derive(Default)]
pub struct Scene {
    /// Boxed primitives, tested in order.
    pub geometries: Vec<Box<dyn Geometry>>,
    /// Point lights.
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a geometry to the scene.
    pub fn add(&mut self, geometry: Box<dyn Geometry>) {
        self.geometries.push(geometry);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Nearest visible intersection across all geometries.
    ///
    /// Every geometry is tested with the same window; ties keep the earlier
    /// geometry. Returns [`Intersection::none`] when nothing is hit.
    pub fn find_nearest(&self, ray: &Ray, window: Interval) -> Intersection<'_> {
        let mut nearest = Intersection::none(*ray);

        for geometry in &self.geometries {
            let candidate = geometry.intersect(ray, window);
            if !candidate.is_hit() {
                continue;
            }
            if !nearest.is_hit() || candidate.t < nearest.t {
                nearest = candidate;
            }
        }

        nearest
    }

    /// Whether `point` receives direct light from `light`.
    ///
    /// Casts a unit-direction shadow ray toward the light; only occluders
    /// strictly between the point and the light count.
    pub fn is_lit(&self, point: DVec3, light: &Light) -> bool {
        let to_light = light.position - point;
        let distance = to_light.length();
        if distance <= SHADOW_EPSILON {
            return true;
        }

        let ray = Ray::new(point, to_light / distance);
        let window = Interval::new(SHADOW_EPSILON, distance - SHADOW_EPSILON);
        if window.is_empty() {
            return true;
        }

        let occluder = self.find_nearest(&ray, window);
        !(occluder.is_hit() && occluder.t < distance - SHADOW_EPSILON)
    }

    /// Built-in scene used when no scene file is given.
    ///
    /// Mirrors `scenes/demo.toml`.
    pub fn demo() -> Self {
        let mut scene = Self::new();

        let red = Material::new(
            Color::new(0.1, 0.0, 0.0),
            Color::new(0.7, 0.1, 0.1),
            Color::splat(0.5),
            32.0,
        );
        let green = Material::new(
            Color::new(0.0, 0.1, 0.0),
            Color::new(0.1, 0.6, 0.2),
            Color::splat(0.3),
            16.0,
        );
        let blue = Material::new(
            Color::new(0.0, 0.0, 0.1),
            Color::new(0.1, 0.2, 0.7),
            Color::splat(0.8),
            64.0,
        );
        let floor = Material::new(Color::splat(0.05), Color::splat(0.5), Color::splat(0.1), 4.0);

        scene.add(Box::new(Sphere::new(DVec3::new(0.0, 0.0, 0.0), 1.0, red)));
        scene.add(Box::new(Sphere::new(DVec3::new(-2.2, 0.0, 1.0), 0.8, green)));
        scene.add(Box::new(Ellipsoid::new(
            DVec3::new(2.2, 0.2, 0.5),
            DVec3::new(0.6, 1.2, 0.6),
            1.0,
            blue,
        )));
        scene.add(Box::new(Ellipsoid::new(
            DVec3::new(0.0, -3.5, 0.0),
            DVec3::new(100.0, 2.5, 100.0),
            1.0,
            floor,
        )));

        scene.add_light(Light::new(
            DVec3::new(0.0, 5.0, -5.0),
            Color::splat(0.2),
            Color::splat(0.8),
            Color::splat(0.8),
            1.0,
        ));
        scene.add_light(Light::new(
            DVec3::new(-6.0, 3.0, -2.0),
            Color::splat(0.05),
            Color::new(0.3, 0.3, 0.4),
            Color::splat(0.2),
            0.8,
        ));

        scene
    }
}
