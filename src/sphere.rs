//! Sphere primitive.
//!
//! Substitutes the ray into |P - C|² = R² and solves the resulting quadratic.

use glam::DVec3;

use crate::geometry::{nearest_root, Geometry, Intersection, Root};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: DVec3,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f64,

    /// Material properties used by the shading evaluator.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: DVec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Geometry for Sphere {
    fn intersect(&self, ray: &Ray, window: Interval) -> Intersection<'_> {
        // Vector from sphere center to ray origin
        let oc = ray.origin - self.center;

        let a = ray.direction.length_squared();
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        match nearest_root(a, b, c, window) {
            Root::Miss => Intersection::none(*ray),
            Root::Outside => Intersection::hidden(self, *ray),
            Root::Inside(t) => Intersection::hit(self, *ray, t, self.normal(ray.at(t))),
        }
    }

    fn normal(&self, point: DVec3) -> DVec3 {
        (point - self.center).normalize()
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn name(&self) -> &'static str {
        "sphere"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn everywhere() -> Interval {
        Interval::new(0.0, f64::MAX)
    }

    #[test]
    fn front_face_hit_along_z() {
        for r in [0.5, 1.0, 3.0] {
            let sphere = Sphere::new(DVec3::ZERO, r, Material::default());
            let ray = Ray::new(DVec3::new(0.0, 0.0, -2.0 * r), DVec3::Z);
            let hit = sphere.intersect(&ray, everywhere());

            assert!(hit.is_hit());
            assert_abs_diff_eq!(hit.t, r, epsilon = 1e-9);
            assert_abs_diff_eq!(hit.normal.z, -1.0, epsilon = 1e-9);
            assert_abs_diff_eq!(hit.position.z, -r, epsilon = 1e-9);
        }
    }

    #[test]
    fn unnormalized_direction_scales_t() {
        let sphere = Sphere::new(DVec3::ZERO, 1.0, Material::default());
        let ray = Ray::new(DVec3::new(0.0, 0.0, -2.0), DVec3::new(0.0, 0.0, 2.0));
        let hit = sphere.intersect(&ray, everywhere());
        assert!(hit.is_hit());
        assert_abs_diff_eq!(hit.t, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn miss_is_invalid() {
        let sphere = Sphere::new(DVec3::ZERO, 1.0, Material::default());
        let ray = Ray::new(DVec3::new(0.0, 5.0, -5.0), DVec3::Z);
        let hit = sphere.intersect(&ray, everywhere());
        assert!(!hit.valid);
        assert!(!hit.visible);
        assert!(hit.geometry.is_none());
    }

    #[test]
    fn tangent_ray_is_a_miss() {
        let sphere = Sphere::new(DVec3::ZERO, 1.0, Material::default());
        let ray = Ray::new(DVec3::new(0.0, 1.0, -5.0), DVec3::Z);
        assert!(!sphere.intersect(&ray, everywhere()).valid);
    }

    #[test]
    fn inside_origin_hits_exit_point() {
        let sphere = Sphere::new(DVec3::ZERO, 2.0, Material::default());
        let ray = Ray::new(DVec3::ZERO, DVec3::X);
        let hit = sphere.intersect(&ray, everywhere());
        assert!(hit.is_hit());
        assert_abs_diff_eq!(hit.t, 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hit.normal.x, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn window_rejection_is_valid_but_not_visible() {
        let sphere = Sphere::new(DVec3::ZERO, 1.0, Material::default());
        let ray = Ray::new(DVec3::new(0.0, 0.0, -5.0), DVec3::Z);
        let hit = sphere.intersect(&ray, Interval::new(0.0, 2.0));
        assert!(hit.valid);
        assert!(!hit.visible);
        assert!(!hit.is_hit());
    }

    #[test]
    fn sphere_behind_ray_is_rejected() {
        let sphere = Sphere::new(DVec3::ZERO, 1.0, Material::default());
        let ray = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::Z);
        assert!(!sphere.intersect(&ray, everywhere()).is_hit());
    }

    #[test]
    fn negative_window_resolves_nearest_root() {
        let sphere = Sphere::new(DVec3::ZERO, 1.0, Material::default());
        let ray = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::Z);
        let hit = sphere.intersect(&ray, Interval::new(f64::MIN, 0.0));
        assert!(hit.is_hit());
        assert_abs_diff_eq!(hit.t, -6.0, epsilon = 1e-9);
    }

    #[test]
    fn negative_radius_is_clamped() {
        let sphere = Sphere::new(DVec3::ZERO, -1.0, Material::default());
        assert_eq!(sphere.radius, 0.0);
    }
}
