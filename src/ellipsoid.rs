//! Axis-aligned ellipsoid primitive.
//!
//! The surface is ((x-h)/A)² + ((y-k)/B)² + ((z-l)/C)² = R². Intersection is
//! solved in the ellipsoid's local frame: the ray origin is translated by the
//! center and each axis is scaled by 1/A², 1/B², 1/C².

use glam::DVec3;

use crate::geometry::{nearest_root, Geometry, Intersection, Root};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Ellipsoid defined by center, per-axis semi-lengths and a radius scale.
#[derive(Debug, Clone)]
pub struct Ellipsoid {
    /// Center point in world coordinates.
    pub center: DVec3,
    /// Semi-axis lengths (A, B, C) along x, y and z.
    pub semi_axes: DVec3,
    /// Uniform scale applied to all three semi-axes.
    pub radius: f64,
    /// Material properties used by the shading evaluator.
    pub material: Material,
}

impl Ellipsoid {
    /// Create a new ellipsoid.
    pub fn new(center: DVec3, semi_axes: DVec3, radius: f64, material: Material) -> Self {
        Self {
            center,
            semi_axes,
            radius,
            material,
        }
    }

    /// Component-wise (A², B², C²).
    fn axes_squared(&self) -> DVec3 {
        self.semi_axes * self.semi_axes
    }
}

impl Geometry for Ellipsoid {
    fn intersect(&self, ray: &Ray, window: Interval) -> Intersection<'_> {
        let inv_axes2 = self.axes_squared().recip();
        let origin = ray.origin - self.center;
        let dir = ray.direction;

        let a = (dir * dir).dot(inv_axes2);
        let b = 2.0 * (dir * origin).dot(inv_axes2);
        let c = (origin * origin).dot(inv_axes2) - self.radius * self.radius;

        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Intersection::none(*ray);
        }

        match nearest_root(a, b, c, window) {
            Root::Miss => Intersection::none(*ray),
            Root::Outside => Intersection::hidden(self, *ray),
            Root::Inside(t) => Intersection::hit(self, *ray, t, self.normal(ray.at(t))),
        }
    }

    /// Gradient of the implicit surface, normalized.
    fn normal(&self, point: DVec3) -> DVec3 {
        ((point - self.center) / self.axes_squared()).normalize()
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn name(&self) -> &'static str {
        "ellipsoid"
    }
}
