//! Ray-surface intersection system.
//!
//! Defines the [`Geometry`] trait implemented by every primitive and the
//! [`Intersection`] record produced by a single ray test.

use std::fmt;

use glam::DVec3;

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Normalized discriminant (b² − 4ac) / a² below this is treated as a miss.
///
/// Grazing, near-singular hits produce shading artifacts, so tangency counts
/// as no intersection. Dividing by a² makes the test independent of how the
/// quadratic is scaled, so a sphere and an equivalent ellipsoid agree.
pub const TANGENT_EPSILON: f64 = 0.001;

/// Result of testing one ray against one geometry (or the winner across a scene).
///
/// Only meaningful when [`is_hit`](Self::is_hit) returns true.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// A real root exists.
    pub valid: bool,
    /// The root lies inside the distance window of the query.
    pub visible: bool,
    /// Geometry that produced this result.
    pub geometry: Option<&'a dyn Geometry>,
    /// The tested ray.
    pub ray: Ray,
    /// Ray parameter of the hit.
    pub t: f64,
    /// World position of the hit.
    pub position: DVec3,
    /// Unit outward surface normal at the hit.
    pub normal: DVec3,
}

impl<'a> Intersection<'a> {
    /// No real root: the ray misses the surface.
    pub fn none(ray: Ray) -> Self {
        Self {
            valid: false,
            visible: false,
            geometry: None,
            ray,
            t: 0.0,
            position: DVec3::ZERO,
            normal: DVec3::ZERO,
        }
    }

    /// The surface is crossed, but outside the requested distance window.
    pub fn hidden(geometry: &'a dyn Geometry, ray: Ray) -> Self {
        Self {
            valid: true,
            geometry: Some(geometry),
            ..Self::none(ray)
        }
    }

    /// A visible hit at parameter `t` with the given unit normal.
    pub fn hit(geometry: &'a dyn Geometry, ray: Ray, t: f64, normal: DVec3) -> Self {
        Self {
            valid: true,
            visible: true,
            geometry: Some(geometry),
            ray,
            t,
            position: ray.at(t),
            normal,
        }
    }

    /// True only for a valid root inside the window.
    pub fn is_hit(&self) -> bool {
        self.valid && self.visible
    }

    /// Material of the geometry that was hit.
    pub fn material(&self) -> Option<&'a Material> {
        self.geometry.map(|geometry| geometry.material())
    }
}

impl fmt::Debug for Intersection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("valid", &self.valid)
            .field("visible", &self.visible)
            .field("geometry", &self.geometry.map(|g| g.name()))
            .field("t", &self.t)
            .field("position", &self.position)
            .field("normal", &self.normal)
            .finish()
    }
}

/// Trait for surfaces that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so scanlines can be rendered in
/// parallel against a shared scene.
pub trait Geometry: Sync + Send {
    /// Test for ray intersection within the given distance window.
    ///
    /// Returns the nearest root inside `window`. The ray and the geometry are
    /// left untouched.
    fn intersect(&self, ray: &Ray, window: Interval) -> Intersection<'_>;

    /// Unit outward normal at a point on the surface.
    fn normal(&self, point: DVec3) -> DVec3;

    /// Material shared by the whole surface.
    fn material(&self) -> &Material;

    /// Short primitive name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Outcome of solving a ray quadratic against a distance window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Root {
    /// No real root, degenerate quadratic or grazing tangency.
    Miss,
    /// Real roots exist, but none is inside the window.
    Outside,
    /// Nearest root inside the window.
    Inside(f64),
}

/// Solve a·t² + b·t + c = 0 and pick the nearest root inside `window`.
///
/// `a` is a sum of squares for every primitive, so `t1 <= t2` holds and the
/// smaller root wins whenever both are inside the window.
pub(crate) fn nearest_root(a: f64, b: f64, c: f64, window: Interval) -> Root {
    if !(a > 0.0 && a.is_finite()) {
        return Root::Miss;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant / (a * a) < TANGENT_EPSILON {
        return Root::Miss;
    }

    let sqrtd = discriminant.sqrt();
    let t1 = (-b - sqrtd) / (2.0 * a);
    let t2 = (-b + sqrtd) / (2.0 * a);

    if window.contains(t1) {
        Root::Inside(t1)
    } else if window.contains(t2) {
        Root::Inside(t2)
    } else {
        Root::Outside
    }
}
