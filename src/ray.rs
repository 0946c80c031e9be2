//! Ray representation for ray casting.
//!
//! A ray is defined as r(t) = origin + t * direction, a semi-infinite line in
//! 3D space used for primary and shadow intersection testing.

use glam::DVec3;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays or a surface point for shadow rays.
    pub origin: DVec3,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized. When it is unit length, `t` measures
    /// Euclidean distance from the origin, which is what the camera clipping
    /// planes and the shadow test assume.
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray starting at `from` with a unit direction pointing at `to`.
    ///
    /// `from` and `to` must be distinct points.
    pub fn through(from: DVec3, to: DVec3) -> Self {
        Self {
            origin: from,
            direction: (to - from).normalize(),
        }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + t * self.direction
    }
}
