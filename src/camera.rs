//! Camera for primary ray generation
//!
//! The camera is a plain data holder; it maps image-space pixels onto a view
//! plane placed `view_plane_distance` along the view direction.

use glam::DVec3;
use serde::Deserialize;

use crate::interval::Interval;
use crate::ray::Ray;

/// Pinhole camera looking through a rectangular view plane.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Camera {
    /// Camera position in world space
    pub position: DVec3,
    /// Unit view direction
    pub direction: DVec3,
    /// Unit camera-relative "up" direction
    pub up: DVec3,
    /// Distance from position to the view plane along `direction`
    pub view_plane_distance: f64,
    /// View plane width in world units
    pub view_plane_width: f64,
    /// View plane height in world units
    pub view_plane_height: f64,
    /// Hits nearer than this are clipped
    pub front_plane_distance: f64,
    /// Hits farther than this are clipped
    pub back_plane_distance: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, -5.0),
            direction: DVec3::Z,
            up: DVec3::Y,
            view_plane_distance: 1.0,
            view_plane_width: 2.0,
            view_plane_height: 2.0,
            front_plane_distance: 0.0,
            back_plane_distance: 1000.0,
        }
    }
}

impl Camera {
    /// Camera-right basis vector: normalize(up × direction).
    pub fn right(&self) -> DVec3 {
        self.up.cross(self.direction).normalize()
    }

    /// Distance window applied to primary rays.
    pub fn clip_window(&self) -> Interval {
        Interval::new(self.front_plane_distance, self.back_plane_distance)
    }

    /// World-space view plane point for pixel `(i, j)` of a `width × height` image.
    pub fn view_plane_point(&self, i: u32, j: u32, width: u32, height: u32) -> DVec3 {
        let x = image_to_view_plane(i, width, self.view_plane_width);
        let y = image_to_view_plane(j, height, self.view_plane_height);

        self.position + self.direction * self.view_plane_distance + self.right() * x + self.up * y
    }

    /// Primary ray from the camera through pixel `(i, j)`.
    ///
    /// The direction is unit length so the clipping planes measure distance.
    pub fn primary_ray(&self, i: u32, j: u32, width: u32, height: u32) -> Ray {
        Ray::through(self.position, self.view_plane_point(i, j, width, height))
    }

    /// The same camera with `direction` and `up` normalized.
    pub fn normalized(self) -> Self {
        Self {
            direction: self.direction.normalize(),
            up: self.up.normalize(),
            ..self
        }
    }
}

/// Linear map from pixel index to a view-plane coordinate.
///
/// Centers the plane and flips the axis so that pixel 0 lands on the
/// positive edge.
pub fn image_to_view_plane(n: u32, img_size: u32, view_plane_size: f64) -> f64 {
    -(n as f64) * view_plane_size / img_size as f64 + view_plane_size / 2.0
}
