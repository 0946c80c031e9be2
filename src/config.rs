//! TOML scene description.
//!
//! A scene file has an `[image]` table, a `[camera]` table, and arrays of
//! `[[lights]]` and `[[geometries]]`. Vectors and colors are `[x, y, z]`.
//!
//! ```toml
//! [image]
//! width = 640
//! height = 480
//! background = [0.2, 0.2, 0.2]
//!
//! [camera]
//! position = [0.0, 0.0, -5.0]
//! direction = [0.0, 0.0, 1.0]
//! up = [0.0, 1.0, 0.0]
//! view_plane_distance = 1.5
//! view_plane_width = 2.0
//! view_plane_height = 1.5
//! front_plane_distance = 0.0
//! back_plane_distance = 1000.0
//!
//! [[lights]]
//! position = [0.0, 5.0, -5.0]
//! ambient = [0.2, 0.2, 0.2]
//! diffuse = [0.8, 0.8, 0.8]
//! specular = [0.8, 0.8, 0.8]
//! intensity = 1.0
//!
//! [[geometries]]
//! kind = "sphere"
//! center = [0.0, 0.0, 0.0]
//! radius = 1.0
//! material = { ambient = [0.1, 0.0, 0.0], diffuse = [0.7, 0.1, 0.1], specular = [0.5, 0.5, 0.5], shininess = 32.0 }
//! ```

use std::fs;
use std::path::Path;

use glam::DVec3;
use serde::Deserialize;

use crate::camera::Camera;
use crate::ellipsoid::Ellipsoid;
use crate::error::{Error, Result};
use crate::geometry::Geometry;
use crate::light::Light;
use crate::material::{Color, Material};
use crate::renderer::RenderSettings;
use crate::scene::Scene;
use crate::sphere::Sphere;

/// Output raster description.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ImageConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Color of pixels that hit nothing
    #[serde(default = "default_background")]
    pub background: Color,
}

fn default_background() -> Color {
    RenderSettings::default().background
}

impl Default for ImageConfig {
    fn default() -> Self {
        let settings = RenderSettings::default();
        Self {
            width: settings.width,
            height: settings.height,
            background: settings.background,
        }
    }
}

/// One primitive in a scene file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GeometryConfig {
    /// Sphere with center and radius.
    Sphere {
        /// Center point
        center: DVec3,
        /// Radius
        radius: f64,
        /// Surface material
        #[serde(default)]
        material: Material,
    },
    /// Axis-aligned ellipsoid.
    Ellipsoid {
        /// Center point
        center: DVec3,
        /// Semi-axis lengths along x, y and z
        semi_axes: DVec3,
        /// Uniform scale of the semi-axes
        #[serde(default = "unit_radius")]
        radius: f64,
        /// Surface material
        #[serde(default)]
        material: Material,
    },
}

fn unit_radius() -> f64 {
    1.0
}

impl GeometryConfig {
    fn validate(&self, index: usize) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        match self {
            Self::Sphere { radius, .. } if !positive(*radius) => Err(Error::InvalidScene(format!(
                "geometry #{index}: sphere radius must be positive, got {radius}"
            ))),
            Self::Ellipsoid { semi_axes, radius, .. }
                if !(positive(semi_axes.x) && positive(semi_axes.y) && positive(semi_axes.z) && positive(*radius)) =>
            {
                Err(Error::InvalidScene(format!(
                    "geometry #{index}: ellipsoid semi-axes and radius must be positive"
                )))
            }
            _ => Ok(()),
        }
    }

    fn build(self) -> Box<dyn Geometry> {
        match self {
            Self::Sphere { center, radius, material } => Box::new(Sphere::new(center, radius, material)),
            Self::Ellipsoid {
                center,
                semi_axes,
                radius,
                material,
            } => Box::new(Ellipsoid::new(center, semi_axes, radius, material)),
        }
    }
}

/// Deserialized scene file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneFile {
    /// Output raster
    #[serde(default)]
    pub image: ImageConfig,
    /// Viewing camera
    pub camera: Camera,
    /// Point lights
    #[serde(default)]
    pub lights: Vec<Light>,
    /// Primitives
    #[serde(default)]
    pub geometries: Vec<GeometryConfig>,
}

impl SceneFile {
    /// Parse a scene from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a scene file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Validate and build the scene, camera and render settings.
    ///
    /// The camera's direction and up vectors are normalized.
    pub fn into_parts(self) -> Result<(Scene, Camera, RenderSettings)> {
        let camera = validate_camera(self.camera)?;
        validate_image(&self.image)?;

        let mut scene = Scene::new();
        for (index, geometry) in self.geometries.into_iter().enumerate() {
            geometry.validate(index)?;
            scene.add(geometry.build());
        }
        for light in self.lights {
            scene.add_light(light);
        }

        let settings = RenderSettings {
            width: self.image.width,
            height: self.image.height,
            background: self.image.background,
            ..RenderSettings::default()
        };

        Ok((scene, camera, settings))
    }
}

/// Check image dimensions.
pub fn validate_image(image: &ImageConfig) -> Result<()> {
    if image.width == 0 || image.height == 0 {
        return Err(Error::InvalidScene(format!(
            "image size must be non-zero, got {}x{}",
            image.width, image.height
        )));
    }
    Ok(())
}

/// Reject cameras that cannot form a view basis, and normalize the rest.
pub fn validate_camera(camera: Camera) -> Result<Camera> {
    const MIN_LENGTH: f64 = 1e-12;

    if camera.direction.length() < MIN_LENGTH {
        return Err(Error::InvalidScene("camera direction has zero length".into()));
    }
    if camera.up.length() < MIN_LENGTH {
        return Err(Error::InvalidScene("camera up vector has zero length".into()));
    }

    let camera = camera.normalized();
    if camera.up.cross(camera.direction).length() < 1e-9 {
        return Err(Error::InvalidScene("camera up vector is parallel to its direction".into()));
    }
    if !(camera.view_plane_width > 0.0 && camera.view_plane_height > 0.0) {
        return Err(Error::InvalidScene("view plane size must be positive".into()));
    }
    if !(camera.view_plane_distance > 0.0) {
        return Err(Error::InvalidScene("view plane distance must be positive".into()));
    }
    if camera.front_plane_distance > camera.back_plane_distance {
        return Err(Error::InvalidScene(format!(
            "front plane ({}) is beyond back plane ({})",
            camera.front_plane_distance, camera.back_plane_distance
        )));
    }

    Ok(camera)
}
