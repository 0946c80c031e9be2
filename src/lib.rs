//! phongtrace ray caster
//!
//! Renders spheres and ellipsoids lit by point lights using local Phong
//! illumination: one primary ray per pixel, one shadow ray per light, no
//! recursion. Outputs PNG and EXR.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod config;
pub mod ellipsoid;
pub mod error;
pub mod geometry;
pub mod interval;
pub mod light;
pub mod material;
pub mod output;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shading;
pub mod sphere;

pub use camera::Camera;
pub use error::{Error, Result};
pub use geometry::{Geometry, Intersection};
pub use light::Light;
pub use material::{Color, Material};
pub use output::{Framebuffer, ImageSink};
pub use ray::Ray;
pub use renderer::{RayTracer, RenderSettings};
pub use scene::Scene;
