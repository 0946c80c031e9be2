//! Render loop: pixel mapping, nearest-hit search, shading and pixel output.

use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::material::Color;
use crate::output::ImageSink;
use crate::scene::Scene;
use crate::shading::shade;

/// Per-render configuration passed explicitly into [`RayTracer::render`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Color of pixels whose primary ray hits nothing
    pub background: Color,
    /// Trace scanlines on the rayon thread pool
    pub parallel: bool,
    /// Draw a progress bar on stderr
    pub progress: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            background: Color::new(0.2, 0.2, 0.2),
            parallel: true,
            progress: true,
        }
    }
}

/// Casts primary rays through a camera into a scene.
pub struct RayTracer<'a> {
    scene: &'a Scene,
}

impl<'a> RayTracer<'a> {
    /// Create a tracer over a fully constructed scene.
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }

    /// Color of pixel `(i, j)`.
    pub fn trace_pixel(&self, camera: &Camera, settings: &RenderSettings, i: u32, j: u32) -> Color {
        let ray = camera.primary_ray(i, j, settings.width, settings.height);
        let hit = self.scene.find_nearest(&ray, camera.clip_window());

        if hit.is_hit() {
            shade(self.scene, &hit, camera.position)
        } else {
            settings.background
        }
    }

    /// Render every pixel and hand it to `sink`.
    ///
    /// Scanlines may be traced in parallel, but `sink.set_pixel` is always
    /// called once per pixel, sequentially, in row-major order.
    ///
    /// `sink` should cover `settings.width` x `settings.height`; a
    /// [`Framebuffer`](crate::output::Framebuffer) drops pixels outside its bounds.
    pub fn render(&self, camera: &Camera, settings: &RenderSettings, sink: &mut dyn ImageSink) {
        let (width, height) = (settings.width, settings.height);
        debug!(
            "Scene has {} geometries and {} lights",
            self.scene.geometries.len(),
            self.scene.lights.len()
        );

        let generation_start = Instant::now();
        let pb = progress_bar(height, settings.progress);

        let trace_row = |j: u32| -> Vec<Color> {
            let row = (0..width).map(|i| self.trace_pixel(camera, settings, i, j)).collect();
            pb.inc(1);
            row
        };

        let rows: Vec<Vec<Color>> = if settings.parallel {
            info!("Generating image using {} CPU cores...", rayon::current_num_threads());
            (0..height).into_par_iter().map(trace_row).collect()
        } else {
            info!("Generating image on a single thread...");
            (0..height).map(trace_row).collect()
        };
        pb.finish_and_clear();

        for (j, row) in (0..height).zip(rows) {
            for (i, color) in (0..width).zip(row) {
                sink.set_pixel(i, j, color);
            }
        }

        info!("Image generated in {:.2?}", generation_start.elapsed());
    }
}

fn progress_bar(rows: u32, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(rows as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} rows ETA: {eta}") {
        pb.set_style(style);
    }
    pb
}
