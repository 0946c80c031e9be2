//! # Output Module
//!
//! The renderer writes pixels through the [`ImageSink`] trait and stores the
//! result once at the end. [`Framebuffer`] is the file-backed sink:
//! - PNG export clamps each channel to [0.0, 1.0] and quantizes to 8 bits
//! - EXR export keeps the unclamped linear f32 values
//!
//! Channel range and quantization are decided here, never in the tracer.

use std::path::Path;

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgb};
use log::{debug, info};

use crate::error::{Error, Result};
use crate::material::Color;

/// Destination for rendered pixels.
pub trait ImageSink {
    /// Record the color of pixel `(x, y)`.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);

    /// Persist the finished image to `destination`.
    fn store(&self, destination: &Path) -> Result<()>;
}

/// Encoders selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// 8-bit PNG, clamped.
    Png,
    /// 32-bit float OpenEXR, linear and unclamped.
    Exr,
}

impl OutputFormat {
    /// Pick the encoder from the destination's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "png" => Ok(Self::Png),
            "exr" => Ok(Self::Exr),
            _ => Err(Error::UnsupportedFormat(extension)),
        }
    }
}

/// In-memory f32 RGB image that can be stored as PNG or EXR.
pub struct Framebuffer {
    image: ImageBuffer<Rgb<f32>, Vec<f32>>,
}

impl Framebuffer {
    /// Create a black framebuffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: ImageBuffer::new(width, height),
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Stored color of pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let p = self.image.get_pixel(x, y);
        Color::new(p[0] as f64, p[1] as f64, p[2] as f64)
    }

    /// Clamp to [0, 1] and quantize to 8 bits per channel.
    pub fn to_rgb8(&self) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| {
            let pixel = self.image.get_pixel(x, y);
            Rgb([quantize(pixel[0]), quantize(pixel[1]), quantize(pixel[2])])
        })
    }

    fn save_png(&self, path: &Path) -> Result<()> {
        self.to_rgb8().save(path)?;
        info!("Image saved as {}", path.display());
        Ok(())
    }

    fn save_exr(&self, path: &Path) -> Result<()> {
        let width = self.width() as usize;
        write_rgb_file(path, width, self.height() as usize, |x, y| {
            let p = self.image.get_pixel(x as u32, y as u32);
            (p[0], p[1], p[2])
        })?;
        info!("HDR image saved as EXR: {}", path.display());
        Ok(())
    }
}

impl ImageSink for Framebuffer {
    /// Writes outside the buffer are dropped.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
            *pixel = Rgb([color.x as f32, color.y as f32, color.z as f32]);
        }
    }

    fn store(&self, destination: &Path) -> Result<()> {
        let format = OutputFormat::from_path(destination)?;
        debug!("Storing {}x{} image as {:?}", self.width(), self.height(), format);
        match format {
            OutputFormat::Png => self.save_png(destination),
            OutputFormat::Exr => self.save_exr(destination),
        }
    }
}

/// Linear [0, 1] to [0, 255]; out-of-range and NaN values are clamped.
fn quantize(channel: f32) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
