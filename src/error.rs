//! Error types for scene loading and image output.

use thiserror::Error;

/// Errors raised before rendering starts or while storing the image.
///
/// The tracing core itself never fails; a miss is an ordinary result.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a scene file or writing an image failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Scene file is not valid TOML or does not match the schema.
    #[error("failed to parse scene: {0}")]
    Parse(#[from] toml::de::Error),

    /// Scene parses but describes something that cannot be rendered.
    #[error("invalid scene: {0}")]
    InvalidScene(String),

    /// PNG encoding failed.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// EXR encoding failed.
    #[error("exr encoding failed: {0}")]
    Exr(#[from] exr::error::Error),

    /// Destination extension has no encoder.
    #[error("unsupported output format '{0}', expected .png or .exr")]
    UnsupportedFormat(String),
}

/// Result type for scene and output operations.
pub type Result<T> = std::result::Result<T, Error>;
