use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Verbosity accepted by `--debug-level`.
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Each verbosity maps onto the `log` filter of the same name.
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "phongtrace")]
#[command(about = "Ray caster for spheres and ellipsoids with Phong shading")]
pub struct Args {
    /// Scene description in TOML; the built-in demo scene is used when omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels (overrides the scene file)
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels (overrides the scene file)
    #[arg(long)]
    pub height: Option<u32>,

    /// Output file path (.png for clamped 8-bit, .exr for HDR linear)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Trace every scanline on the main thread
    #[arg(long)]
    pub single_threaded: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}
