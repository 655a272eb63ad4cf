use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use glint::scene::{RenderSettings, DEFAULT_FAR_PLANE, MAX_DEPTH};

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
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
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "Recursive sphere ray tracer with hard shadows and mirror reflections")]
pub struct Args {
    /// Logging level; overrides RUST_LOG when given
    #[arg(long)]
    pub debug_level: Option<LogLevel>,

    /// Image width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// Field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    pub fov: f32,

    /// Maximum trace distance
    #[arg(long, default_value_t = DEFAULT_FAR_PLANE)]
    pub far_plane: f32,

    /// Reflection recursion limit
    #[arg(long, default_value_t = MAX_DEPTH)]
    pub max_depth: u32,

    /// Output file path (.jpg/.jpeg or .png for 8-bit, .exr for HDR linear)
    #[arg(short, long, default_value = "out.jpg")]
    pub output: PathBuf,

    /// Render on the calling thread instead of the rayon pool
    #[arg(long)]
    pub sequential: bool,
}

impl Args {
    /// Render settings described by these arguments (validated later).
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings::new(self.width, self.height, self.fov.to_radians())
            .with_far_plane(self.far_plane)
            .with_max_depth(self.max_depth)
    }
}
