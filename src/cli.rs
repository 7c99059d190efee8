use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
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
#[derive(Parser)]
#[command(name = "prismray")]
#[command(about = "A Whitted-style ray tracer in Rust")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "512", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "512", help = "Image height in pixels")]
    pub height: u32,

    /// Enable jittered supersampling (anti-aliasing)
    #[arg(short, long, help = "Enable jittered supersampling")]
    pub antialias: bool,

    /// Enable depth of field via lens-origin jitter
    #[arg(short, long, help = "Enable depth of field")]
    pub depth_of_field: bool,

    /// Enable mirror reflections on reflective spheres
    #[arg(short, long, help = "Enable mirror reflections")]
    pub reflection: bool,

    /// Enable Fresnel-blended transparency on refractive spheres
    #[arg(short, long, help = "Enable transparency")]
    pub transparency: bool,

    /// Number of active lights (1-3)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..=3), help = "Number of active lights (1-3)")]
    pub lights: u32,

    /// Supersample grid edge length (N gives N^2 samples per pixel)
    #[arg(long, default_value = "5", help = "Supersample grid edge length")]
    pub grid: u32,

    /// Recursion budget for primary rays
    #[arg(long, default_value = "5", help = "Recursion budget for primary rays")]
    pub depth: u32,

    /// Random seed for jittered sampling
    #[arg(long, default_value = "0", help = "Random seed for jittered sampling")]
    pub seed: u64,

    /// Send image to TEV for real-time visualization
    #[arg(long, help = "Send image to TEV for real-time visualization")]
    pub tev: bool,

    /// TEV client IP address and port (automatically enables --tev)
    #[arg(long, help = "TEV client IP address and port (automatically enables --tev)")]
    pub tev_address: Option<String>,

    /// Output file path (.png for 8-bit with gamma correction, .exr for HDR linear)
    #[arg(short, long, default_value = "output.png", help = "Output file path (.png for 8-bit with gamma correction, .exr for HDR linear)")]
    pub output: String,
}
