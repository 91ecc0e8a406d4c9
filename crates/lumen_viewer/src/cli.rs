use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

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

/// Built-in scenes
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SceneChoice {
    /// Four spheres, a triangle and all three light kinds
    Basic,
    /// Two facing mirrors around a sphere
    Mirrors,
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "Render a built-in scene with the Lumen ray tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 600)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Maximum number of reflection bounces
    #[arg(long, short = 'd', default_value_t = 3)]
    pub depth: u32,

    /// Scene to render
    #[arg(long, value_enum, default_value_t = SceneChoice::Basic)]
    pub scene: SceneChoice,

    /// Render buckets in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    pub output: String,

    /// Logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}
