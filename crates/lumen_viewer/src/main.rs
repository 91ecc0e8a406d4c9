use anyhow::{Context, Result};
use clap::Parser;
use lumen_core::{samples, Scene};
use lumen_renderer::{render, ImageBuffer, RenderConfig};

mod cli;

use cli::{Args, SceneChoice};

fn build_scene(choice: SceneChoice) -> Scene {
    match choice {
        SceneChoice::Basic => samples::basic(),
        SceneChoice::Mirrors => samples::mirrors(),
    }
}

fn save_png(frame: &ImageBuffer, path: &str) -> Result<()> {
    let png = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_rgba())
        .context("Pixel buffer does not match image dimensions")?;
    png.save(path).with_context(|| format!("Failed to write {}", path))?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Lumen");

    let scene = build_scene(args.scene);
    log::info!(
        "Scene '{}': {} primitives, {} lights",
        scene.name,
        scene.primitive_count(),
        scene.light_count()
    );

    let config = RenderConfig::default()
        .with_max_depth(args.depth)
        .with_parallel(args.parallel);

    let start = std::time::Instant::now();
    let frame = render(&scene, args.width, args.height, &config)
        .with_context(|| format!("Failed to render scene '{}'", scene.name))?;
    log::info!(
        "Rendered {}x{} in {:?}",
        frame.width,
        frame.height,
        start.elapsed()
    );

    save_png(&frame, &args.output)?;
    log::info!("Saved {}", args.output);

    Ok(())
}
