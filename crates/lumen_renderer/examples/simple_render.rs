//! Simple ray tracer example.
//!
//! Renders the basic sample scene and saves it in PPM format.

use lumen_core::samples;
use lumen_renderer::{render, ImageBuffer, RenderConfig};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    env_logger::init();

    println!("Lumen Ray Tracer - Simple Example");
    println!("=================================");

    let scene = samples::basic();
    println!(
        "Scene '{}': {} primitives, {} lights",
        scene.name,
        scene.primitive_count(),
        scene.light_count()
    );

    let config = RenderConfig::default().with_parallel(true);
    let (width, height) = (600, 600);

    println!("Rendering {}x{} with depth {}...", width, height, config.max_depth);

    let start = std::time::Instant::now();
    let image = render(&scene, width, height, &config).expect("Failed to render scene");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for [r, g, b, _] in &image.pixels {
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    Ok(())
}
