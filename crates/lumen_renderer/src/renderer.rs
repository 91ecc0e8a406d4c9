//! Image rendering entry points.
//!
//! Maps every pixel of the output buffer to a ray through the viewport,
//! traces it, and writes the clamped 8-bit color back to the buffer.

use std::time::Instant;

use lumen_core::{Rgb, Scene, SceneError, Viewport};
use lumen_math::{Interval, Vec3};
use thiserror::Error;

use crate::bucket::{render_parallel, DEFAULT_BUCKET_SIZE};
use crate::tracer::{trace_ray, Color};

/// Errors that can occur before rendering starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("output image must not be empty, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("invalid scene: {0}")]
    InvalidScene(#[from] SceneError),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum number of reflection bounces
    pub max_depth: u32,
    /// Near bound for primary rays (the viewport sits at t = 1)
    pub t_min: f32,
    /// Render buckets on the rayon thread pool
    pub parallel: bool,
    /// Bucket edge length in pixels for parallel rendering
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            t_min: 1.0,
            parallel: false,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Set the reflection depth.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable bucket-parallel rendering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Convert a color to 8-bit RGBA.
///
/// Each channel is clamped to [0, 255] and truncated; alpha is always opaque.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let Rgb { r, g, b } = Rgb::from_vec3(color);
    [r, g, b, 255]
}

/// Centered canvas coordinates of a buffer pixel.
///
/// The canvas origin is the image center with +y pointing up, so row 0 is the
/// top of the image.
#[inline]
pub fn pixel_to_canvas(column: u32, row: u32, width: u32, height: u32) -> (i32, i32) {
    let x = column as i32 - (width / 2) as i32;
    let y = (height / 2) as i32 - row as i32 - 1;
    (x, y)
}

/// Buffer pixel for centered canvas coordinates, if it lies inside the image.
///
/// Exact inverse of [`pixel_to_canvas`].
pub fn canvas_to_pixel(x: i32, y: i32, width: u32, height: u32) -> Option<(u32, u32)> {
    let column = x + (width / 2) as i32;
    let row = (height / 2) as i32 - y - 1;
    if column < 0 || row < 0 || column >= width as i32 || row >= height as i32 {
        return None;
    }
    Some((column as u32, row as u32))
}

/// Point on the viewport for canvas coordinates.
#[inline]
pub fn canvas_to_viewport(x: i32, y: i32, width: u32, height: u32, viewport: &Viewport) -> Vec3 {
    Vec3::new(
        x as f32 * viewport.width / width as f32,
        y as f32 * viewport.height / height as f32,
        viewport.distance,
    )
}

/// Trace the primary ray for one buffer pixel.
pub fn render_pixel(
    scene: &Scene,
    column: u32,
    row: u32,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Color {
    let (x, y) = pixel_to_canvas(column, row, width, height);
    let direction = canvas_to_viewport(x, y, width, height, &scene.viewport);
    let ray = scene.camera.ray_through(direction);
    trace_ray(scene, &ray, Interval::above(config.t_min), config.max_depth)
}

/// RGBA8 image buffer in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 4]>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 255]; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, column: u32, row: u32) -> usize {
        row as usize * self.width as usize + column as usize
    }

    /// Get the pixel at (column, row).
    pub fn get(&self, column: u32, row: u32) -> [u8; 4] {
        self.pixels[self.index(column, row)]
    }

    /// Set the pixel at (column, row).
    pub fn set(&mut self, column: u32, row: u32, rgba: [u8; 4]) {
        let index = self.index(column, row);
        self.pixels[index] = rgba;
    }

    /// Flat RGBA bytes, `width * height * 4` long.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy out the flat RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

/// Render the scene into a `width` x `height` buffer.
///
/// Uses the viewport stored in the scene. The scene is validated first; after
/// that the render always runs to completion.
pub fn render(
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> RenderResult<ImageBuffer> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyImage { width, height });
    }
    if let Err(err) = scene.validate() {
        log::warn!("Refusing to render '{}': {}", scene.name, err);
        return Err(err.into());
    }

    log::debug!(
        "Rendering '{}' at {}x{}: {} primitives, {} lights, depth {}{}",
        scene.name,
        width,
        height,
        scene.primitive_count(),
        scene.light_count(),
        config.max_depth,
        if config.parallel { ", parallel" } else { "" }
    );
    let start = Instant::now();

    let image = if config.parallel {
        render_parallel(scene, width, height, config)
    } else {
        let mut image = ImageBuffer::new(width, height);
        for row in 0..height {
            for column in 0..width {
                let color = render_pixel(scene, column, row, width, height, config);
                image.set(column, row, color_to_rgba(color));
            }
        }
        image
    };

    log::debug!("Rendered '{}' in {:?}", scene.name, start.elapsed());
    Ok(image)
}

/// Render with explicit viewport parameters and the default configuration.
///
/// The scene's own viewport is ignored.
pub fn render_with_viewport(
    scene: &Scene,
    viewport_width: f32,
    viewport_height: f32,
    viewport_distance: f32,
    width: u32,
    height: u32,
) -> RenderResult<ImageBuffer> {
    let scene = scene
        .clone()
        .with_viewport(Viewport::new(viewport_width, viewport_height, viewport_distance));
    render(&scene, width, height, &RenderConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{samples, Light, Surface};
    use lumen_math::Camera;

    fn red_sphere_scene() -> Scene {
        let mut scene = Scene::new("red sphere").with_background(Rgb::new(10, 20, 30));
        scene.add_sphere(
            Vec3::new(0.0, -1.0, 3.0),
            1.0,
            Surface::new(Rgb::new(255, 0, 0)),
        );
        scene.add_light(Light::ambient(1.0));
        scene
    }

    #[test]
    fn test_color_to_rgba() {
        assert_eq!(color_to_rgba(Vec3::new(255.0, 0.0, 0.0)), [255, 0, 0, 255]);
        assert_eq!(color_to_rgba(Vec3::new(400.0, -3.0, 99.9)), [255, 0, 99, 255]);
    }

    #[test]
    fn test_pixel_canvas_mapping() {
        // Top-left pixel is the upper-left corner of the canvas
        assert_eq!(pixel_to_canvas(0, 0, 4, 4), (-2, 1));
        // Bottom-right pixel
        assert_eq!(pixel_to_canvas(3, 3, 4, 4), (1, -2));

        for (w, h) in [(4, 4), (5, 3), (1, 1), (8, 6)] {
            for row in 0..h {
                for column in 0..w {
                    let (x, y) = pixel_to_canvas(column, row, w, h);
                    assert_eq!(canvas_to_pixel(x, y, w, h), Some((column, row)));
                }
            }
        }
        assert_eq!(canvas_to_pixel(2, 0, 4, 4), None);
        assert_eq!(canvas_to_pixel(0, 2, 4, 4), None);
    }

    #[test]
    fn test_canvas_to_viewport() {
        let viewport = Viewport::new(2.0, 1.0, 3.0);
        assert_eq!(
            canvas_to_viewport(50, -25, 100, 50, &viewport),
            Vec3::new(1.0, -0.5, 3.0)
        );
        assert_eq!(canvas_to_viewport(0, 0, 100, 50, &viewport), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let scene = red_sphere_scene();
        assert_eq!(
            render(&scene, 0, 10, &RenderConfig::default()),
            Err(RenderError::EmptyImage { width: 0, height: 10 })
        );
    }

    #[test]
    fn test_invalid_scene_is_rejected() {
        let mut scene = red_sphere_scene();
        scene.add_light(Light::ambient(-0.5));

        let result = render(&scene, 4, 4, &RenderConfig::default());
        assert!(matches!(result, Err(RenderError::InvalidScene(_))));
    }

    #[test]
    fn test_buffer_layout() {
        let scene = red_sphere_scene();
        let image = render(&scene, 6, 4, &RenderConfig::default()).expect("render");

        assert_eq!(image.pixels.len(), 24);
        assert_eq!(image.as_bytes().len(), 6 * 4 * 4);
        assert!(image.pixels.iter().all(|p| p[3] == 255));
        assert_eq!(&image.to_rgba()[..4], &image.get(0, 0)[..]);
    }

    #[test]
    fn test_red_sphere_end_to_end() {
        let scene = red_sphere_scene();
        let (width, height) = (20, 20);
        let image = render(&scene, width, height, &RenderConfig::default()).expect("render");

        // Canvas (0, -6) looks along (0, -0.3, 1), through the sphere's middle
        let (column, row) = canvas_to_pixel(0, -6, width, height).expect("on canvas");
        assert_eq!(image.get(column, row), [255, 0, 0, 255]);

        // Top rows look up into empty space
        assert_eq!(image.get(0, 0), [10, 20, 30, 255]);
        assert_eq!(image.get(width - 1, 0), [10, 20, 30, 255]);
    }

    #[test]
    fn test_image_is_not_flipped() {
        // A sphere above the horizon must land in the upper half of the buffer
        let mut scene = Scene::new("up");
        scene.add_sphere(Vec3::new(0.0, 1.5, 4.0), 1.0, Surface::new(Rgb::WHITE));
        scene.add_light(Light::ambient(1.0));

        let image = render(&scene, 16, 16, &RenderConfig::default()).expect("render");
        let lit_rows: Vec<u32> = (0..16)
            .filter(|&row| (0..16).any(|column| image.get(column, row) != [0, 0, 0, 255]))
            .collect();

        assert!(!lit_rows.is_empty());
        assert!(lit_rows.iter().all(|&row| row < 8));
    }

    #[test]
    fn test_moved_camera_matches_moved_scene() {
        let offset = Vec3::new(5.0, 0.0, -2.0);
        let mut moved = Scene::new("moved")
            .with_background(Rgb::new(10, 20, 30))
            .with_camera(Camera::new(offset));
        moved.add_sphere(
            Vec3::new(0.0, -1.0, 3.0) + offset,
            1.0,
            Surface::new(Rgb::new(255, 0, 0)),
        );
        moved.add_light(Light::ambient(1.0));

        let config = RenderConfig::default();
        let expected = render(&red_sphere_scene(), 20, 20, &config).expect("render");
        let image = render(&moved, 20, 20, &config).expect("render");
        assert_eq!(image, expected);
    }

    #[test]
    fn test_rotated_camera() {
        // Yawed 90 degrees the camera looks down +X, where the sphere now sits
        let mut scene = Scene::new("yawed")
            .with_background(Rgb::new(10, 20, 30))
            .with_camera(Camera::default().with_yaw(90.0));
        scene.add_sphere(
            Vec3::new(3.0, -1.0, 0.0),
            1.0,
            Surface::new(Rgb::new(255, 0, 0)),
        );
        scene.add_light(Light::ambient(1.0));

        let (width, height) = (20, 20);
        let image = render(&scene, width, height, &RenderConfig::default()).expect("render");
        let (column, row) = canvas_to_pixel(0, -6, width, height).expect("on canvas");
        assert_eq!(image.get(column, row), [255, 0, 0, 255]);
        assert_eq!(image.get(0, 0), [10, 20, 30, 255]);

        // The origin camera sees nothing of it
        let front = render(
            &scene.clone().with_camera(Camera::default()),
            width,
            height,
            &RenderConfig::default(),
        )
        .expect("render");
        assert!(front.pixels.iter().all(|p| *p == [10, 20, 30, 255]));
    }

    #[test]
    fn test_render_with_viewport_overrides_scene() {
        let scene = red_sphere_scene();
        let explicit = render_with_viewport(&scene, 1.0, 1.0, 1.0, 12, 12).expect("render");
        let stored = render(&scene, 12, 12, &RenderConfig::default()).expect("render");
        assert_eq!(explicit, stored);

        let wide = render_with_viewport(&scene, 4.0, 4.0, 1.0, 12, 12).expect("render");
        assert_ne!(wide, stored);
    }

    #[test]
    fn test_basic_sample_renders() {
        let scene = samples::basic();
        let image = render(&scene, 32, 32, &RenderConfig::default()).expect("render");

        let distinct: std::collections::HashSet<[u8; 4]> = image.pixels.iter().copied().collect();
        assert!(distinct.len() > 10);
    }
}
