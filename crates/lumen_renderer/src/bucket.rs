//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon. Pixels never depend on each other, so the
//! result is identical to the sequential render.

use lumen_core::Scene;
use rayon::prelude::*;

use crate::renderer::{color_to_rgba, render_pixel, ImageBuffer, RenderConfig};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets covering an image in scanline order.
///
/// Edge buckets are clipped to the image; a `bucket_size` of 0 is treated as 1.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Render a single bucket of a `width` x `height` image.
///
/// Returns RGBA pixels in row-major order within the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let column = bucket.x + local_x;
            let row = bucket.y + local_y;
            let color = render_pixel(scene, column, row, width, height, config);
            pixels.push(color_to_rgba(color));
        }
    }

    BucketResult::new(*bucket, pixels)
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// RGBA pixels in row-major order
    pub pixels: Vec<[u8; 4]>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<[u8; 4]>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the bucket's pixels into their place in the full image.
    pub fn write_to(&self, image: &mut ImageBuffer) {
        let bucket = &self.bucket;
        for (local_y, row_pixels) in self.pixels.chunks(bucket.width as usize).enumerate() {
            let start = (bucket.y as usize + local_y) * image.width as usize + bucket.x as usize;
            image.pixels[start..start + row_pixels.len()].copy_from_slice(row_pixels);
        }
    }
}

/// Render every bucket on the rayon pool, then assemble the image.
pub(crate) fn render_parallel(
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> ImageBuffer {
    let buckets = generate_buckets(width, height, config.bucket_size);
    log::trace!("Rendering {} buckets in parallel", buckets.len());

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, scene, width, height, config))
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        result.write_to(&mut image);
    }
    image
}
