//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a bounded bounce count
//! - A white-to-blue sky gradient as the only light source
//! - Anti-aliasing via multi-sampling
//! - Gamma correction

use crate::sampling::gen_f32;
use crate::{Camera, Color, Hittable};
use lumen_math::{Interval, Ray};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Sky color at the zenith.
const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels
    pub image_width: u32,
    /// Output height in pixels
    pub image_height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Bounces allowed before a path is treated as absorbed
    pub max_depth: u32,
    /// Minimum hit distance, avoids self-intersection ("shadow acne")
    pub min_hit_distance: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            image_height: 200,
            samples_per_pixel: 100,
            max_depth: 50,
            min_hit_distance: 0.001,
        }
    }
}

impl RenderConfig {
    /// Image width / height, for matching the camera.
    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }
}

/// Compute the color seen by a ray.
///
/// `depth` counts bounces already taken. A hit at `depth >= max_depth`
/// contributes nothing, as does a hit whose material absorbs the ray.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(rec) = world.hit(ray, Interval::new(config.min_hit_distance, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    if depth >= config.max_depth {
        return Color::ZERO;
    }

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            result.attenuation * ray_color(&result.scattered, world, depth + 1, config, rng)
        }
        None => Color::ZERO,
    }
}

/// Compute sky gradient background.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    Color::ONE.lerp(SKY_BLUE, a)
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to gamma-corrected 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let quantize = |c: f32| (255.99 * Interval::UNIT.clamp(linear_to_gamma(c))) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Render a single pixel with multi-sampling.
///
/// `y` counts rows from the bottom of the image. Zero samples give black.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    if config.samples_per_pixel == 0 {
        return Color::ZERO;
    }

    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = (x as f32 + gen_f32(rng)) / config.image_width as f32;
        let v = (y as f32 + gen_f32(rng)) / config.image_height as f32;
        let ray = camera.get_ray(u, v, rng);
        pixel_color += ray_color(&ray, world, 0, config, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}

/// Linear-color image, stored row-major with the top row first.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y), y counted from the top.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Set the pixel at (x, y), y counted from the top.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    /// Convert to packed gamma-corrected RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| color_to_rgb(*c)).collect()
    }
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded; callers wanting parallelism can split the image and
/// give each worker its own generator.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        config.image_width,
        config.image_height,
        config.samples_per_pixel,
        config.max_depth
    );

    let mut image = ImageBuffer::new(config.image_width, config.image_height);

    for row in 0..config.image_height {
        log::trace!("Scanline {}/{}", row + 1, config.image_height);
        let y = config.image_height - 1 - row;
        for x in 0..config.image_width {
            let color = render_pixel(camera, world, x, y, config, rng);
            image.set(x, row, color);
        }
    }

    image
}
