//! Lumen Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer over spheres with diffuse, metal and glass
//! materials, accelerated by a bounding volume hierarchy.
//!
//! # Example
//!
//! ```ignore
//! use lumen_renderer::*;
//!
//! let mut world = HittableList::new();
//! world.add(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, Material::lambertian(Color::splat(0.5))));
//!
//! let config = RenderConfig::default();
//! let camera = CameraConfig::default().with_aspect_ratio(config.aspect_ratio()).build();
//! let image = render(&camera, &world, &config, &mut rand::thread_rng());
//! ```

mod bvh;
mod camera;
mod error;
mod hittable;
mod material;
mod renderer;
mod sampling;
mod sphere;
mod texture;

pub use bvh::BvhNode;
pub use camera::{Camera, CameraConfig};
pub use error::{SceneError, SceneResult};
pub use hittable::{HitRecord, Hittable, HittableList, Object};
pub use material::{
    reflect, refract, schlick, Color, Dielectric, Lambertian, Material, Metal, ScatterResult,
};
pub use renderer::{
    color_to_rgb, linear_to_gamma, ray_color, render, render_pixel, sky_gradient, ImageBuffer,
    RenderConfig,
};
pub use sampling::{gen_f32, random_in_unit_disk, random_in_unit_sphere};
pub use sphere::Sphere;
pub use texture::Texture;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Aabb, Axis, Interval, Ray, Vec3};
