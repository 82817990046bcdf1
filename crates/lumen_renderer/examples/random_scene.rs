//! Renders the classic "random spheres" scene and saves it as a PNG.
//!
//! Usage: `cargo run --release --example random_scene [output.png]`
//! Set `RUST_LOG=info` to see progress.

use std::sync::Arc;

use anyhow::{Context, Result};
use lumen_renderer::{
    render, BvhNode, CameraConfig, Color, HittableList, Interval, Material, RenderConfig,
    Sphere, Texture, Vec3,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> Result<()> {
    env_logger::init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "random_scene.png".to_string());

    let mut rng = StdRng::seed_from_u64(2024);

    let start = std::time::Instant::now();
    let scene = build_scene(&mut rng);
    log::info!("Created {} objects", scene.len());
    let world = BvhNode::new(scene.into_objects(), Interval::new(0.0, 0.0), &mut rng)
        .context("Failed to build BVH")?;
    log::info!("Scene built in {:?}", start.elapsed());

    let config = RenderConfig {
        image_width: 600,
        image_height: 400,
        samples_per_pixel: 10,
        ..Default::default()
    };

    let look_from = Vec3::new(13.0, 2.0, 3.0);
    let camera = CameraConfig::default()
        .with_position(look_from, Vec3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.1, 10.0)
        .with_aspect_ratio(config.aspect_ratio())
        .build();

    let start = std::time::Instant::now();
    let image = render(&camera, &world, &config, &mut rng);
    log::info!("Rendered in {:?}", start.elapsed());

    let buffer = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
        .context("Pixel buffer does not match image dimensions")?;
    buffer
        .save(&output)
        .with_context(|| format!("Failed to write {}", output))?;
    println!("Saved to {}", output);

    Ok(())
}

fn build_scene(rng: &mut StdRng) -> HittableList {
    let mut scene = HittableList::new();

    // Checkered ground
    let ground = Texture::checker(Color::new(0.2, 0.3, 0.1), Color::new(0.9, 0.9, 0.9));
    scene.add(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Material::lambertian(ground),
    ));

    let glass = Arc::new(Material::dielectric(1.5));

    for a in -11..11 {
        for b in -11..11 {
            let center = Vec3::new(
                a as f32 + 0.9 * rng.gen::<f32>(),
                0.2,
                b as f32 + 0.9 * rng.gen::<f32>(),
            );
            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let choose_mat: f32 = rng.gen();
            let material = if choose_mat < 0.8 {
                // Diffuse
                let albedo = Color::new(
                    rng.gen::<f32>() * rng.gen::<f32>(),
                    rng.gen::<f32>() * rng.gen::<f32>(),
                    rng.gen::<f32>() * rng.gen::<f32>(),
                );
                Arc::new(Material::lambertian(albedo))
            } else if choose_mat < 0.95 {
                // Metal
                let albedo = Color::new(
                    0.5 * (1.0 + rng.gen::<f32>()),
                    0.5 * (1.0 + rng.gen::<f32>()),
                    0.5 * (1.0 + rng.gen::<f32>()),
                );
                Arc::new(Material::metal(albedo, 0.5 * rng.gen::<f32>()))
            } else {
                glass.clone()
            };
            scene.add(Sphere::new(center, 0.2, material));
        }
    }

    // Three large spheres, the glass one hollow
    scene.add(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, glass.clone()));
    scene.add(Sphere::new(Vec3::new(0.0, 1.0, 0.0), -0.9, glass));
    scene.add(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Material::lambertian(Color::new(0.4, 0.2, 0.1)),
    ));
    scene.add(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Material::metal(Color::new(0.7, 0.6, 0.5), 0.0),
    ));

    scene
}
