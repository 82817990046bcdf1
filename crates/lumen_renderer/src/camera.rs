//! Thin-lens camera for ray generation.

use crate::sampling::random_in_unit_disk;
use lumen_math::{Ray, Vec3};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Camera placement and lens settings.
///
/// Build a [`Camera`] from it with [`CameraConfig::build`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub look_from: Vec3,
    pub look_at: Vec3,
    /// Up hint; need not be perpendicular to the view direction
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Image width / height
    pub aspect_ratio: f32,
    /// Lens diameter, 0 = pinhole
    pub aperture: f32,
    /// Distance from the lens to the plane of perfect focus
    pub focus_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            up: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 2.0,
            aperture: 0.0,
            focus_distance: 1.0,
        }
    }
}

impl CameraConfig {
    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, up: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.up = up;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, aperture: f32, focus_distance: f32) -> Self {
        self.vfov = vfov;
        self.aperture = aperture;
        self.focus_distance = focus_distance;
        self
    }

    /// Set the aspect ratio.
    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Derive the camera.
    pub fn build(&self) -> Camera {
        Camera::new(
            self.look_from,
            self.look_at,
            self.up,
            self.vfov,
            self.aspect_ratio,
            self.aperture,
            self.focus_distance,
        )
    }
}

/// Camera for generating rays into the scene.
///
/// All fields are derived once at construction.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3,
    lower_left: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    // Lens basis
    right: Vec3,
    up: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Create a camera looking from `look_from` towards `look_at`.
    pub fn new(
        look_from: Vec3,
        look_at: Vec3,
        up: Vec3,
        vfov: f32,
        aspect_ratio: f32,
        aperture: f32,
        focus_distance: f32,
    ) -> Self {
        let half_height = (vfov.to_radians() / 2.0).tan();
        let half_width = aspect_ratio * half_height;

        let look = (look_from - look_at).normalize();
        let right = up.cross(look).normalize();
        let up = look.cross(right);

        // Image plane sits on the focus plane so that distance is sharp
        let lower_left = look_from
            - right * half_width * focus_distance
            - up * half_height * focus_distance
            - look * focus_distance;
        let horizontal = right * 2.0 * half_width * focus_distance;
        let vertical = up * 2.0 * half_height * focus_distance;

        log::debug!(
            "Camera at {:?} looking along {:?}, lens radius {}",
            look_from,
            -look,
            aperture / 2.0
        );

        Self {
            origin: look_from,
            lower_left,
            horizontal,
            vertical,
            right,
            up,
            lens_radius: aperture / 2.0,
        }
    }

    /// Generate a ray through normalized image coordinates `(u, v)`.
    ///
    /// `(0, 0)` is the lower-left corner and `(1, 1)` the upper-right.
    pub fn get_ray(&self, u: f32, v: f32, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius <= 0.0 {
            Vec3::ZERO
        } else {
            let rd = random_in_unit_disk(rng) * self.lens_radius;
            self.right * rd.x + self.up * rd.y
        };

        let target = self.lower_left + self.horizontal * u + self.vertical * v;
        Ray::new(self.origin + offset, target - self.origin - offset)
    }

    /// Camera position.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }
}

impl Default for Camera {
    fn default() -> Self {
        CameraConfig::default().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_camera_basis() {
        let camera = CameraConfig::default()
            .with_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
            .build();

        assert_eq!(camera.origin(), Vec3::new(0.0, 0.0, 5.0));
        let center = camera.get_ray(0.5, 0.5, &mut StdRng::seed_from_u64(1));
        assert!((center.direction().normalize() - Vec3::NEG_Z).length() < 1e-6);
        assert!((camera.right - Vec3::X).length() < 1e-6);
        assert!((camera.up - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = Camera::default();
        let mut rng = StdRng::seed_from_u64(42);

        let ray = camera.get_ray(0.5, 0.5, &mut rng);
        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction().normalize() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_image_corners() {
        // 90 degree fov: half height 1, aspect 2: half width 2
        let camera = Camera::default();
        let mut rng = StdRng::seed_from_u64(42);

        let lower_left = camera.get_ray(0.0, 0.0, &mut rng);
        assert!((lower_left.direction() - Vec3::new(-2.0, -1.0, -1.0)).length() < 1e-5);

        let upper_right = camera.get_ray(1.0, 1.0, &mut rng);
        assert!((upper_right.direction() - Vec3::new(2.0, 1.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_pinhole_is_deterministic() {
        let camera = CameraConfig::default()
            .with_position(Vec3::new(3.0, 3.0, 2.0), Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_lens(20.0, 0.0, 5.0)
            .build();

        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);
        for (u, v) in [(0.0, 0.0), (0.25, 0.8), (1.0, 0.5)] {
            let a = camera.get_ray(u, v, &mut rng_a);
            let b = camera.get_ray(u, v, &mut rng_b);
            assert_eq!(a, b);
            assert_eq!(a.origin(), camera.origin());
        }
    }

    #[test]
    fn test_thin_lens_converges_on_focus_plane() {
        let focus_distance = 4.0;
        let camera = CameraConfig::default()
            .with_lens(40.0, 2.0, focus_distance)
            .build();
        let mut rng = StdRng::seed_from_u64(7);

        let mut origins_differ = false;
        let first = camera.get_ray(0.3, 0.6, &mut rng);
        for _ in 0..20 {
            let ray = camera.get_ray(0.3, 0.6, &mut rng);
            // Lens offsets stay within the aperture
            assert!((ray.origin() - camera.origin()).length() <= camera.lens_radius() + 1e-6);
            // Every ray reaches the same point on the focus plane at t = 1
            let focus_point = ray.at(1.0);
            assert!((focus_point.z + focus_distance).abs() < 1e-4);
            assert!((focus_point - first.at(1.0)).length() < 1e-4);
            origins_differ |= ray.origin() != first.origin();
        }
        assert!(origins_differ);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: CameraConfig =
            serde_json::from_str(r#"{ "vfov": 20.0, "aperture": 0.1 }"#).unwrap();

        assert_eq!(config.vfov, 20.0);
        assert_eq!(config.aperture, 0.1);
        assert_eq!(config.look_at, Vec3::NEG_Z);
        assert_eq!(config.focus_distance, 1.0);
    }
}
