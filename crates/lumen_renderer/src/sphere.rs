//! Sphere primitive for ray tracing.

use crate::{HitRecord, Hittable, Material};
use lumen_math::{Aabb, Interval, Ray, Vec3};
use std::sync::Arc;

/// A sphere primitive.
///
/// A negative radius keeps the same surface but flips the normals inward,
/// which models the inner wall of a hollow glass shell.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
    bbox: Aabb,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Pass an `Arc<Material>` to share one material between many spheres.
    pub fn new(center: Vec3, radius: f32, material: impl Into<Arc<Material>>) -> Self {
        let rvec = Vec3::splat(radius);
        let bbox = Aabb::from_points(center - rvec, center + rvec);

        Self {
            center,
            radius,
            material: material.into(),
            bbox,
        }
    }

    /// Build the record for a root already known to be in range.
    fn record(&self, ray: &Ray, t: f32) -> HitRecord<'_> {
        let p = ray.at(t);
        HitRecord {
            t,
            p,
            normal: (p - self.center) / self.radius,
            u: 0.0,
            v: 0.0,
            material: self.material.as_ref(),
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root first
        let near = (-b - sqrtd) / a;
        if ray_t.surrounds(near) {
            return Some(self.record(ray, near));
        }
        let far = (-b + sqrtd) / a;
        if ray_t.surrounds(far) {
            return Some(self.record(ray, far));
        }

        None
    }

    fn bounding_box(&self, _time: Interval) -> Option<Aabb> {
        Some(self.bbox)
    }
}
