//! Hittable trait, HitRecord, and the closed set of scene objects.

use crate::{BvhNode, Material, Sphere};
use lumen_math::{Aabb, Interval, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal, pointing out of the surface
    pub normal: Vec3,
    /// UV texture coordinates
    pub u: f32,
    pub v: f32,
    /// Material at the intersection point, owned by the scene
    pub material: &'a Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the nearest intersection strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;

    /// Bounding box of this object over the time window `time`.
    ///
    /// Returns `None` for objects with no finite bounds.
    fn bounding_box(&self, time: Interval) -> Option<Aabb>;
}

/// Any object that can live in a scene.
pub enum Object {
    Sphere(Sphere),
    List(HittableList),
    Bvh(BvhNode),
}

impl Hittable for Object {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Object::Sphere(sphere) => sphere.hit(ray, ray_t),
            Object::List(list) => list.hit(ray, ray_t),
            Object::Bvh(bvh) => bvh.hit(ray, ray_t),
        }
    }

    fn bounding_box(&self, time: Interval) -> Option<Aabb> {
        match self {
            Object::Sphere(sphere) => sphere.bounding_box(time),
            Object::List(list) => list.bounding_box(time),
            Object::Bvh(bvh) => bvh.bounding_box(time),
        }
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Sphere(sphere)
    }
}

impl From<HittableList> for Object {
    fn from(list: HittableList) -> Self {
        Object::List(list)
    }
}

impl From<BvhNode> for Object {
    fn from(bvh: BvhNode) -> Self {
        Object::Bvh(bvh)
    }
}

/// A flat list of objects, searched linearly.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Object>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: impl Into<Object>) {
        self.objects.push(object.into());
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Take the objects out of the list, e.g. to build a BVH over them.
    pub fn into_objects(self) -> Vec<Object> {
        self.objects
    }
}

impl From<Vec<Object>> for HittableList {
    fn from(objects: Vec<Object>) -> Self {
        Self { objects }
    }
}

impl FromIterator<Object> for HittableList {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }

    fn bounding_box(&self, time: Interval) -> Option<Aabb> {
        let mut objects = self.objects.iter();
        let first = objects.next()?.bounding_box(time)?;
        objects.try_fold(first, |acc, object| {
            Some(Aabb::surrounding(&acc, &object.bounding_box(time)?))
        })
    }
}
