//! Bounding Volume Hierarchy (BVH) acceleration structure.
//!
//! A binary tree of bounding boxes. Each level sorts its objects along a
//! randomly chosen axis and splits them in half, so the expected query
//! depth is O(log n). Picking the axis at random rather than by extent is
//! a deliberate simplification of the split heuristic.

use crate::{HitRecord, Hittable, Object, SceneError, SceneResult};
use lumen_math::{Aabb, Axis, Interval, Ray};
use rand::{Rng, RngCore};

/// BVH node - either a branch with two children or a leaf with one object.
///
/// Children are owned exclusively; a child is either a scene object or a
/// nested `BvhNode` wrapped in `Object::Bvh`.
pub enum BvhNode {
    /// Internal node with two children.
    Branch {
        left: Box<Object>,
        right: Box<Object>,
        bbox: Aabb,
    },
    /// A node built over a single object.
    Leaf { object: Box<Object>, bbox: Aabb },
}

impl BvhNode {
    /// Create a BVH from a list of objects.
    ///
    /// `time` is the shutter window the bounding boxes must cover. Fails if
    /// the list is empty or any object cannot report a bounding box.
    pub fn new(objects: Vec<Object>, time: Interval, rng: &mut dyn RngCore) -> SceneResult<Self> {
        if objects.is_empty() {
            return Err(SceneError::EmptyBvh);
        }

        let count = objects.len();
        let items = objects
            .into_iter()
            .map(|object| {
                let bbox = object
                    .bounding_box(time)
                    .ok_or(SceneError::MissingBoundingBox)?;
                Ok((bbox, object))
            })
            .collect::<SceneResult<Vec<_>>>()?;

        let node = Self::build(items, rng);
        log::info!("Built BVH over {} objects", count);
        log::debug!("BVH depth: {}", node.depth());

        Ok(node)
    }

    /// Recursive BVH construction over objects with known bounds.
    fn build(mut items: Vec<(Aabb, Object)>, rng: &mut dyn RngCore) -> Self {
        if items.len() == 1 {
            let (bbox, object) = items.remove(0);
            return BvhNode::Leaf {
                object: Box::new(object),
                bbox,
            };
        }

        let axis = Axis::ALL[rng.gen_range(0..Axis::ALL.len())];
        items.sort_by(|(a, _), (b, _)| {
            axis.of(a.min)
                .partial_cmp(&axis.of(b.min))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // Split at midpoint
        let right_items = items.split_off(items.len() / 2);
        let (left_box, left) = Self::child(items, rng);
        let (right_box, right) = Self::child(right_items, rng);

        BvhNode::Branch {
            left: Box::new(left),
            right: Box::new(right),
            bbox: Aabb::surrounding(&left_box, &right_box),
        }
    }

    /// A lone object becomes a child directly; larger groups get a subtree.
    fn child(mut items: Vec<(Aabb, Object)>, rng: &mut dyn RngCore) -> (Aabb, Object) {
        if items.len() == 1 {
            return items.remove(0);
        }
        let node = Self::build(items, rng);
        (node.bbox(), Object::Bvh(node))
    }

    /// The cached bounding box of this node.
    pub fn bbox(&self) -> Aabb {
        match self {
            BvhNode::Branch { bbox, .. } | BvhNode::Leaf { bbox, .. } => *bbox,
        }
    }

    /// Number of BVH levels below and including this node.
    pub fn depth(&self) -> usize {
        let child_depth = |object: &Object| match object {
            Object::Bvh(node) => node.depth(),
            _ => 0,
        };

        match self {
            BvhNode::Leaf { object, .. } => 1 + child_depth(object),
            BvhNode::Branch { left, right, .. } => 1 + child_depth(left).max(child_depth(right)),
        }
    }
}

impl Hittable for BvhNode {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        if !self.bbox().hit(ray, ray_t) {
            return None;
        }

        match self {
            BvhNode::Leaf { object, .. } => object.hit(ray, ray_t),

            // Both sides are queried over the full interval; ties go left
            BvhNode::Branch { left, right, .. } => {
                match (left.hit(ray, ray_t), right.hit(ray, ray_t)) {
                    (Some(l), Some(r)) => Some(if r.t < l.t { r } else { l }),
                    (l, r) => l.or(r),
                }
            }
        }
    }

    fn bounding_box(&self, _time: Interval) -> Option<Aabb> {
        Some(self.bbox())
    }
}
