use crate::{Interval, Ray, Vec3};

/// One of the three coordinate axes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index of this axis (0=X, 1=Y, 2=Z).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The component of `v` along this axis.
    #[inline]
    pub fn of(self, v: Vec3) -> f32 {
        v[self.index()]
    }
}

/// Axis-Aligned Bounding Box for spatial acceleration structures (BVH).
///
/// Defined by its minimum and maximum corners, with `min[i] <= max[i]`
/// on every axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from its minimum and maximum corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(
            min.cmple(max).all(),
            "Aabb corners out of order: min={min:?} max={max:?}"
        );
        Self { min, max }
    }

    /// Create an AABB from two arbitrary corner points.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create an AABB that exactly surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            min: box0.min.min(box1.min),
            max: box0.max.max(box1.max),
        }
    }

    /// Get the extent of the box along one axis.
    pub fn axis_interval(&self, axis: Axis) -> Interval {
        Interval::new(axis.of(self.min), axis.of(self.max))
    }

    /// Returns true if `p` lies inside or on the boundary of the box.
    pub fn contains(&self, p: Vec3) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| self.axis_interval(axis).contains(axis.of(p)))
    }

    /// Test if a ray intersects this AABB within the given interval.
    ///
    /// Uses the slab method. A zero direction component divides to an
    /// infinity, which the interval comparisons resolve correctly.
    pub fn hit(&self, r: &Ray, mut ray_t: Interval) -> bool {
        let ray_orig = r.origin();
        let ray_dir = r.direction();

        for axis in Axis::ALL {
            let slab = self.axis_interval(axis);
            let adinv = 1.0 / axis.of(ray_dir);

            let mut t0 = (slab.min - axis.of(ray_orig)) * adinv;
            let mut t1 = (slab.max - axis.of(ray_orig)) * adinv;
            if adinv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            ray_t.min = t0.max(ray_t.min);
            ray_t.max = t1.min(ray_t.max);
            if ray_t.is_empty() {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_points() {
        let aabb = Aabb::from_points(Vec3::new(10.0, 0.0, 5.0), Vec3::new(0.0, 10.0, -5.0));

        assert_eq!(aabb.min, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(aabb.max, Vec3::new(10.0, 10.0, 5.0));
    }

    #[test]
    fn test_aabb_surrounding() {
        let box1 = Aabb::new(Vec3::ZERO, Vec3::new(5.0, 5.0, 5.0));
        let box2 = Aabb::new(Vec3::new(3.0, -2.0, 3.0), Vec3::new(10.0, 4.0, 10.0));
        let surrounding = Aabb::surrounding(&box1, &box2);

        assert_eq!(surrounding.min, Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(surrounding.max, Vec3::new(10.0, 5.0, 10.0));
    }

    #[test]
    fn test_aabb_surrounding_contains_both_and_is_minimal() {
        let box1 = Aabb::new(Vec3::new(-1.0, 2.0, 0.0), Vec3::new(1.0, 3.0, 4.0));
        let box2 = Aabb::new(Vec3::new(0.5, -6.0, 1.0), Vec3::new(7.0, 2.5, 2.0));
        let union = Aabb::surrounding(&box1, &box2);

        for b in [box1, box2] {
            assert!(union.contains(b.min));
            assert!(union.contains(b.max));
        }

        // Every face of the union touches one of the inputs
        for axis in Axis::ALL {
            let lo = axis.of(union.min);
            let hi = axis.of(union.max);
            assert!(lo == axis.of(box1.min) || lo == axis.of(box2.min));
            assert!(hi == axis.of(box1.max) || hi == axis.of(box2.max));
        }
    }

    #[test]
    fn test_aabb_hit() {
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

        // Ray pointing at center
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(aabb.hit(&ray, Interval::new(0.0, 100.0)));

        // Ray pointing away
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(!aabb.hit(&ray, Interval::new(0.0, 100.0)));

        // Ray missing the box
        let ray = Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(!aabb.hit(&ray, Interval::new(0.0, 100.0)));
    }

    #[test]
    fn test_aabb_hit_respects_interval() {
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));

        // Box spans t in [4, 6]
        assert!(!aabb.hit(&ray, Interval::new(0.0, 3.5)));
        assert!(!aabb.hit(&ray, Interval::new(6.5, 100.0)));
        assert!(aabb.hit(&ray, Interval::new(5.0, 5.5)));
    }

    #[test]
    fn test_aabb_hit_negative_direction() {
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Vec3::new(5.0, 5.0, 5.0), Vec3::new(-1.0, -1.0, -1.0));
        assert!(aabb.hit(&ray, Interval::new(0.001, f32::INFINITY)));
    }

    #[test]
    fn test_axis_components() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::X.of(v), 1.0);
        assert_eq!(Axis::Y.of(v), 2.0);
        assert_eq!(Axis::Z.of(v), 3.0);
    }
}
