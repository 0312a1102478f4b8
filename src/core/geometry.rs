use nalgebra::{Point3, Vector3};

/// Position, scale or Euler rotation (radians), depending on context.
pub type Vec3 = Vector3<f32>;

/// Axis-aligned bounding box in the model's local, untransformed space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Smallest corner. Each component is <= the matching component of `max`.
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl BoundingBox {
    /// Builds a box from two opposite corners given in any order.
    pub fn from_corners(a: Point3<f32>, b: Point3<f32>) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Extent along each axis (`max - min`).
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.min, &self.max)
    }

    pub fn max_dimension(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }

    /// True when the box has no usable extent: zero along every axis, or non-finite.
    pub fn is_degenerate(&self) -> bool {
        let max_dimension = self.max_dimension();
        !(max_dimension.is_finite() && max_dimension > 0.0)
    }

    /// The eight corners, `min` first and `max` last.
    pub fn corners(&self) -> [Point3<f32>; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
        ]
    }
}
