use crate::math::{Point3, Vector3};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a box spanning two opposite corners given in any order.
    #[must_use]
    pub fn from_corners(a: Point3, b: Point3) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Returns the box extents along each axis.
    #[must_use]
    pub fn extent(&self) -> Vector3 {
        self.max - self.min
    }

    /// Returns the box center.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Radius of the horizontal footprint approximated as a circle: half the
    /// larger of the X and Y extents.
    #[must_use]
    pub fn plan_radius(&self) -> f64 {
        let extent = self.extent();
        0.5 * extent.x.abs().max(extent.y.abs())
    }

    /// Returns whether every coordinate is finite and the box has positive
    /// height.
    #[must_use]
    pub fn has_vertical_extent(&self) -> bool {
        let finite = self.min.coords.iter().chain(self.max.coords.iter()).all(|c| c.is_finite());
        finite && self.max.z > self.min.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corners_normalizes() {
        let b = Aabb::from_corners(Point3::new(5.0, 1.0, 7.0), Point3::new(3.0, 2.0, 3.0));
        assert_eq!(b.min, Point3::new(3.0, 1.0, 3.0));
        assert_eq!(b.max, Point3::new(5.0, 2.0, 7.0));
        assert_eq!(b.center(), Point3::new(4.0, 1.5, 5.0));
    }

    #[test]
    fn plan_radius_uses_larger_horizontal_extent() {
        let b = Aabb::from_corners(Point3::new(3.0, -0.5, 0.0), Point3::new(5.0, 0.5, 7.0));
        assert!((b.plan_radius() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn flat_or_non_finite_box_has_no_vertical_extent() {
        let flat = Aabb::from_corners(Point3::new(0.0, 0.0, 2.0), Point3::new(1.0, 1.0, 2.0));
        assert!(!flat.has_vertical_extent());
        let nan = Aabb {
            min: Point3::new(f64::NAN, 0.0, 0.0),
            max: Point3::new(1.0, 1.0, 1.0),
        };
        assert!(!nan.has_vertical_extent());
    }
}
