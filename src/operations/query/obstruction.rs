use crate::geometry::Aabb;
use crate::math::distance_2d::planar_distance;
use crate::math::{Interval, Point3};

/// Returns whether an opening's footprint reaches the vertical column
/// through `position`.
///
/// The footprint is approximated by a circle around the box center whose
/// radius is half the larger horizontal extent, widened by `tolerance`.
/// Rotated openings are therefore over-reported, never missed.
#[must_use]
pub fn intersects_column(bbox: &Aabb, position: &Point3, tolerance: f64) -> bool {
    planar_distance(position, &bbox.center()) < bbox.plan_radius() + tolerance
}

/// Projects openings onto the vertical axis of one stud position.
#[derive(Debug, Clone)]
pub struct ObstructionQuery {
    position: Point3,
    tolerance: f64,
}

impl ObstructionQuery {
    /// Creates a query for the stud column through `position`.
    #[must_use]
    pub fn new(position: Point3, tolerance: f64) -> Self {
        Self {
            position,
            tolerance,
        }
    }

    /// Returns the vertical extent of every opening that intersects the
    /// column, in input order (unmerged).
    #[must_use]
    pub fn execute<'a, I>(&self, openings: I) -> Vec<Interval>
    where
        I: IntoIterator<Item = &'a Aabb>,
    {
        openings
            .into_iter()
            .filter(|bbox| intersects_column(bbox, &self.position, self.tolerance))
            .map(|bbox| Interval::new(bbox.min.z, bbox.max.z))
            .collect()
    }
}
