use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A bounded straight segment between two points.
///
/// Parameterized by arc length: `P(t) = start + t * unit_direction`,
/// `t ∈ [0, length]`. Every framing baseline and member face is one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    start: Point3,
    end: Point3,
}

impl LineSegment {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Returns the midpoint.
    #[must_use]
    pub fn midpoint(&self) -> Point3 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Returns the unit direction from start to end.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` for a zero-length segment.
    pub fn direction(&self) -> Result<Vector3> {
        let delta = self.end - self.start;
        let len = delta.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(delta / len)
    }

    /// Returns a copy moved by `displacement`.
    #[must_use]
    pub fn translated(&self, displacement: &Vector3) -> Self {
        Self {
            start: self.start + displacement,
            end: self.end + displacement,
        }
    }

    /// Returns the perpendicular distance from `point` to the infinite line
    /// through this segment. Falls back to the distance to `start` for a
    /// zero-length segment.
    #[must_use]
    pub fn distance_to_line(&self, point: &Point3) -> f64 {
        let to_point = point - self.start;
        match self.direction() {
            Ok(dir) => (to_point - dir * to_point.dot(&dir)).norm(),
            Err(_) => to_point.norm(),
        }
    }
}

impl Curve for LineSegment {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let domain = self.domain();
        if !domain.contains(t) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: domain.t_min,
                max: domain.t_max,
            }
            .into());
        }
        Ok(self.start + self.direction()? * t)
    }

    fn tangent(&self, _t: f64) -> Result<Vector3> {
        self.direction()
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.length())
    }

    fn is_closed(&self) -> bool {
        false
    }
}
