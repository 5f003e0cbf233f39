use crate::error::Result;
use crate::math::Point3;
use crate::model::WallDescriptor;

/// Horizontal stud positions for one wall, all at base elevation.
#[derive(Debug, Clone, PartialEq)]
pub struct StudPlan {
    /// Field stud positions, ascending along the centerline.
    pub field: Vec<Point3>,
    /// Corner stud positions at the centerline start and end.
    pub corners: [Point3; 2],
}

/// Plans field and corner stud positions along a wall.
#[derive(Debug, Clone)]
pub struct StudLayout<'a> {
    wall: &'a WallDescriptor,
    spacing: f64,
    end_epsilon: f64,
}

impl<'a> StudLayout<'a> {
    /// Creates a new stud layout for `wall`.
    #[must_use]
    pub fn new(wall: &'a WallDescriptor, spacing: f64, end_epsilon: f64) -> Self {
        Self {
            wall,
            spacing,
            end_epsilon,
        }
    }

    /// Returns the distances along the centerline at which field studs go.
    ///
    /// Studs sit at every multiple of the spacing up to the wall length,
    /// except one falling within `end_epsilon` of the wall end, where the
    /// corner stud already stands.
    #[must_use]
    pub fn field_distances(&self) -> Vec<f64> {
        let length = self.wall.length();
        let count = (length / self.spacing).floor();
        let mut distances = Vec::new();
        let mut i = 1.0;
        while i <= count {
            let d = i * self.spacing;
            if (d - length).abs() >= self.end_epsilon {
                distances.push(d);
            }
            i += 1.0;
        }
        distances
    }

    /// Executes the layout.
    ///
    /// Corner studs are placed at both endpoints regardless of spacing; a
    /// field stud close to (but not within `end_epsilon` of) the end is
    /// kept alongside the corner.
    ///
    /// # Errors
    ///
    /// Returns an error if a stud distance falls outside the centerline.
    pub fn execute(&self) -> Result<StudPlan> {
        let field = self
            .field_distances()
            .into_iter()
            .map(|d| self.wall.point_at(d))
            .collect::<Result<Vec<_>>>()?;
        let centerline = self.wall.centerline();
        Ok(StudPlan {
            field,
            corners: [*centerline.start(), *centerline.end()],
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn wall(length: f64) -> WallDescriptor {
        WallDescriptor::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(length, 0.0, 0.0),
            1.0,
            8.0,
            0.0,
        )
        .unwrap()
    }

    #[test]
    fn ten_unit_wall_skips_end_stud() {
        let w = wall(10.0);
        let layout = StudLayout::new(&w, 2.0, 0.01);
        assert_eq!(layout.field_distances(), vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn near_end_stud_is_kept_next_to_corner() {
        let w = wall(10.05);
        let plan = StudLayout::new(&w, 2.0, 0.01).execute().unwrap();
        assert_eq!(plan.field.len(), 5);
        assert_relative_eq!(plan.field[4].x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(plan.corners[1].x, 10.05, epsilon = 1e-12);
    }

    #[test]
    fn short_wall_has_only_corners() {
        let w = wall(1.5);
        let plan = StudLayout::new(&w, 2.0, 0.01).execute().unwrap();
        assert!(plan.field.is_empty());
        assert_relative_eq!(plan.corners[0], Point3::origin());
        assert_relative_eq!(plan.corners[1], Point3::new(1.5, 0.0, 0.0));
    }

    #[test]
    fn positions_follow_a_diagonal_wall_at_base_elevation() {
        let w = WallDescriptor::new(
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(7.0, 9.0, 0.0),
            0.5,
            3.0,
            4.0,
        )
        .unwrap();
        let plan = StudLayout::new(&w, 2.5, 0.01).execute().unwrap();
        // Length 10: studs at 2.5, 5.0, 7.5; 10.0 coincides with the end.
        assert_eq!(plan.field.len(), 3);
        assert_relative_eq!(plan.field[1], Point3::new(4.0, 5.0, 4.0), epsilon = 1e-12);
        assert_relative_eq!(plan.corners[1], Point3::new(7.0, 9.0, 4.0), epsilon = 1e-12);
    }
}
