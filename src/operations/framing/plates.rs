use crate::geometry::LineSegment;
use crate::math::Vector3;
use crate::model::WallDescriptor;

/// Builds the bottom and top plate baselines of a wall.
///
/// Both are the centerline moved half the wall width along the normal; the
/// top plate is additionally raised by the wall height. Plates are never cut
/// by openings.
#[derive(Debug, Clone)]
pub struct PlateBuilder<'a> {
    wall: &'a WallDescriptor,
}

impl<'a> PlateBuilder<'a> {
    /// Creates a new plate builder for `wall`.
    #[must_use]
    pub fn new(wall: &'a WallDescriptor) -> Self {
        Self { wall }
    }

    /// Executes the builder, returning `[bottom, top]`.
    #[must_use]
    pub fn execute(&self) -> [LineSegment; 2] {
        let face = self.wall.normal() * (self.wall.width() * 0.5);
        let bottom = self.wall.centerline().translated(&face);
        let top = bottom.translated(&(Vector3::z() * self.wall.height()));
        [bottom, top]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    #[test]
    fn plates_sit_on_the_cavity_face() {
        let wall = WallDescriptor::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            1.0,
            8.0,
            1.5,
        )
        .unwrap();
        let [bottom, top] = PlateBuilder::new(&wall).execute();

        assert_relative_eq!(*bottom.start(), Point3::new(0.0, -0.5, 1.5));
        assert_relative_eq!(*bottom.end(), Point3::new(10.0, -0.5, 1.5));
        assert_relative_eq!(*top.start(), Point3::new(0.0, -0.5, 9.5));
        assert_relative_eq!(*top.end(), Point3::new(10.0, -0.5, 9.5));
        assert_relative_eq!(top.length(), wall.length());
    }
}
