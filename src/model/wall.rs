use crate::error::{ModelError, Result};
use crate::geometry::curve::{Curve, LineSegment};
use crate::math::{Point3, Vector3, TOLERANCE};

slotmap::new_key_type! {
    /// Unique identifier for a wall in the model store.
    pub struct WallId;
}

/// Immutable snapshot of the wall facts the framing engine needs.
///
/// The centerline is projected onto the horizontal plane at the base
/// elevation, so every point interpolated along it sits at the wall base.
#[derive(Debug, Clone, PartialEq)]
pub struct WallDescriptor {
    centerline: LineSegment,
    length: f64,
    width: f64,
    height: f64,
    base_elevation: f64,
    direction: Vector3,
    normal: Vector3,
}

impl WallDescriptor {
    /// Creates a wall from its centerline endpoints, thickness, height and
    /// base elevation.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidWall` if any input is non-finite, if
    /// `width` or `height` is not positive, or if the centerline has no
    /// horizontal length.
    pub fn new(
        start: Point3,
        end: Point3,
        width: f64,
        height: f64,
        base_elevation: f64,
    ) -> Result<Self> {
        let all_finite = start
            .coords
            .iter()
            .chain(end.coords.iter())
            .chain([width, height, base_elevation].iter())
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(ModelError::InvalidWall("non-finite wall input".to_owned()).into());
        }
        if width <= 0.0 {
            return Err(ModelError::InvalidWall(format!("width must be positive, got {width}")).into());
        }
        if height <= 0.0 {
            return Err(
                ModelError::InvalidWall(format!("height must be positive, got {height}")).into(),
            );
        }

        let start = Point3::new(start.x, start.y, base_elevation);
        let end = Point3::new(end.x, end.y, base_elevation);
        let delta = end - start;
        let length = delta.norm();
        if length < TOLERANCE {
            return Err(ModelError::InvalidWall("centerline has zero length".to_owned()).into());
        }

        let direction = delta / length;
        let normal = direction.cross(&Vector3::z()).normalize();

        Ok(Self {
            centerline: LineSegment::new(start, end),
            length,
            width,
            height,
            base_elevation,
            direction,
            normal,
        })
    }

    /// Returns the centerline at base elevation.
    #[must_use]
    pub fn centerline(&self) -> &LineSegment {
        &self.centerline
    }

    /// Returns the horizontal centerline length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the wall thickness.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the wall height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the elevation of the wall base.
    #[must_use]
    pub fn base_elevation(&self) -> f64 {
        self.base_elevation
    }

    /// Returns the elevation of the wall top.
    #[must_use]
    pub fn top_elevation(&self) -> f64 {
        self.base_elevation + self.height
    }

    /// Returns the unit vector along the centerline.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Returns the horizontal unit normal, `direction × Z`.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the base-elevation point at distance `d` along the centerline.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `d` is outside
    /// `[0, length]`.
    pub fn point_at(&self, d: f64) -> Result<Point3> {
        self.centerline.evaluate(d)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn x_wall_frame() {
        let wall = WallDescriptor::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            1.0,
            8.0,
            0.0,
        )
        .unwrap();
        assert_relative_eq!(wall.length(), 10.0);
        assert_relative_eq!(*wall.direction(), Vector3::x());
        assert_relative_eq!(*wall.normal(), -Vector3::y());
        assert_relative_eq!(wall.top_elevation(), 8.0);
    }

    #[test]
    fn centerline_is_flattened_to_base_elevation() {
        let wall = WallDescriptor::new(
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(3.0, 4.0, 9.0),
            0.5,
            3.0,
            2.0,
        )
        .unwrap();
        assert_relative_eq!(wall.length(), 5.0);
        assert_relative_eq!(wall.centerline().start().z, 2.0);
        assert_relative_eq!(wall.centerline().end().z, 2.0);
        assert_relative_eq!(wall.direction().dot(wall.normal()), 0.0, epsilon = 1e-12);
        assert_relative_eq!(wall.normal().z, 0.0);
        assert_relative_eq!(wall.point_at(2.5).unwrap(), Point3::new(1.5, 2.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn rejects_degenerate_walls() {
        let o = Point3::origin();
        let x = Point3::new(4.0, 0.0, 0.0);
        assert!(WallDescriptor::new(o, x, 0.0, 8.0, 0.0).is_err());
        assert!(WallDescriptor::new(o, x, 1.0, -1.0, 0.0).is_err());
        assert!(WallDescriptor::new(o, Point3::new(0.0, 0.0, 3.0), 1.0, 8.0, 0.0).is_err());
        assert!(WallDescriptor::new(o, x, 1.0, 8.0, f64::NAN).is_err());
    }
}
