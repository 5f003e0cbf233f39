use crate::error::{ModelError, Result};
use crate::geometry::{Aabb, LineSegment};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::member::{FramingMember, MemberKind};
use crate::model::{OpeningKind, WallDescriptor};

/// The four corners of an opening on the framing face, displaced half the
/// wall width along the wall normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningCorners {
    pub bottom_left: Point3,
    pub top_left: Point3,
    pub top_right: Point3,
    pub bottom_right: Point3,
}

/// Frames one opening with jacks, a header and, for windows, a sill.
#[derive(Debug, Clone)]
pub struct OpeningFramer<'a> {
    wall: &'a WallDescriptor,
    bbox: &'a Aabb,
    kind: OpeningKind,
    half_offset: f64,
}

impl<'a> OpeningFramer<'a> {
    /// Creates a new framer for an opening of `kind` occupying `bbox`.
    #[must_use]
    pub fn new(wall: &'a WallDescriptor, bbox: &'a Aabb, kind: OpeningKind, half_offset: f64) -> Self {
        Self {
            wall,
            bbox,
            kind,
            half_offset,
        }
    }

    /// Computes the opening corners.
    ///
    /// The horizontal span runs along the wall's dominant plan axis: the box
    /// X extent at `min.y` for walls running mostly along X, the Y extent at
    /// `min.x` otherwise.
    #[must_use]
    pub fn corners(&self) -> OpeningCorners {
        let (min, max) = (&self.bbox.min, &self.bbox.max);
        let dir = self.wall.direction();
        let (left, right) = if dir.x.abs() >= dir.y.abs() {
            ((min.x, min.y), (max.x, min.y))
        } else {
            ((min.x, min.y), (min.x, max.y))
        };

        let face = self.wall.normal() * (self.wall.width() * 0.5);
        OpeningCorners {
            bottom_left: Point3::new(left.0, left.1, min.z) + face,
            top_left: Point3::new(left.0, left.1, max.z) + face,
            top_right: Point3::new(right.0, right.1, max.z) + face,
            bottom_right: Point3::new(right.0, right.1, min.z) + face,
        }
    }

    /// Executes the framer. Members come out as left jack, right jack,
    /// header, then sill (windows only).
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnresolvedOpeningGeometry` if the opening has no
    /// horizontal extent along the wall.
    pub fn execute(&self) -> Result<Vec<FramingMember>> {
        let c = self.corners();
        let span = c.top_right - c.top_left;
        let width = span.norm();
        if width < TOLERANCE {
            return Err(ModelError::UnresolvedOpeningGeometry(format!(
                "{:?} has no horizontal extent along the wall",
                self.kind
            ))
            .into());
        }
        let horizontal = span / width;

        let jack_offset = horizontal * self.half_offset;
        let flat_offset = Vector3::z() * self.half_offset;

        let mut members = vec![
            FramingMember::paired(
                MemberKind::Jack,
                &LineSegment::new(c.bottom_left, c.top_left),
                jack_offset,
            ),
            FramingMember::paired(
                MemberKind::Jack,
                &LineSegment::new(c.bottom_right, c.top_right),
                jack_offset,
            ),
            FramingMember::paired(
                MemberKind::Header,
                &LineSegment::new(c.top_left, c.top_right),
                flat_offset,
            ),
        ];

        match self.kind {
            OpeningKind::Window => members.push(FramingMember::paired(
                MemberKind::Sill,
                &LineSegment::new(c.bottom_left, c.bottom_right),
                flat_offset,
            )),
            OpeningKind::Door => {}
        }

        Ok(members)
    }
}
