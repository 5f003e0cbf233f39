use crate::error::{ModelError, Result};
use crate::geometry::Aabb;

use super::wall::WallId;

slotmap::new_key_type! {
    /// Unique identifier for an opening in the model store.
    pub struct OpeningId;
}

/// The kind of opening cut into a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpeningKind {
    /// A door: framed with jacks and a header.
    Door,
    /// A window: framed with jacks, a header and a sill.
    Window,
}

/// Read-only snapshot of a door or window hosted on a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningDescriptor {
    bounding_box: Option<Aabb>,
    kind: OpeningKind,
    host_wall: Option<WallId>,
}

impl OpeningDescriptor {
    /// Creates an opening with a resolved bounding box.
    #[must_use]
    pub fn new(kind: OpeningKind, bounding_box: Aabb) -> Self {
        Self {
            bounding_box: Some(bounding_box),
            kind,
            host_wall: None,
        }
    }

    /// Creates an opening whose geometry the host could not resolve.
    #[must_use]
    pub fn unresolved(kind: OpeningKind) -> Self {
        Self {
            bounding_box: None,
            kind,
            host_wall: None,
        }
    }

    /// Shorthand for a door opening.
    #[must_use]
    pub fn door(bounding_box: Aabb) -> Self {
        Self::new(OpeningKind::Door, bounding_box)
    }

    /// Shorthand for a window opening.
    #[must_use]
    pub fn window(bounding_box: Aabb) -> Self {
        Self::new(OpeningKind::Window, bounding_box)
    }

    /// Returns a copy tagged as hosted on `wall`.
    #[must_use]
    pub fn hosted_on(mut self, wall: WallId) -> Self {
        self.host_wall = Some(wall);
        self
    }

    /// Returns the opening kind.
    #[must_use]
    pub fn kind(&self) -> OpeningKind {
        self.kind
    }

    /// Returns the host wall reference, if any.
    #[must_use]
    pub fn host_wall(&self) -> Option<WallId> {
        self.host_wall
    }

    /// Returns the raw bounding box as supplied by the host.
    #[must_use]
    pub fn bounding_box(&self) -> Option<&Aabb> {
        self.bounding_box.as_ref()
    }

    /// Returns the bounding box if it is usable for framing.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnresolvedOpeningGeometry` if the box is missing,
    /// non-finite, or has no vertical extent.
    pub fn resolved_box(&self) -> Result<&Aabb> {
        match &self.bounding_box {
            None => Err(ModelError::UnresolvedOpeningGeometry(format!(
                "{:?} has no bounding box",
                self.kind
            ))
            .into()),
            Some(bbox) if !bbox.has_vertical_extent() => {
                Err(ModelError::UnresolvedOpeningGeometry(format!(
                    "{:?} bounding box has no vertical extent: z = [{}, {}]",
                    self.kind, bbox.min.z, bbox.max.z
                ))
                .into())
            }
            Some(bbox) => Ok(bbox),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    #[test]
    fn resolved_box_round_trips() {
        let bbox = Aabb::from_corners(Point3::new(3.0, -0.5, 3.0), Point3::new(5.0, 0.5, 5.0));
        let window = OpeningDescriptor::window(bbox);
        assert_eq!(window.kind(), OpeningKind::Window);
        assert_eq!(*window.resolved_box().unwrap(), bbox);
        assert!(window.host_wall().is_none());
    }

    #[test]
    fn missing_box_is_unresolved() {
        let door = OpeningDescriptor::unresolved(OpeningKind::Door);
        assert!(door.bounding_box().is_none());
        assert!(door.resolved_box().is_err());
    }

    #[test]
    fn flat_box_is_unresolved() {
        let bbox = Aabb::from_corners(Point3::new(3.0, 0.0, 4.0), Point3::new(5.0, 0.0, 4.0));
        assert!(OpeningDescriptor::door(bbox).resolved_box().is_err());
    }
}
