use crate::geometry::LineSegment;
use crate::math::Vector3;

/// Duplicates a baseline into the two faces of one framing member.
///
/// The baseline is translated by `+offset` and by `-offset`. Callers pass an
/// offset of half the nominal member thickness, pointing in the direction
/// the member's faces should separate.
#[derive(Debug, Clone)]
pub struct PairedOffset {
    baseline: LineSegment,
    offset: Vector3,
}

impl PairedOffset {
    /// Creates a new paired offset operation.
    #[must_use]
    pub fn new(baseline: LineSegment, offset: Vector3) -> Self {
        Self { baseline, offset }
    }

    /// Executes the offset, returning `(baseline + offset, baseline - offset)`.
    #[must_use]
    pub fn execute(&self) -> (LineSegment, LineSegment) {
        (
            self.baseline.translated(&self.offset),
            self.baseline.translated(&-self.offset),
        )
    }
}
