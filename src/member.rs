use std::fmt;

use crate::geometry::LineSegment;
use crate::math::Vector3;
use crate::model::OpeningKind;
use crate::operations::offset::PairedOffset;

/// The role a framing member plays in the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberKind {
    /// Regularly spaced vertical field stud.
    VerticalStud,
    /// Vertical stud at a wall endpoint.
    CornerStud,
    /// Horizontal plate at the wall base or top.
    Plate,
    /// Vertical member beside an opening.
    Jack,
    /// Horizontal member above an opening.
    Header,
    /// Horizontal member below a window.
    Sill,
}

impl MemberKind {
    /// Every kind, in output order.
    pub const ALL: [MemberKind; 6] = [
        MemberKind::VerticalStud,
        MemberKind::CornerStud,
        MemberKind::Plate,
        MemberKind::Jack,
        MemberKind::Header,
        MemberKind::Sill,
    ];

    /// Returns a human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MemberKind::VerticalStud => "vertical stud",
            MemberKind::CornerStud => "corner stud",
            MemberKind::Plate => "plate",
            MemberKind::Jack => "jack",
            MemberKind::Header => "header",
            MemberKind::Sill => "sill",
        }
    }
}

/// One nominal framing member, represented by the two parallel faces of the
/// piece of lumber.
///
/// The faces are congruent and sit symmetrically on either side of the
/// baseline the member was generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct FramingMember {
    kind: MemberKind,
    primary: LineSegment,
    secondary: LineSegment,
}

impl FramingMember {
    /// Builds a member by offsetting `baseline` by `+offset` and `-offset`.
    #[must_use]
    pub fn paired(kind: MemberKind, baseline: &LineSegment, offset: Vector3) -> Self {
        let (primary, secondary) = PairedOffset::new(*baseline, offset).execute();
        Self {
            kind,
            primary,
            secondary,
        }
    }

    /// Returns the member kind.
    #[must_use]
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Returns the face offset in the positive direction.
    #[must_use]
    pub fn primary(&self) -> &LineSegment {
        &self.primary
    }

    /// Returns the face offset in the negative direction.
    #[must_use]
    pub fn secondary(&self) -> &LineSegment {
        &self.secondary
    }

    /// Recovers the un-offset baseline midway between the two faces.
    #[must_use]
    pub fn baseline(&self) -> LineSegment {
        LineSegment::new(
            nalgebra::center(self.primary.start(), self.secondary.start()),
            nalgebra::center(self.primary.end(), self.secondary.end()),
        )
    }

    /// Returns the distance between the two faces.
    #[must_use]
    pub fn separation(&self) -> f64 {
        (self.primary.start() - self.secondary.start()).norm()
    }
}

/// An opening that was left out of a framing run.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedOpening {
    /// Position of the opening in the input slice.
    pub index: usize,
    /// Kind of the skipped opening.
    pub kind: OpeningKind,
    /// Why it was skipped.
    pub reason: String,
}

/// Result of framing one wall.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallFraming {
    members: Vec<FramingMember>,
    skipped: Vec<SkippedOpening>,
}

impl WallFraming {
    pub(crate) fn new(members: Vec<FramingMember>, skipped: Vec<SkippedOpening>) -> Self {
        Self { members, skipped }
    }

    /// Returns the members in output order.
    #[must_use]
    pub fn members(&self) -> &[FramingMember] {
        &self.members
    }

    /// Consumes the result, returning the members.
    #[must_use]
    pub fn into_members(self) -> Vec<FramingMember> {
        self.members
    }

    /// Returns the openings that could not be framed.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedOpening] {
        &self.skipped
    }

    /// Returns the number of members of `kind`.
    #[must_use]
    pub fn count(&self, kind: MemberKind) -> usize {
        self.members.iter().filter(|m| m.kind() == kind).count()
    }

    /// Returns the number of emitted curves (two per member).
    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.members.len() * 2
    }

    /// Summarizes the run for a host-side report.
    #[must_use]
    pub fn report(&self) -> FramingReport {
        FramingReport {
            counts: MemberKind::ALL.map(|kind| (kind, self.count(kind))),
            skipped_openings: self.skipped.len(),
        }
    }
}

/// Member counts for one framing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramingReport {
    counts: [(MemberKind, usize); 6],
    skipped_openings: usize,
}

impl FramingReport {
    /// Returns the count for `kind`.
    #[must_use]
    pub fn count(&self, kind: MemberKind) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, n)| *n)
    }

    /// Returns the total number of members.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Returns the number of openings that were skipped.
    #[must_use]
    pub fn skipped_openings(&self) -> usize {
        self.skipped_openings
    }
}

impl fmt::Display for FramingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} members", self.total())?;
        let mut first = true;
        for (kind, n) in self.counts.iter().filter(|(_, n)| *n > 0) {
            f.write_str(if first { ": " } else { ", " })?;
            write!(f, "{n} {}", kind.label())?;
            first = false;
        }
        if self.skipped_openings > 0 {
            write!(f, " ({} openings skipped)", self.skipped_openings)?;
        }
        Ok(())
    }
}
