mod config;
mod opening_framer;
mod plates;
mod stud_layout;

pub use config::FramingConfig;
pub use opening_framer::{OpeningCorners, OpeningFramer};
pub use plates::PlateBuilder;
pub use stud_layout::{StudLayout, StudPlan};

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::geometry::{Aabb, LineSegment};
use crate::math::interval::{cut, merge};
use crate::math::{Point3, Vector3};
use crate::member::{FramingMember, MemberKind, SkippedOpening, WallFraming};
use crate::model::{OpeningDescriptor, WallDescriptor};
use crate::operations::query::ObstructionQuery;

/// Generates the complete stud framing for one wall.
///
/// Given a wall and the openings it hosts, produces paired members in a
/// fixed order: field studs, corner studs, bottom and top plates, then the
/// framing of each opening in input order. Studs crossing an opening are
/// split around it.
#[derive(Debug)]
pub struct FrameWall<'a> {
    wall: &'a WallDescriptor,
    openings: &'a [OpeningDescriptor],
    config: &'a FramingConfig,
}

/// Openings sorted into obstruction boxes, prepared framing and skips.
#[derive(Default)]
struct ResolvedOpenings {
    boxes: Vec<Aabb>,
    members: Vec<FramingMember>,
    skipped: Vec<SkippedOpening>,
}

impl<'a> FrameWall<'a> {
    /// Creates a new framing operation.
    #[must_use]
    pub fn new(
        wall: &'a WallDescriptor,
        openings: &'a [OpeningDescriptor],
        config: &'a FramingConfig,
    ) -> Self {
        Self {
            wall,
            openings,
            config,
        }
    }

    /// Executes the framing.
    ///
    /// Openings with unusable geometry are skipped, both as obstructions and
    /// for opening framing, and listed in [`WallFraming::skipped`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if the configuration is
    /// invalid. No members are produced in that case.
    pub fn execute(&self) -> Result<WallFraming> {
        self.config.validate()?;
        debug!(
            length = self.wall.length(),
            height = self.wall.height(),
            openings = self.openings.len(),
            "framing wall"
        );

        let ResolvedOpenings {
            boxes,
            members: opening_members,
            skipped,
        } = self.resolve_openings();
        let boxes: Vec<&Aabb> = boxes.iter().collect();

        let plan = StudLayout::new(self.wall, self.config.stud_spacing, self.config.end_epsilon)
            .execute()?;
        let half = self.config.half_offset();
        let stud_offset = self.wall.direction() * half;
        let flat_offset = Vector3::z() * half;

        let mut members = Vec::new();
        for position in &plan.field {
            self.push_stud(&mut members, MemberKind::VerticalStud, position, &boxes, stud_offset);
        }
        for position in &plan.corners {
            self.push_stud(&mut members, MemberKind::CornerStud, position, &boxes, stud_offset);
        }

        for plate in &PlateBuilder::new(self.wall).execute() {
            members.push(FramingMember::paired(MemberKind::Plate, plate, flat_offset));
        }

        members.extend(opening_members);

        debug!(
            members = members.len(),
            skipped = skipped.len(),
            "wall framing complete"
        );
        Ok(WallFraming::new(members, skipped))
    }

    /// Resolves openings in input order.
    ///
    /// An opening without a usable bounding box is skipped entirely. One
    /// whose box is usable but cannot be framed still obstructs studs; only
    /// its jacks, header and sill are skipped.
    fn resolve_openings(&self) -> ResolvedOpenings {
        let half = self.config.half_offset();
        let mut resolved = ResolvedOpenings::default();

        for (index, opening) in self.openings.iter().enumerate() {
            let framed = opening.resolved_box().and_then(|bbox| {
                resolved.boxes.push(*bbox);
                OpeningFramer::new(self.wall, bbox, opening.kind(), half).execute()
            });
            match framed {
                Ok(members) => {
                    debug!(index, kind = ?opening.kind(), members = members.len(), "opening framed");
                    resolved.members.extend(members);
                }
                Err(err) => {
                    warn!(index, kind = ?opening.kind(), %err, "skipping opening");
                    resolved.skipped.push(SkippedOpening {
                        index,
                        kind: opening.kind(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        resolved
    }

    /// Emits the stud at `position`, cut around every opening crossing it.
    fn push_stud(
        &self,
        members: &mut Vec<FramingMember>,
        kind: MemberKind,
        position: &Point3,
        boxes: &[&Aabb],
        offset: Vector3,
    ) {
        let obstructions = ObstructionQuery::new(*position, self.config.opening_proximity_tolerance)
            .execute(boxes.iter().copied());
        let merged = merge(&obstructions);
        let segments = cut(
            self.wall.base_elevation(),
            self.wall.top_elevation(),
            &merged,
            self.config.min_segment_length,
        );
        trace!(
            x = position.x,
            y = position.y,
            obstructions = merged.len(),
            segments = segments.len(),
            "stud cut"
        );

        for (z0, z1) in segments {
            let baseline = LineSegment::new(
                Point3::new(position.x, position.y, z0),
                Point3::new(position.x, position.y, z1),
            );
            members.push(FramingMember::paired(kind, &baseline, offset));
        }
    }
}
