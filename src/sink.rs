use tracing::warn;

use crate::error::{Result, WallframeError};
use crate::member::{FramingMember, MemberKind};

/// Receives framing members for persistence.
///
/// Implementations decide what "persist" means (drawable elements, a file,
/// a buffer). Transactional grouping is the implementation's concern.
pub trait MemberSink {
    /// Persists one member.
    ///
    /// # Errors
    ///
    /// Returns an error (typically `SinkError::Rejected`) if the member
    /// could not be persisted.
    fn emit(&mut self, member: FramingMember) -> Result<()>;
}

/// A sink that collects members in memory.
#[derive(Debug, Default)]
pub struct VecSink {
    members: Vec<FramingMember>,
}

impl VecSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected members.
    #[must_use]
    pub fn members(&self) -> &[FramingMember] {
        &self.members
    }

    /// Consumes the sink, returning the collected members.
    #[must_use]
    pub fn into_members(self) -> Vec<FramingMember> {
        self.members
    }
}

impl MemberSink for VecSink {
    fn emit(&mut self, member: FramingMember) -> Result<()> {
        self.members.push(member);
        Ok(())
    }
}

/// A member the sink refused.
#[derive(Debug)]
pub struct MemberFailure {
    /// Position of the member in the emitted sequence.
    pub index: usize,
    /// Kind of the rejected member.
    pub kind: MemberKind,
    /// The sink's error.
    pub error: WallframeError,
}

/// Outcome of pushing a sequence of members through a sink.
#[derive(Debug, Default)]
pub struct EmitOutcome {
    /// Number of members the sink accepted.
    pub emitted: usize,
    /// Members the sink rejected, in order.
    pub failures: Vec<MemberFailure>,
}

impl EmitOutcome {
    /// Returns whether every member was accepted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Emits every member in order.
///
/// A rejected member is recorded and emission continues with the next one;
/// nothing is retried and earlier members are not withdrawn.
#[must_use]
pub fn emit_all<S, I>(members: I, sink: &mut S) -> EmitOutcome
where
    S: MemberSink + ?Sized,
    I: IntoIterator<Item = FramingMember>,
{
    let mut outcome = EmitOutcome::default();
    for (index, member) in members.into_iter().enumerate() {
        let kind = member.kind();
        match sink.emit(member) {
            Ok(()) => outcome.emitted += 1,
            Err(error) => {
                warn!(index, ?kind, %error, "sink rejected member");
                outcome.failures.push(MemberFailure { index, kind, error });
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SinkError;
    use crate::geometry::LineSegment;
    use crate::math::{Point3, Vector3};

    /// Rejects every member of one kind.
    struct PickySink {
        refuse: MemberKind,
        accepted: Vec<FramingMember>,
    }

    impl MemberSink for PickySink {
        fn emit(&mut self, member: FramingMember) -> Result<()> {
            if member.kind() == self.refuse {
                return Err(SinkError::Rejected(format!("{} not allowed", member.kind().label())).into());
            }
            self.accepted.push(member);
            Ok(())
        }
    }

    fn members() -> Vec<FramingMember> {
        let base = LineSegment::new(Point3::origin(), Point3::new(0.0, 0.0, 8.0));
        let offset = Vector3::new(0.1, 0.0, 0.0);
        vec![
            FramingMember::paired(MemberKind::VerticalStud, &base, offset),
            FramingMember::paired(MemberKind::Plate, &base, offset),
            FramingMember::paired(MemberKind::CornerStud, &base, offset),
        ]
    }

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink = VecSink::new();
        let outcome = emit_all(members(), &mut sink);
        assert!(outcome.is_complete());
        assert_eq!(outcome.emitted, 3);
        assert_eq!(sink.members()[2].kind(), MemberKind::CornerStud);
        assert_eq!(sink.into_members().len(), 3);
    }

    #[test]
    fn rejection_is_reported_and_emission_continues() {
        let mut sink = PickySink {
            refuse: MemberKind::Plate,
            accepted: Vec::new(),
        };
        let outcome = emit_all(members(), &mut sink);

        assert!(!outcome.is_complete());
        assert_eq!(outcome.emitted, 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].index, 1);
        assert_eq!(outcome.failures[0].kind, MemberKind::Plate);
        assert!(matches!(
            outcome.failures[0].error,
            WallframeError::Sink(SinkError::Rejected(_))
        ));
        assert_eq!(sink.accepted.len(), 2);
    }
}
