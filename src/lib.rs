pub mod error;
pub mod geometry;
pub mod math;
pub mod member;
pub mod model;
pub mod operations;
pub mod sink;

pub use error::{Result, WallframeError};
pub use member::{FramingMember, FramingReport, MemberKind, WallFraming};
pub use model::{ModelStore, OpeningDescriptor, OpeningId, OpeningKind, WallDescriptor, WallId};
pub use operations::framing::{FrameWall, FramingConfig};
pub use sink::{emit_all, EmitOutcome, MemberSink, VecSink};
