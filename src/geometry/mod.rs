pub mod bbox;
pub mod curve;

pub use bbox::Aabb;
pub use curve::{Curve, CurveDomain, LineSegment};
