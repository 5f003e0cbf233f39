pub mod framing;
pub mod offset;
pub mod query;
