mod obstruction;

pub use obstruction::{intersects_column, ObstructionQuery};
