mod paired_offset;

pub use paired_offset::PairedOffset;
