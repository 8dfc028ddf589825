//! First-fit-decreasing packing of cut pieces onto stock profiles.

mod packer;

pub use packer::{pack, sort_pieces};
