//! Data model for frames, stock profiles and cut pieces.

mod frame;
mod piece;
mod profile;

pub use frame::{FrameSpec, SubComponentSpec};
pub use piece::{CutPiece, PiecePosition};
pub use profile::{PackedProfile, StandardProfileSpec};
