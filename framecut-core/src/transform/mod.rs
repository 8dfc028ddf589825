//! Unit normalization and piece list expansion.

mod pieces;
mod units;

pub use pieces::{build_pieces, piece_count, total_required_length};
pub use units::{convert, from_millimeters, normalize_frames, normalize_profile, to_millimeters};
