//! Greedy profile packer.
//!
//! Algorithm (first-fit-decreasing, open-ended profile count):
//! 1. Stable sort pieces by descending length
//! 2. For each piece, scan open profiles in creation order
//! 3. Place it on the first profile with enough waste left; a kerf is
//!    charged only when the profile already holds a cut
//! 4. Open a new profile when none fits
//!
//! Every waste deduction is rounded to `PACKING_DECIMALS` so comparisons stay
//! reproducible over long runs.

use crate::config::{round_to, Unit, EPS, PACKING_DECIMALS};
use crate::error::{CutError, Result};
use crate::model::{CutPiece, PackedProfile};

/// Sort pieces by descending length, keeping input order for equal lengths.
pub fn sort_pieces(pieces: &[CutPiece]) -> Vec<CutPiece> {
    let mut sorted = pieces.to_vec();
    sorted.sort_by(|a, b| b.length.total_cmp(&a.length));
    sorted
}

/// Pack millimeter pieces onto profiles of `stock_length` millimeters.
///
/// `kerf` is the blade width consumed between two consecutive cuts on the
/// same profile. Returned profiles are in creation order and each holds at
/// least one cut.
pub fn pack(pieces: &[CutPiece], stock_length: f64, kerf: f64) -> Result<Vec<PackedProfile>> {
    let mut profiles: Vec<PackedProfile> = Vec::new();

    for piece in sort_pieces(pieces) {
        if piece.length > stock_length + EPS {
            tracing::error!(
                "Piece of {}mm from frame '{}' reached the packer but stock is {}mm",
                piece.length,
                piece.ref_no,
                stock_length
            );
            return Err(CutError::PieceLongerThanStock {
                ref_no: piece.ref_no,
                length: piece.length,
                stock_length,
            });
        }

        let slot = profiles
            .iter()
            .position(|profile| profile.waste_length >= required_length(profile, &piece, kerf));

        match slot {
            Some(idx) => place(&mut profiles[idx], piece, kerf),
            None => {
                let mut profile = PackedProfile::new(stock_length, Unit::Millimeter);
                place(&mut profile, piece, kerf);
                profiles.push(profile);
                tracing::debug!("Opened profile {}", profiles.len());
            }
        }
    }

    tracing::debug!(
        "Packed {} piece(s) onto {} profile(s)",
        pieces.len(),
        profiles.len()
    );

    Ok(profiles)
}

/// Length a piece takes on `profile`, kerf included when it is not the first cut.
fn required_length(profile: &PackedProfile, piece: &CutPiece, kerf: f64) -> f64 {
    if profile.cuts.is_empty() {
        piece.length
    } else {
        piece.length + kerf
    }
}

fn place(profile: &mut PackedProfile, piece: CutPiece, kerf: f64) {
    let required = required_length(profile, &piece, kerf);
    if !profile.cuts.is_empty() {
        profile.kerf_length = round_to(profile.kerf_length + kerf, PACKING_DECIMALS);
    }
    profile.waste_length = round_to(profile.waste_length - required, PACKING_DECIMALS);
    profile.cuts.push(piece);
}
