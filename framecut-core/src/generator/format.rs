//! Conversion of packed results back to the caller's unit.

use crate::config::{round_to, Unit};
use crate::model::PackedProfile;
use crate::transform::from_millimeters;

/// Convert millimeter results to `unit` and round for display.
///
/// Millimeter results are rounded to one decimal. Foot results are
/// converted and rounded to two decimals, and every cut is relabeled.
pub fn format_results(profiles: Vec<PackedProfile>, unit: Unit) -> Vec<PackedProfile> {
    let decimals = unit.display_decimals();
    let present = |mm: f64| round_to(from_millimeters(mm, unit), decimals);

    profiles
        .into_iter()
        .map(|mut profile| {
            profile.original_length = present(profile.original_length);
            profile.waste_length = present(profile.waste_length);
            profile.kerf_length = present(profile.kerf_length);
            profile.unit = unit;
            for cut in &mut profile.cuts {
                cut.length = present(cut.length);
                cut.unit = unit;
            }
            profile
        })
        .collect()
}
