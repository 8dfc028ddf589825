//! Totals across a packed cut list.

use crate::config::{round_to, Unit, PERCENT_DECIMALS};
use crate::model::PackedProfile;
use crate::transform::{convert, to_millimeters};
use serde::{Deserialize, Serialize};

/// Aggregate figures for a cut list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutSummary {
    /// Number of stock profiles consumed.
    pub total_profiles: usize,
    /// Number of pieces cut.
    pub total_pieces: usize,
    /// Sum of stock lengths.
    pub total_material_length: f64,
    /// Sum of cut piece lengths.
    pub total_cut_length: f64,
    /// Blade material consumed.
    pub total_kerf_length: f64,
    /// Sum of leftover lengths.
    pub total_waste_length: f64,
    /// Waste over material, in percent (one decimal).
    pub waste_percentage: f64,
    /// Unit of the length totals.
    pub unit: Unit,
}

impl CutSummary {
    /// Compute totals for formatted profiles.
    ///
    /// Length totals are in the unit of the first profile; the percentage is
    /// computed in millimeters so mixed units still compare correctly.
    pub fn from_profiles(profiles: &[PackedProfile]) -> Self {
        let unit = profiles.first().map(|p| p.unit).unwrap_or_default();
        let decimals = unit.display_decimals();
        let in_unit = |value: f64, from: Unit| convert(value, from, unit);

        let mut summary = CutSummary {
            total_profiles: profiles.len(),
            unit,
            ..Default::default()
        };

        let mut material_mm = 0.0;
        let mut waste_mm = 0.0;

        for profile in profiles {
            summary.total_pieces += profile.cuts.len();
            summary.total_material_length += in_unit(profile.original_length, profile.unit);
            summary.total_cut_length += in_unit(profile.cut_length(), profile.unit);
            summary.total_kerf_length += in_unit(profile.kerf_length, profile.unit);
            summary.total_waste_length += in_unit(profile.waste_length, profile.unit);

            material_mm += to_millimeters(profile.original_length, profile.unit);
            waste_mm += to_millimeters(profile.waste_length, profile.unit);
        }

        summary.total_material_length = round_to(summary.total_material_length, decimals);
        summary.total_cut_length = round_to(summary.total_cut_length, decimals);
        summary.total_kerf_length = round_to(summary.total_kerf_length, decimals);
        summary.total_waste_length = round_to(summary.total_waste_length, decimals);
        summary.waste_percentage = if material_mm > 0.0 {
            round_to(waste_mm / material_mm * 100.0, PERCENT_DECIMALS)
        } else {
            0.0
        };

        summary
    }
}
