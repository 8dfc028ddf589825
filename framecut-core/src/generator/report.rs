//! Plain-text cut list report.

use crate::config::Unit;
use crate::model::PackedProfile;
use std::fmt::Write;

use super::summary::CutSummary;

/// Format a length with the display precision of its unit.
pub fn format_length(value: f64, unit: Unit) -> String {
    format!("{:.*}{}", unit.display_decimals() as usize, value, unit)
}

/// Render formatted profiles as a cut list.
pub fn generate_report(profiles: &[PackedProfile], summary: &CutSummary) -> String {
    let mut output = String::new();

    generate_summary_section(&mut output, summary);

    for (idx, profile) in profiles.iter().enumerate() {
        generate_profile_section(&mut output, idx + 1, profile);
    }

    output
}

/// Totals block at the top of the report.
fn generate_summary_section(output: &mut String, summary: &CutSummary) {
    let unit = summary.unit;

    writeln!(output, "Profiles used: {}", summary.total_profiles).unwrap();
    writeln!(output, "Pieces: {}", summary.total_pieces).unwrap();
    writeln!(
        output,
        "Total material: {}",
        format_length(summary.total_material_length, unit)
    )
    .unwrap();
    writeln!(
        output,
        "Total cut: {}",
        format_length(summary.total_cut_length, unit)
    )
    .unwrap();

    if summary.total_kerf_length > 0.0 {
        writeln!(
            output,
            "Total kerf: {}",
            format_length(summary.total_kerf_length, unit)
        )
        .unwrap();
    }

    writeln!(
        output,
        "Total waste: {} ({:.1}%)",
        format_length(summary.total_waste_length, unit),
        summary.waste_percentage
    )
    .unwrap();
    writeln!(output).unwrap();
}

/// One block per stock profile, cuts in placement order.
fn generate_profile_section(output: &mut String, number: usize, profile: &PackedProfile) {
    writeln!(
        output,
        "Profile {} ({})",
        number,
        format_length(profile.original_length, profile.unit)
    )
    .unwrap();

    for (idx, cut) in profile.cuts.iter().enumerate() {
        writeln!(
            output,
            "  {}. {} {} {}",
            idx + 1,
            cut.ref_no,
            cut.label(),
            format_length(cut.length, cut.unit)
        )
        .unwrap();
    }

    writeln!(
        output,
        "  Waste: {}  Utilization: {:.1}%",
        format_length(profile.waste_length, profile.unit),
        profile.utilization()
    )
    .unwrap();
    writeln!(output).unwrap();
}
