//! framecut-core - Core library for window-frame cut list optimization.
//!
//! This library expands window frames (and their sub-components) into linear
//! pieces and packs them onto standard-length stock profiles using a
//! first-fit-decreasing heuristic, with optional saw kerf between cuts.
//!
//! # Example
//!
//! ```
//! use framecut_core::{optimize, FrameSpec, StandardProfileSpec, Unit};
//!
//! let frames = vec![FrameSpec::new("W1", 1000.0, 1200.0, Unit::Millimeter)];
//! let profile = StandardProfileSpec::new(6000.0, Unit::Millimeter);
//! let profiles = optimize(&frames, &profile).unwrap();
//! assert_eq!(profiles.len(), 1);
//! assert_eq!(profiles[0].waste_length, 1600.0);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod packing;
pub mod parser;
pub mod transform;
pub mod validation;

// Re-exports for convenience
pub use config::Unit;
pub use error::{CutError, ErrorCode, Result, ValidationError};
pub use generator::{format_results, generate_report, CutSummary};
pub use model::{
    CutPiece, FrameSpec, PackedProfile, PiecePosition, StandardProfileSpec, SubComponentSpec,
};
pub use parser::{parse_job_file, parse_job_str, Job};
pub use validation::validate;

/// Compute the cut list for `frames` on `standard_profile` stock.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Validate the input (fails fast, nothing is packed on error)
/// 2. Normalize frames and profile to millimeters
/// 3. Expand frames into pieces
/// 4. Pack pieces onto profiles
/// 5. Convert results back to the profile's unit and round
///
/// # Returns
///
/// The packed profiles in creation order, lengths in the profile's unit.
pub fn optimize(
    frames: &[FrameSpec],
    standard_profile: &StandardProfileSpec,
) -> Result<Vec<PackedProfile>> {
    validate(frames, standard_profile)?;

    let frames_mm = transform::normalize_frames(frames);
    let profile_mm = transform::normalize_profile(standard_profile);

    let pieces = transform::build_pieces(&frames_mm);
    let packed = packing::pack(&pieces, profile_mm.length, profile_mm.effective_kerf())?;

    tracing::info!(
        "Cut {} piece(s) from {} profile(s) of {}{}",
        pieces.len(),
        packed.len(),
        standard_profile.length,
        standard_profile.unit
    );

    Ok(format_results(packed, standard_profile.unit))
}

/// Run the optimizer on a job.
pub fn optimize_job(job: &Job) -> Result<Vec<PackedProfile>> {
    optimize(&job.frames, &job.profile)
}

/// Load a job file and compute its cut list.
pub fn optimize_job_file(input_path: &std::path::Path) -> Result<Vec<PackedProfile>> {
    let job = parse_job_file(input_path)?;
    optimize_job(&job)
}
